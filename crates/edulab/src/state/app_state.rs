use std::path::Path;

use edulab_core::reward::RewardAsset;

use super::{BasicFormState, LottoState, ModalState, StandardFormState, TabId};
use crate::config::AppConfig;

#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub exit: bool,
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub lotto: LottoState,
    pub basic: BasicFormState,
    pub standard: StandardFormState,
}

impl AppState {
    pub fn new(config: &AppConfig, data_dir: &Path) -> Self {
        let reward = RewardAsset::new(config.reward_image_path(data_dir));

        Self {
            active_tab: TabId::default(),
            exit: false,
            modal: ModalState::None,
            error_message: None,
            lotto: LottoState::new(config),
            basic: BasicFormState::new(reward.clone()),
            standard: StandardFormState::new(reward),
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        if self.active_tab != tab {
            tracing::debug!(tab = tab.name(), "Switched tab");
        }
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::warn!(error = %msg, "Error shown in status bar");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
