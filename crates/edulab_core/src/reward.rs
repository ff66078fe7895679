use std::path::PathBuf;

/// What to show once every quiz question on a page is correct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reward {
    /// The configured image exists
    Image(PathBuf),
    /// No usable image; carries the warning to show instead
    Missing(String),
}

/// Optional static image shown as a reward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardAsset {
    path: Option<PathBuf>,
}

impl RewardAsset {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn check(&self) -> Reward {
        match &self.path {
            Some(path) if path.is_file() => Reward::Image(path.clone()),
            Some(path) => Reward::Missing(format!(
                "Reward image not found: {}",
                path.display()
            )),
            None => Reward::Missing("No reward image configured".to_string()),
        }
    }
}
