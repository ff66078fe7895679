/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Lotto,
    BasicForm,
    StandardForm,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Lotto, TabId::BasicForm, TabId::StandardForm];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Lotto => "Lotto",
            TabId::BasicForm => "y = ax^2",
            TabId::StandardForm => "y = a(x-p)^2 + q",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Lotto => 0,
            TabId::BasicForm => 1,
            TabId::StandardForm => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Lotto),
            1 => Some(TabId::BasicForm),
            2 => Some(TabId::StandardForm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_index(tab.index()), Some(tab));
        }
        assert_eq!(TabId::from_index(3), None);
    }
}
