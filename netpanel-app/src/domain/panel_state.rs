use serde::{Deserialize, Serialize};

/// Which of the two displays the error panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelState {
    #[default]
    Error,
    Retrying,
}

impl PanelState {
    pub fn is_retrying(self) -> bool {
        matches!(self, Self::Retrying)
    }
}

impl From<bool> for PanelState {
    fn from(is_retrying: bool) -> Self {
        if is_retrying {
            Self::Retrying
        } else {
            Self::Error
        }
    }
}
