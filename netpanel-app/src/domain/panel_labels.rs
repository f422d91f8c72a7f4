use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLabels {
    pub error_heading: String,
    pub retrying_heading: String,
    pub retry: String,
    pub default_message: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            error_heading: "Connection Error".to_string(),
            retrying_heading: "Reconnecting…".to_string(),
            retry: "Retry".to_string(),
            default_message: "Cannot connect to server".to_string(),
        }
    }
}
