use super::{PanelLabels, PanelState};

/// Data inputs of the error panel. The retry action is supplied separately
/// by whoever renders the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelProps {
    pub message: Option<String>,
    pub state: PanelState,
}

impl PanelProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn with_state(mut self, state: PanelState) -> Self {
        self.state = state;
        self
    }

    pub fn with_retrying(self, is_retrying: bool) -> Self {
        self.with_state(PanelState::from(is_retrying))
    }

    /// The default applies only when no message was given; an empty string
    /// is kept as is.
    pub fn resolved_message(&self, labels: &PanelLabels) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| labels.default_message.clone())
    }
}
