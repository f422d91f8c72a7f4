use super::{PanelLabels, PanelProps, PanelState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIcon {
    /// A single refresh glyph, rotating.
    Spinning,
    /// Wifi-off glyph with an alert badge on its bottom-right corner.
    DisconnectedWithAlert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryControl {
    pub label: String,
}

/// Everything one render pass of the error panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub icon: PanelIcon,
    pub heading: String,
    pub body: String,
    pub retry: Option<RetryControl>,
}

impl PanelView {
    pub fn render(props: &PanelProps, labels: &PanelLabels) -> Self {
        let body = props.resolved_message(labels);

        match props.state {
            PanelState::Retrying => Self {
                icon: PanelIcon::Spinning,
                heading: labels.retrying_heading.clone(),
                body,
                retry: None,
            },
            PanelState::Error => Self {
                icon: PanelIcon::DisconnectedWithAlert,
                heading: labels.error_heading.clone(),
                body,
                retry: Some(RetryControl {
                    label: labels.retry.clone(),
                }),
            },
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.icon == PanelIcon::Spinning
    }

    /// Runs `on_retry` once when this view offers a retry control. Returns
    /// whether it ran.
    pub fn request_retry(&self, on_retry: impl FnOnce()) -> bool {
        if self.retry.is_none() {
            return false;
        }
        on_retry();
        true
    }
}
