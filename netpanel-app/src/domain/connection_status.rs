use super::{ConnectionReport, PanelState};
use netpanel_errors::AppError;

/// What a page hosting the error panel knows about its server connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected(ConnectionReport),
    Failed { message: String },
    Retrying { message: String },
}

impl ConnectionStatus {
    pub fn settle(outcome: Result<ConnectionReport, AppError>) -> Self {
        match outcome {
            Ok(report) => Self::Connected(report),
            Err(e) => Self::Failed {
                message: e.user_message().to_string(),
            },
        }
    }

    /// Moves a failed connection into the retrying state, keeping the last
    /// failure message on screen. Other states are left alone.
    pub fn begin_retry(&mut self) {
        if let Self::Failed { message } = self {
            *self = Self::Retrying {
                message: std::mem::take(message),
            };
        }
    }

    pub fn is_down(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Retrying { .. })
    }

    pub fn panel_state(&self) -> Option<PanelState> {
        match self {
            Self::Failed { .. } => Some(PanelState::Error),
            Self::Retrying { .. } => Some(PanelState::Retrying),
            Self::Checking | Self::Connected(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } | Self::Retrying { message } => Some(message),
            Self::Checking | Self::Connected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_failure_then_retry_keeps_message() {
        let mut status =
            ConnectionStatus::settle(Err(AppError::ConnectionFailed("Timeout after 30s".into())));
        assert_eq!(status.panel_state(), Some(PanelState::Error));
        assert_eq!(status.message(), Some("Timeout after 30s"));

        status.begin_retry();
        assert_eq!(status.panel_state(), Some(PanelState::Retrying));
        assert_eq!(status.message(), Some("Timeout after 30s"));
        assert!(status.is_down());
    }

    #[test]
    fn test_retry_outcomes() {
        let report = ConnectionReport::new(Utc::now(), 3);
        let status = ConnectionStatus::settle(Ok(report.clone()));
        assert_eq!(status, ConnectionStatus::Connected(report));
        assert!(!status.is_down());
        assert_eq!(status.panel_state(), None);

        let status = ConnectionStatus::settle(Err(AppError::Unreachable));
        assert_eq!(status.message(), Some("Cannot connect to server"));
    }

    #[test]
    fn test_begin_retry_ignores_other_states() {
        let mut status = ConnectionStatus::Checking;
        status.begin_retry();
        assert_eq!(status, ConnectionStatus::Checking);
    }
}
