mod connected_banner;
mod error_panel;
mod icons;
mod loading_spinner;

pub use connected_banner::ConnectedBanner;
pub use error_panel::ErrorPanel;
pub use icons::{AlertIcon, DisconnectedIcon, RefreshIcon};
pub use loading_spinner::LoadingSpinner;
