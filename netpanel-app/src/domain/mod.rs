mod connection_report;
mod connection_status;
mod panel_labels;
mod panel_props;
mod panel_state;
mod panel_view;

pub use connection_report::ConnectionReport;
pub use connection_status::ConnectionStatus;
pub use panel_labels::PanelLabels;
pub use panel_props::PanelProps;
pub use panel_state::PanelState;
pub use panel_view::{PanelIcon, PanelView, RetryControl};
