use leptos::prelude::*;
use netpanel_app::domain::ConnectionReport;

#[component]
pub fn ConnectedBanner(report: ConnectionReport) -> impl IntoView {
    let checked_at = report.checked_at.format("%H:%M:%S UTC").to_string();

    view! {
        <div class="connected">
            <p class="connected__title">"Connected"</p>
            <p class="connected__detail">
                "Server answered at " {checked_at} " on attempt " {report.attempt}
            </p>
        </div>
    }
}
