use leptos::prelude::*;
use leptos::task::spawn_local;
use netpanel_app::domain::{ConnectionReport, ConnectionStatus};
use netpanel_errors::AppError;
use server_fn::ServerFnError;

use crate::components::{ConnectedBanner, ErrorPanel, LoadingSpinner};

#[server(CheckConnectionFn, "/api", endpoint = "check_connection")]
pub async fn check_connection() -> Result<ConnectionReport, ServerFnError> {
    use netpanel_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.check_connection.execute().await.map_err(|e| {
        tracing::warn!("check_connection: {}", e);
        ServerFnError::new(e.to_string())
    })
}

fn run_check(status: RwSignal<ConnectionStatus>) {
    spawn_local(async move {
        let outcome = check_connection()
            .await
            .map_err(|e| AppError::from_server_message(&e.to_string()));
        status.set(ConnectionStatus::settle(outcome));
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let status = RwSignal::new(ConnectionStatus::Checking);

    // Browser only; the server render shows the spinner.
    Effect::new(move |_| run_check(status));

    let on_retry = Callback::new(move |_: ()| {
        status.update(ConnectionStatus::begin_retry);
        run_check(status);
    });

    let panel_message = Signal::derive(move || status.with(|s| s.message().map(str::to_string)));
    let panel_state = Signal::derive(move || status.with(ConnectionStatus::panel_state));

    view! {
        <div class="hero">
            <h1 class="hero__title">"netpanel"</h1>
            <p class="hero__subtitle">
                "Checks the connection to the server and offers a retry when it fails"
            </p>
        </div>

        <Show
            when=move || status.with(ConnectionStatus::is_down)
            fallback=move || status.with(|s| match s {
                ConnectionStatus::Connected(report) => view! {
                    <ConnectedBanner report=report.clone()/>
                }.into_any(),
                _ => view! { <LoadingSpinner/> }.into_any(),
            })
        >
            <ErrorPanel on_retry=on_retry message=panel_message state=panel_state/>
        </Show>
    }
}
