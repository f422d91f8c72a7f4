use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use netpanel_app::AppContext;
use netpanel_ui::pages::CheckConnectionFn;
use netpanel_ui::App;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<CheckConnectionFn>();
    tracing::info!("Registered server function: CheckConnectionFn");

    let health = Router::new()
        .route("/health", get(handle_health))
        .with_state(app_context.clone());

    let app = Router::new()
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .merge(health)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

/// Reports the connection-check counters without running a check, so polling
/// this route never uses up the simulated failures meant for the page.
async fn handle_health(State(ctx): State<AppContext>) -> Json<serde_json::Value> {
    let check = &ctx.check_connection;

    Json(serde_json::json!({
        "status": "ok",
        "attempts": check.attempts(),
        "failures_remaining": check.failures_remaining(),
    }))
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 500px; margin: 0 auto; }

.error-panel {
    text-align: center;
    background: rgba(180, 99, 122, 0.08);
    border: 2px solid rgba(180, 99, 122, 0.4);
    border-radius: 12px;
    padding: 2rem 1.5rem;
    margin: 2rem 0;
}
.error-panel__icon { display: flex; justify-content: center; margin-bottom: 1rem; color: var(--love); }
.error-panel__glyph { width: 48px; height: 48px; }
.error-panel__glyph--spin { animation: spin 1s linear infinite; }
.error-panel__composite { position: relative; display: inline-block; width: 48px; height: 48px; }
.error-panel__badge {
    position: absolute; right: -6px; bottom: -6px;
    width: 22px; height: 22px; border-radius: 50%;
    background: var(--surface); color: var(--gold);
    display: flex; align-items: center; justify-content: center;
}
.error-panel__badge-glyph { width: 18px; height: 18px; }
.error-panel__heading { color: var(--love); font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.error-panel__message { color: #8b3d4d; margin-bottom: 1.25rem; white-space: pre-wrap; }
.error-panel__retry {
    display: inline-flex; align-items: center; gap: 0.5rem;
    padding: 0.5rem 1rem; background: var(--love); color: var(--base);
    border: none; border-radius: 6px; font-weight: 600; cursor: pointer;
}
.error-panel__retry-glyph { width: 16px; height: 16px; }

.loading { text-align: center; padding: 2rem 0; }
.loading__spinner {
    width: 40px; height: 40px; margin: 0 auto 1rem;
    border: 4px solid var(--overlay); border-top-color: var(--pine);
    border-radius: 50%; animation: spin 1s linear infinite;
}
.loading__text { color: var(--subtle); }

.connected { background: var(--surface); border: 2px solid var(--foam); border-radius: 12px; padding: 1.5rem; margin: 2rem 0; text-align: center; }
.connected__title { color: var(--pine); font-weight: 700; font-size: 1.25rem; margin-bottom: 0.5rem; }
.connected__detail { color: var(--subtle); }

@keyframes spin { to { transform: rotate(360deg); } }
"#;

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"netpanel"</title>
                <style>{CSS}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpanel_app::config::AppConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn test_health_leaves_check_budget_alone() {
        let ctx = AppContext::new(&AppConfig {
            fail_first: 1,
            check_delay: Duration::ZERO,
        });

        let Json(body) = handle_health(State(ctx.clone())).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["attempts"], 0);
        assert_eq!(body["failures_remaining"], 1);

        assert!(ctx.check_connection.execute().await.is_err());

        let Json(body) = handle_health(State(ctx.clone())).await;
        assert_eq!(body["attempts"], 1);
        assert_eq!(body["failures_remaining"], 0);
    }
}
