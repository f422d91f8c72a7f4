use leptos::prelude::*;
use netpanel_app::domain::{PanelIcon, PanelLabels, PanelProps, PanelState, PanelView};

use super::icons::{AlertIcon, DisconnectedIcon, RefreshIcon};

/// Network-error panel with a retry button.
///
/// The panel never changes its own state: after `on_retry` runs, the caller
/// decides whether to pass `PanelState::Retrying`, a new message, or to
/// unmount the panel altogether.
#[component]
pub fn ErrorPanel(
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into, optional)] message: MaybeProp<String>,
    #[prop(into, optional)] state: MaybeProp<PanelState>,
    #[prop(optional)] labels: Option<PanelLabels>,
) -> impl IntoView {
    let labels = labels.unwrap_or_default();

    let panel = Memo::new(move |_| {
        let props = PanelProps::new()
            .with_message(message.get())
            .with_state(state.get().unwrap_or_default());
        PanelView::render(&props, &labels)
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        let current = panel.get_untracked();
        if current.request_retry(|| on_retry.run(())) {
            tracing::debug!("Retry requested from error panel");
        }
    };

    view! {
        <div class="error-panel">
            <div class="error-panel__icon">
                {move || match panel.with(|p| p.icon) {
                    PanelIcon::Spinning => view! {
                        <RefreshIcon class="error-panel__glyph error-panel__glyph--spin"/>
                    }.into_any(),
                    PanelIcon::DisconnectedWithAlert => view! {
                        <span class="error-panel__composite">
                            <DisconnectedIcon class="error-panel__glyph"/>
                            <span class="error-panel__badge">
                                <AlertIcon class="error-panel__badge-glyph"/>
                            </span>
                        </span>
                    }.into_any(),
                }}
            </div>
            <h3 class="error-panel__heading">{move || panel.with(|p| p.heading.clone())}</h3>
            <p class="error-panel__message">{move || panel.with(|p| p.body.clone())}</p>
            {move || panel.with(|p| p.retry.clone()).map(|control| view! {
                <button type="button" class="error-panel__retry" on:click=on_click>
                    <RefreshIcon class="error-panel__retry-glyph"/>
                    {control.label}
                </button>
            })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(message: Option<&str>, state: Option<PanelState>) -> String {
        Owner::new().with(|| {
            let message: MaybeProp<String> = message.map(str::to_string).into();
            let state: MaybeProp<PanelState> = state.into();

            view! {
                <ErrorPanel on_retry=Callback::new(|_: ()| {}) message=message state=state/>
            }
            .to_html()
        })
    }

    fn message_text(html: &str) -> &str {
        let open = r#"class="error-panel__message">"#;
        let start = html.find(open).expect("message paragraph") + open.len();
        let len = html[start..].find("</p>").expect("closing tag");
        &html[start..start + len]
    }

    #[test]
    fn test_defaults_render_error_with_button() {
        let html = render(None, None);

        assert!(html.contains("error-panel__composite"));
        assert!(html.contains("error-panel__badge"));
        assert!(!html.contains("error-panel__glyph--spin"));
        assert!(html.contains("Connection Error"));
        assert_eq!(message_text(&html), "Cannot connect to server");
        assert_eq!(html.matches(r#"class="error-panel__retry""#).count(), 1);
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("Retry"));
    }

    #[test]
    fn test_error_state_renders_message_and_button() {
        let html = render(Some("Timeout after 30s"), Some(PanelState::Error));

        assert_eq!(message_text(&html), "Timeout after 30s");
        assert!(html.contains(r#"class="error-panel__retry""#));
        assert!(html.contains("error-panel__composite"));
    }

    #[test]
    fn test_retrying_state_spins_without_button() {
        let html = render(Some("Timeout after 30s"), Some(PanelState::Retrying));

        assert!(html.contains("error-panel__glyph--spin"));
        assert!(!html.contains("error-panel__composite"));
        assert!(html.contains("Reconnecting…"));
        assert!(!html.contains("Connection Error"));
        assert_eq!(message_text(&html), "Timeout after 30s");
        assert!(!html.contains("error-panel__retry"));
        assert!(!html.contains("<button"));
    }

    // Leptos writes a single space as the placeholder for an empty text node.
    #[test]
    fn test_empty_message_renders_no_default() {
        let html = render(Some(""), None);

        assert!(!html.contains("Cannot connect to server"));
        assert!(message_text(&html).trim().is_empty());
    }
}
