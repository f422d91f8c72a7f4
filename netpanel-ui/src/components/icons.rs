use leptos::prelude::*;

#[component]
pub fn RefreshIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/>
            <path d="M21 3v5h-5"/>
            <path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/>
            <path d="M8 16H3v5"/>
        </svg>
    }
}

/// Wifi arcs with a slash through them.
#[component]
pub fn DisconnectedIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 20h.01"/>
            <path d="M8.5 16.429a5 5 0 0 1 7 0"/>
            <path d="M5 12.859a10 10 0 0 1 5.17-2.69"/>
            <path d="M19 12.859a10 10 0 0 0-2.007-1.523"/>
            <path d="M2 8.82a15 15 0 0 1 4.177-2.643"/>
            <path d="M22 8.82a15 15 0 0 0-11.288-3.764"/>
            <path d="m2 2 20 20"/>
        </svg>
    }
}

#[component]
pub fn AlertIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="10"/>
            <line x1="12" x2="12" y1="8" y2="12"/>
            <line x1="12" x2="12.01" y1="16" y2="16"/>
        </svg>
    }
}
