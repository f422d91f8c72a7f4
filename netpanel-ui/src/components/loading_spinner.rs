use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[prop(into, default = "Checking connection…".to_string())] text: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__text">{text}</p>
        </div>
    }
}
