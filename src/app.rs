use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::pages::Matrix;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app">
            <Matrix />
        </main>
    }
}
