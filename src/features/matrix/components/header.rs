use leptos::prelude::*;

#[component]
pub fn MatrixHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="matrix-header">
            <h1>"🎃 " {title} " 👻"</h1>
        </header>
    }
}
