use leptos::prelude::*;

use crate::core::models::Category;
use crate::core::services::{DragError, DragToken};
use crate::features::matrix::services::read_token;

/// One panel of the 2x2 grid. Accepts any drop and hands whatever token it
/// could read off the transfer to `on_drop`.
#[component]
pub fn Quadrant(
    category: Category,
    #[prop(into)] task_count: Signal<usize>,
    on_drop: Callback<(Result<DragToken, DragError>, Category)>,
    children: Children,
) -> impl IntoView {
    let info = category.info();

    view! {
        <section
            class="quadrant"
            data-category=category.as_str()
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev| {
                ev.prevent_default();
                on_drop.run((read_token(&ev), category));
            }
        >
            <div class="quadrant-header">
                <span class="quadrant-icon">{info.icon}</span>
                <div class="quadrant-labels">
                    <h3>{info.title}</h3>
                    <span class="quadrant-action">{info.action}</span>
                </div>
                <span class="task-count">{move || task_count.get()}</span>
            </div>
            <div class="quadrant-content">{children()}</div>
        </section>
    }
}
