use leptos::prelude::*;

use crate::core::models::{Category, Task};
use crate::core::services::DragToken;
use crate::features::matrix::services::write_token;

// Draggable row for a single task, with its delete button
#[component]
pub fn TaskCard(
    task: Task,
    category: Category,
    #[prop(into)] dragging: Signal<bool>,
    begin_drag: Callback<(String, Category), DragToken>,
    cancel_drag: Callback<()>,
    on_delete: Callback<(Category, String)>,
) -> impl IntoView {
    let added = format!("Added {}", task.created_at.format("%Y-%m-%d %H:%M UTC"));
    let id_for_drag = task.id.clone();
    let id_for_delete = task.id.clone();

    view! {
        <div
            class="task-card"
            class:dragging=move || dragging.get()
            draggable="true"
            title=added
            on:dragstart=move |ev| {
                let token = begin_drag.run((id_for_drag.clone(), category));
                if let Err(e) = write_token(&ev, &token) {
                    log::warn!("Could not start drag for task {}: {}", token.id, e);
                }
            }
            on:dragend=move |_| cancel_drag.run(())
        >
            <span class="task-content">{task.content}</span>
            <button
                class="task-action-btn delete-btn"
                title="Delete task"
                on:click=move |_| on_delete.run((category, id_for_delete.clone()))
            >"🗑"</button>
        </div>
    }
}
