use leptos::prelude::*;

use crate::core::config::AppConfig;
use crate::core::models::Category;
use crate::features::matrix::{use_board, MatrixHeader, Quadrant, TaskCard, TaskInput};

#[component]
pub fn Matrix() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let board = use_board();

    let tracker = board.tracker;
    let begin_drag = board.begin_drag;
    let cancel_drag = board.cancel_drag;
    let delete_task = board.delete_task;

    view! {
        <div class="matrix-page">
            <MatrixHeader title=config.title />
            <TaskInput
                value=board.pending_input()
                placeholder=config.input_placeholder
                on_input=board.set_input
                on_submit=board.add_task
            />
            <div class="matrix-grid">
                {Category::all().into_iter().map(|category| {
                    let tasks = board.tasks(category);
                    let task_count = Signal::derive(move || tasks.with(Vec::len));

                    view! {
                        <Quadrant
                            category=category
                            task_count=task_count
                            on_drop=board.complete_drag
                        >
                            // Re-renders the quadrant's rows whenever its list changes
                            {move || {
                                tasks.get()
                                    .into_iter()
                                    .map(|task| {
                                        let task_id = task.id.clone();
                                        let dragging = Signal::derive(move || {
                                            tracker.with(|t| t.is_dragging(&task_id))
                                        });

                                        view! {
                                            <TaskCard
                                                task=task
                                                category=category
                                                dragging=dragging
                                                begin_drag=begin_drag
                                                cancel_drag=cancel_drag
                                                on_delete=delete_task
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Quadrant>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
