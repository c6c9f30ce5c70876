use leptos::prelude::*;

/// Text field plus "Add" button. Enter in the field submits too.
#[component]
pub fn TaskInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="task-input-bar">
            <input
                type="text"
                class="task-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                }
            />
            <button class="btn-primary" on:click=move |_| on_submit.run(())>"Add"</button>
        </div>
    }
}
