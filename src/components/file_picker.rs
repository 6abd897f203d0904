use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use super::preview_grid::PreviewGrid;
use crate::bindings::selected_files;
use crate::services::preview_service::use_preview_state;

/// Trigger button, hidden file input, preview grid and optional continue button.
///
/// Expects a `PreviewState` in context.
#[component]
pub fn FilePicker() -> impl IntoView {
    let state = use_preview_state();
    let config = state.config();
    let input_ref = NodeRef::<html::Input>::new();

    let open_dialog = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        state.select_files(selected_files(&input));
        // Clear so picking the same files again fires another change event
        input.set_value("");
    };

    let on_continue = move |_: ev::MouseEvent| state.go_back();

    let button_class = "px-4 py-2 rounded bg-blue-600 hover:bg-blue-500 text-white font-medium cursor-pointer";

    view! {
        <div class="file-picker flex flex-col gap-4">
            <input
                node_ref=input_ref
                id="file-input"
                type="file"
                class="hidden"
                multiple=true
                accept=config.accept.clone()
                on:change=on_change
            />
            <button id="file-button" type="button" class=button_class on:click=open_dialog>
                "Choose files / Выбрать файлы"
            </button>
            <PreviewGrid />
            {config.continue_enabled.then(|| view! {
                <button id="continue-button" type="button" class=button_class on:click=on_continue>
                    "Continue / Продолжить"
                </button>
            })}
        </div>
    }
}
