use std::sync::Arc;

use leptos::prelude::*;

use crate::bindings::{BrowserHistory, BrowserNotifier};
use crate::components::FilePicker;
use crate::config::PickerConfig;
use crate::services::preview_service::provide_preview_state;
use crate::widget::PickerWidget;

#[component]
pub fn App() -> impl IntoView {
    let config = PickerConfig::load();
    let widget = PickerWidget::new(config, Arc::new(BrowserNotifier), Arc::new(BrowserHistory));
    provide_preview_state(widget);

    view! {
        <main class="p-4">
            <FilePicker />
        </main>
    }
}
