//! Fakes and helpers shared by the browser tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use file_picker_preview::bindings::{Navigator, Notifier};
use file_picker_preview::config::PickerConfig;
use file_picker_preview::widget::PickerWidget;
use wasm_bindgen::JsCast;
use web_sys::{File, FilePropertyBag, HtmlElement};

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct CountingNavigator {
    backs: AtomicUsize,
}

impl CountingNavigator {
    pub fn backs(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub widget: PickerWidget,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<CountingNavigator>,
}

pub fn harness(config: PickerConfig) -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(CountingNavigator::default());
    let widget = PickerWidget::new(config, notifier.clone(), navigator.clone());
    Harness {
        widget,
        notifier,
        navigator,
    }
}

pub fn make_file(name: &str, bytes: &[u8], mime: &str) -> File {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = FilePropertyBag::new();
    options.set_type(mime);
    File::new_with_u8_array_sequence_and_options(&parts, name, &options).unwrap()
}

/// Fresh `<div>` attached to the body, so tests don't see each other's DOM.
pub fn test_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

/// Let spawned tasks and render effects run.
pub async fn settle() {
    for _ in 0..5 {
        gloo_timers::future::TimeoutFuture::new(10).await;
    }
}
