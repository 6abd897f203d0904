//! Browser seams the widget depends on.
//!
//! The widget only sees the `Notifier` and `Navigator` traits; the browser
//! implementations here are injected at mount time and fakes are injected in tests.

/// Blocking user notification.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Session history navigation.
pub trait Navigator: Send + Sync {
    fn back(&self);
}

/// `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to alert on: {message}");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

/// `window.history.back()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl Navigator for BrowserHistory {
    fn back(&self) {
        let history = web_sys::window().and_then(|w| w.history().ok());
        match history {
            Some(history) => {
                if let Err(e) = history.back() {
                    log::error!("Failed to navigate back: {:?}", e);
                }
            }
            None => log::warn!("No session history available"),
        }
    }
}
