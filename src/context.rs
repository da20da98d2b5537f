//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Human-readable description of the latest action, fed to the
    /// aria-live region - read
    pub announcement: ReadSignal<String>,
    set_announcement: WriteSignal<String>,
}

impl AppContext {
    pub fn new(announcement: (ReadSignal<String>, WriteSignal<String>)) -> Self {
        Self {
            announcement: announcement.0,
            set_announcement: announcement.1,
        }
    }

    /// Publish a description of the latest action
    pub fn announce(&self, message: impl Into<String>) {
        self.set_announcement.set(message.into());
    }
}
