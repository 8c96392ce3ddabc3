//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to (re)fetch the lists
    set_reload_trigger: WriteSignal<u32>,
    /// Endpoint settings
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(set_reload_trigger: WriteSignal<u32>, config: AppConfig) -> Self {
        Self {
            set_reload_trigger,
            config: StoredValue::new(config),
        }
    }

    /// Fetch the lists again
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn lists_url(&self) -> String {
        self.config.with_value(|c| c.lists_url.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
