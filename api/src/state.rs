//! Shared application state handed to every handler.

use db::Store;
use marker::GradingEngine;
use std::sync::Arc;
use std::time::Duration;
use util::config;
use util::notifications::NotificationQueue;

/// Timing knobs read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub grading_delay: Duration,
    pub grading_timeout: Duration,
    pub assistant_delay: Duration,
}

impl Settings {
    pub fn from_config() -> Self {
        Self {
            grading_delay: Duration::from_millis(config::grading_delay_ms()),
            grading_timeout: Duration::from_millis(config::grading_timeout_ms()),
            assistant_delay: Duration::from_millis(config::assistant_delay_ms()),
        }
    }

    /// No artificial delays; the default timeout still applies.
    pub fn immediate() -> Self {
        Self {
            grading_delay: Duration::ZERO,
            grading_timeout: Duration::from_secs(30),
            assistant_delay: Duration::ZERO,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
    engine: Arc<GradingEngine>,
    notifications: NotificationQueue,
    settings: Settings,
}

impl AppState {
    pub fn new(
        store: Store,
        engine: GradingEngine,
        notifications: NotificationQueue,
        settings: Settings,
    ) -> Self {
        Self {
            store: Arc::new(store),
            engine: Arc::new(engine),
            notifications,
            settings,
        }
    }

    /// Seeded dataset, engine and queue configured from [`util::config`].
    pub fn from_config() -> Self {
        let seed = config::grading_seed();
        if let Some(seed) = seed {
            tracing::info!(seed, "Grading with a fixed random seed");
        }
        Self::new(
            Store::seeded(),
            GradingEngine::new(seed),
            NotificationQueue::new(Duration::from_millis(config::toast_ttl_ms())),
            Settings::from_config(),
        )
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn engine(&self) -> &Arc<GradingEngine> {
        &self.engine
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }
}
