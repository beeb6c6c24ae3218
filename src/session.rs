//! Explicit dialog context
//!
//! A [`Session`] holds the configuration, what the prober found, and the
//! backend chosen from it. Every dialog is created from a session, so
//! detection happens once, up front, and only again when the caller asks
//! for it with [`Session::rescan`].

use tracing::{debug, info};

use crate::backend::{Backend, Backends, DesktopHint, Platform, Prober};
use crate::config::DialogConfig;
use crate::executor::Executor;

#[derive(Debug, Clone)]
pub struct Session {
    config: DialogConfig,
    prober: Prober,
    platform: Platform,
    hint: DesktopHint,
    backends: Backends,
    backend: Backend,
}

impl Session {
    /// Probe the process `PATH` on the current platform
    pub fn new(config: DialogConfig) -> Self {
        Self::with_prober(config, Prober::new())
    }

    /// Probe with a custom prober (e.g. a fake search path)
    pub fn with_prober(config: DialogConfig, prober: Prober) -> Self {
        Self::with_parts(config, prober, Platform::current(), DesktopHint::from_env())
    }

    pub fn with_parts(
        config: DialogConfig,
        prober: Prober,
        platform: Platform,
        hint: DesktopHint,
    ) -> Self {
        let mut session = Self {
            config,
            prober,
            platform,
            hint,
            backends: Backends::default(),
            backend: Backend::Unavailable,
        };
        session.rescan();
        session
    }

    /// Whether dialogs will actually show anything
    pub fn available(&self) -> bool {
        self.backend.is_available()
    }

    /// Detect installed helpers again and reselect the backend
    pub fn rescan(&mut self) {
        self.backends = self.prober.probe();
        self.backend =
            self.backends
                .select(self.platform, self.config.preferred_helper, self.hint);

        if self.config.verbose {
            info!(backend = %self.backend, hint = ?self.hint, "Selected dialog backend");
        } else {
            debug!(backend = %self.backend, hint = ?self.hint, "Selected dialog backend");
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn backends(&self) -> Backends {
        self.backends
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn desktop_hint(&self) -> DesktopHint {
        self.hint
    }

    /// Fresh executor sharing this session's search path and polling settings
    pub fn executor(&self) -> Executor {
        Executor::with_search_path(self.prober.search_path().cloned())
            .verbose(self.config.verbose)
            .backoff(self.config.poll_interval(), self.config.max_backoff())
    }
}
