//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::mode::{DataMode, ModeSwitch};
use crate::service::DataService;
use crate::source::DataError;

/// Application state shared across all handlers.
///
/// Cheap to clone; every clone shares one [`DataService`] and one
/// [`ModeSwitch`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service: DataService,
    mode: ModeSwitch,
}

impl AppState {
    #[must_use]
    pub fn new(service: DataService, mode: ModeSwitch) -> Self {
        Self {
            inner: Arc::new(AppStateInner { service, mode }),
        }
    }

    /// Build state from configuration, starting in mock mode.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Client` if the webhook client cannot be built.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, DataError> {
        Ok(Self::new(
            DataService::from_config(&config.webhook)?,
            ModeSwitch::new(),
        ))
    }

    #[must_use]
    pub fn service(&self) -> &DataService {
        &self.inner.service
    }

    #[must_use]
    pub fn mode_switch(&self) -> &ModeSwitch {
        &self.inner.mode
    }

    /// Mode at this instant; read once per request.
    #[must_use]
    pub fn mode(&self) -> DataMode {
        self.inner.mode.get()
    }
}
