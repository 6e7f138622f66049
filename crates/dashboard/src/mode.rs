//! Mock/real data mode.
//!
//! [`ModeSwitch`] is the one piece of mutable state in the data layer. It is
//! created by the composition root and handed to whoever needs it; reads never
//! block and every flip is logged.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Which source answers a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// The bundled seed collection.
    #[default]
    Mock,
    /// The remote webhook.
    Real,
}

impl DataMode {
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Real => "real",
        }
    }
}

impl From<bool> for DataMode {
    /// `true` selects the remote source.
    fn from(use_real_data: bool) -> Self {
        if use_real_data { Self::Real } else { Self::Mock }
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared, process-wide mode flag. Starts in [`DataMode::Mock`].
///
/// Clones observe and mutate the same flag.
#[derive(Debug, Clone, Default)]
pub struct ModeSwitch {
    use_real_data: Arc<AtomicBool>,
}

impl ModeSwitch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub fn get(&self) -> DataMode {
        DataMode::from(self.use_real_data.load(Ordering::Acquire))
    }

    /// Change the mode. Takes effect for queries started afterwards.
    pub fn set(&self, mode: DataMode) {
        let previous = DataMode::from(
            self.use_real_data
                .swap(mode.is_real(), Ordering::AcqRel),
        );
        if previous != mode {
            info!(from = %previous, to = %mode, "Data mode changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_mock_mode() {
        assert_eq!(ModeSwitch::new().get(), DataMode::Mock);
    }

    #[test]
    fn test_clones_share_state() {
        let switch = ModeSwitch::new();
        let other = switch.clone();
        other.set(DataMode::Real);
        assert_eq!(switch.get(), DataMode::Real);
        switch.set(DataMode::Mock);
        assert_eq!(other.get(), DataMode::Mock);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(DataMode::from(true), DataMode::Real);
        assert_eq!(DataMode::from(false), DataMode::Mock);
        assert!(DataMode::Real.is_real());
        assert_eq!(DataMode::Real.to_string(), "real");
    }
}
