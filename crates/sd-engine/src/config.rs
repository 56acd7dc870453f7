//! Tunables for the path engine.

use serde::{Deserialize, Serialize};

use crate::fuzzy::DEFAULT_CUTOFF;

/// Configuration for interactive play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum similarity (0.0-1.0) a write-in needs to match an option.
    pub fuzzy_cutoff: f64,
    /// Number of movies or costars offered per turn.
    pub menu_size: usize,
    /// Oversampling factor for costar menus: `menu_size * costar_pool` random
    /// cast members are drawn before ranking by popularity.
    pub costar_pool: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: DEFAULT_CUTOFF,
            menu_size: 7,
            costar_pool: 3,
        }
    }
}

impl EngineConfig {
    /// Set the fuzzy-match cutoff (clamped to 0.0-1.0).
    pub fn with_fuzzy_cutoff(mut self, cutoff: f64) -> Self {
        self.fuzzy_cutoff = cutoff.clamp(0.0, 1.0);
        self
    }

    /// Set the menu size (at least 1).
    pub fn with_menu_size(mut self, size: usize) -> Self {
        self.menu_size = size.max(1);
        self
    }

    /// Set the costar oversampling factor (at least 1).
    pub fn with_costar_pool(mut self, factor: usize) -> Self {
        self.costar_pool = factor.max(1);
        self
    }

    /// How many cast members to draw before ranking.
    pub fn costar_pool_size(&self) -> usize {
        self.menu_size.saturating_mul(self.costar_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert!((cfg.fuzzy_cutoff - 0.6).abs() < f64::EPSILON);
        assert_eq!(cfg.menu_size, 7);
        assert_eq!(cfg.costar_pool_size(), 21);
    }

    #[test]
    fn builder_methods_clamp() {
        let cfg = EngineConfig::default()
            .with_fuzzy_cutoff(1.7)
            .with_menu_size(0)
            .with_costar_pool(0);
        assert!((cfg.fuzzy_cutoff - 1.0).abs() < f64::EPSILON);
        assert_eq!(cfg.menu_size, 1);
        assert_eq!(cfg.costar_pool, 1);

        let cfg = EngineConfig::default().with_fuzzy_cutoff(-0.5).with_menu_size(6);
        assert_eq!(cfg.fuzzy_cutoff, 0.0);
        assert_eq!(cfg.menu_size, 6);
    }
}
