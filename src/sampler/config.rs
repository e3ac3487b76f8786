//! Annealer configuration and cooling schedules.

/// Temperature reduction policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// The workhorse schedule; `alpha` between 0.95 and 0.99 is typical.
    Geometric {
        /// Cooling factor in (0, 1). Higher means slower cooling.
        alpha: f64,
    },

    /// Linear cooling: temperature decreases uniformly from the initial to
    /// the minimum over the sweep budget.
    Linear,

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`, one sweep
    /// per temperature step.
    ///
    /// Reference: Lundy & Mees (1986)
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_sweeps * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for the simulated-annealing sampler.
///
/// One *sweep* is a Metropolis flip attempt on every variable in index
/// order; each read runs the full cooling trajectory from a fresh random
/// state.
///
/// # Examples
///
/// ```
/// use qubo_anneal::sampler::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(50.0)
///     .with_min_temperature(0.01)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_sweeps_per_temperature(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Minimum temperature. A read stops when T drops below this.
    pub min_temperature: f64,

    /// Temperature reduction policy applied between temperature steps.
    pub cooling: CoolingSchedule,

    /// Number of sweeps at each temperature level.
    ///
    /// Ignored for `LundyMees` (one sweep per temperature).
    pub sweeps_per_temperature: usize,

    /// Maximum total sweeps per read (hard budget). 0 = no limit.
    pub max_sweeps: usize,

    /// Random seed for reproducibility. Read `r` derives its own stream
    /// from `seed + r`, so seeded runs are deterministic for any read count.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            sweeps_per_temperature: 10,
            max_sweeps: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_sweeps_per_temperature(mut self, n: usize) -> Self {
        self.sweeps_per_temperature = n;
        self
    }

    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration for consistency.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be > 0".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be > 0".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be below initial_temperature".into());
        }
        if self.sweeps_per_temperature == 0 {
            return Err("sweeps_per_temperature must be at least 1".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("geometric cooling factor must lie in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta <= 0.0 {
                    return Err(format!("lundy-mees beta must be > 0, got {beta}"));
                }
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}
