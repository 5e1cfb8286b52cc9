use super::ConfigError;

/// What `remove` does to the probe chain behind the cleared slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Slide later members of the chain back into the hole,
    /// so every remaining key stays reachable
    #[default]
    BackShift,
    /// Only clear the slot. Keys displaced past it become unreachable
    /// until the next resize rebuilds the table
    Clear,
}

/// Sizing and resize thresholds of a [`HashTable`](super::HashTable)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    /// Grow once `items / capacity` reaches this
    pub max_load: f64,
    /// Shrink once `items / capacity` drops below this
    pub min_load: f64,
    pub delete_policy: DeletePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_load: Self::DEFAULT_MAX_LOAD,
            min_load: Self::DEFAULT_MIN_LOAD,
            delete_policy: DeletePolicy::default(),
        }
    }
}

impl TableConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
    pub const DEFAULT_MAX_LOAD: f64 = 0.75;
    pub const DEFAULT_MIN_LOAD: f64 = 0.25;

    pub fn with_initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = cap;
        self
    }

    pub fn with_max_load(mut self, max_load: f64) -> Self {
        self.max_load = max_load;
        self
    }

    pub fn with_min_load(mut self, min_load: f64) -> Self {
        self.min_load = min_load;
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// Checks the thresholds against each other.
    ///
    /// `max_load` must stay below one so every probe meets a vacant slot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_load.is_nan() || self.max_load <= 0.0 || self.max_load >= 1.0 {
            return Err(ConfigError::InvalidMaxLoad {
                max_load: self.max_load,
            });
        }
        if self.min_load.is_nan() || self.min_load < 0.0 {
            return Err(ConfigError::InvalidMinLoad {
                min_load: self.min_load,
            });
        }
        if self.min_load >= self.max_load {
            return Err(ConfigError::InvertedThresholds {
                min_load: self.min_load,
                max_load: self.max_load,
            });
        }
        Ok(())
    }
}
