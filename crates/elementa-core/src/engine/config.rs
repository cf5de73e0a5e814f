use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings for the mixing workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixConfig {
    /// Concentration applied when a request gives none; `None` keeps the catalog value.
    pub default_concentration: Option<f64>,
    /// Reject zero, negative or non-finite concentrations instead of passing them through.
    pub reject_non_positive: bool,
}

#[derive(Default)]
pub struct MixConfigBuilder {
    default_concentration: Option<f64>,
    reject_non_positive: Option<bool>,
}

impl MixConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_concentration(mut self, concentration: f64) -> Self {
        self.default_concentration = Some(concentration);
        self
    }
    pub fn reject_non_positive(mut self, reject: bool) -> Self {
        self.reject_non_positive = Some(reject);
        self
    }

    pub fn build(self) -> Result<MixConfig, ConfigError> {
        if let Some(c) = self.default_concentration {
            if !(c.is_finite() && c > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "default_concentration",
                    reason: format!("must be a positive finite number, got {}", c),
                });
            }
        }
        Ok(MixConfig {
            default_concentration: self.default_concentration,
            reject_non_positive: self.reject_non_positive.unwrap_or(false),
        })
    }
}
