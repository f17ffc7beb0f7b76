//! Persisted settings
//!
//! The calculator and front-end configuration are stored together in one
//! postcard blob with a magic number and version header. Expressions and
//! results are never persisted.

use core::fmt;

use serde::{Deserialize, Serialize};

use keycalc_core::CalcConfig;

use crate::frontend::{Frontend, FrontendConfig};

/// Magic number to identify valid settings
pub const SETTINGS_MAGIC: u32 = 0x4B43_4653; // "KCFS"

/// Current settings format version
pub const SETTINGS_VERSION: u8 = 1;

/// Upper bound on the serialized size
pub const MAX_SETTINGS_SIZE: usize = 16;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small
    Serialize,
    /// Malformed or truncated blob
    Deserialize,
    /// Magic or version mismatch
    InvalidFormat,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Serialize => f.write_str("settings do not fit the buffer"),
            ConfigError::Deserialize => f.write_str("malformed settings"),
            ConfigError::InvalidFormat => f.write_str("unknown settings format"),
        }
    }
}

/// Everything the device keeps across power cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    pub calc: CalcConfig,
    pub frontend: FrontendConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(CalcConfig::default(), FrontendConfig::default())
    }
}

impl Settings {
    pub const fn new(calc: CalcConfig, frontend: FrontendConfig) -> Self {
        Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            calc,
            frontend,
        }
    }

    /// Check if the header matches this firmware
    pub fn is_valid(&self) -> bool {
        self.magic == SETTINGS_MAGIC && self.version == SETTINGS_VERSION
    }

    /// Serialize into `buffer`, returning the used part
    pub fn to_slice<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buffer).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate a stored blob
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let settings: Settings =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        if !settings.is_valid() {
            warn!("settings header {=u32:#x} v{}", settings.magic, settings.version);
            return Err(ConfigError::InvalidFormat);
        }
        Ok(settings)
    }

    /// Load a stored blob, falling back to defaults when it is unusable
    pub fn load_or_default(bytes: &[u8]) -> Self {
        match Self::from_bytes(bytes) {
            Ok(settings) => settings,
            Err(err) => {
                debug!("using default settings: {}", err);
                Self::default()
            }
        }
    }

    /// Build a front end configured from these settings
    pub fn frontend(&self) -> Frontend {
        Frontend::new(self.calc, self.frontend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycalc_core::CapacityPolicy;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert!(settings.is_valid());
        assert_eq!(settings.calc.capacity_policy, CapacityPolicy::Strict);
        assert_eq!(settings.frontend.scroll_step, 1);
    }

    #[test]
    fn test_stored_settings_load_back() {
        let settings = Settings::new(
            CalcConfig::permissive(),
            FrontendConfig {
                scroll_step: 4,
                auto_scroll: false,
            },
        );

        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let bytes = settings.to_slice(&mut buffer).unwrap();
        assert_eq!(Settings::from_bytes(bytes), Ok(settings));
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let mut settings = Settings::default();
        settings.magic = 0xDEAD_BEEF;

        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let bytes = settings.to_slice(&mut buffer).unwrap();
        assert_eq!(Settings::from_bytes(bytes), Err(ConfigError::InvalidFormat));
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut settings = Settings::default();
        settings.version = SETTINGS_VERSION + 1;

        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let bytes = settings.to_slice(&mut buffer).unwrap();
        assert_eq!(Settings::from_bytes(bytes), Err(ConfigError::InvalidFormat));
    }

    #[test]
    fn test_truncated_blob() {
        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let len = Settings::default().to_slice(&mut buffer).unwrap().len();
        assert_eq!(
            Settings::from_bytes(&buffer[..len - 1]),
            Err(ConfigError::Deserialize)
        );
        assert_eq!(Settings::load_or_default(&[]), Settings::default());
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buffer = [0u8; 2];
        assert_eq!(
            Settings::default().to_slice(&mut buffer),
            Err(ConfigError::Serialize)
        );
    }

    #[test]
    fn test_frontend_uses_settings() {
        let settings = Settings::new(CalcConfig::permissive(), FrontendConfig::default());
        let frontend = settings.frontend();
        assert_eq!(
            frontend.calculator().config().capacity_policy,
            CapacityPolicy::Truncate
        );
    }
}
