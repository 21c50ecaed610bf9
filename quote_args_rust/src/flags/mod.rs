use std::collections::HashSet;
use std::sync::RwLock;

use strum_macros::{Display, EnumIter, EnumString};

/// Named feature flags read by the derivation layer. The flag framework
/// itself lives elsewhere; this is only the reader seam.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureFlag {
    UniswapXSyntheticQuote,
}

impl FeatureFlag {
    /// Environment variable carrying the flag value
    pub fn env_var(&self) -> String {
        format!("FLAG_{self}")
    }
}

pub trait FeatureFlagReader: Send + Sync {
    fn is_enabled(&self, flag: FeatureFlag) -> bool;
}

/// Reads flags from `FLAG_*` environment variables. Anything other than
/// `1` or `true` (any casing) counts as disabled.
#[derive(Debug, Default)]
pub struct EnvFlagReader;

impl FeatureFlagReader for EnvFlagReader {
    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        match std::env::var(flag.env_var()) {
            Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
            Err(_) => false,
        }
    }
}

/// Fixed flag set, settable at runtime. Meant for tests and wiring where
/// flags come from config instead of the environment.
#[derive(Debug, Default)]
pub struct StaticFlagReader {
    enabled: RwLock<HashSet<FeatureFlag>>,
}

impl StaticFlagReader {
    pub fn with_enabled(flags: impl IntoIterator<Item = FeatureFlag>) -> Self {
        Self {
            enabled: RwLock::new(flags.into_iter().collect()),
        }
    }

    pub fn enable(&self, flag: FeatureFlag) {
        self.enabled.write().expect("Flag lock poisoned").insert(flag);
    }

    pub fn disable(&self, flag: FeatureFlag) {
        self.enabled.write().expect("Flag lock poisoned").remove(&flag);
    }
}

impl FeatureFlagReader for StaticFlagReader {
    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.enabled.read().expect("Flag lock poisoned").contains(&flag)
    }
}
