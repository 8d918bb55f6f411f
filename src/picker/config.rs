//! # Configuration
//!
//! Stored as JSON in `config.json` inside the config directory. Every field has a
//! default, so a missing file or a partial file both load cleanly.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default-meals` | `3` | Meal count used when the typed count is not a number |
//! | `output` | `meal_plan.json` | Where the plan is written |
//! | `service` | `GroceryNow` | Name on the mock delivery confirmation |
//! | `oversize` | `reject` | `reject` or `clamp` when more meals are asked than recipes exist |
//! | `on-failure` | `continue` | `continue` or `abort` when a stage fails |
//!
//! The cuisine table (`cuisines`) can only be edited in the file itself.

use crate::catalog::builtin_table;
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_NUM_MEALS: u64 = 3;
pub const DEFAULT_OUTPUT_PATH: &str = "meal_plan.json";
pub const DEFAULT_DELIVERY_SERVICE: &str = "GroceryNow";

/// What to do when more meals are requested than the cuisine has recipes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    #[default]
    Reject,
    Clamp,
}

/// What the pipeline does after a stage fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report the failure, substitute the stage's empty value and keep going.
    #[default]
    Continue,
    /// Stop at the first failure without writing a plan.
    Abort,
}

impl FromStr for OversizePolicy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(OversizePolicy::Reject),
            "clamp" => Ok(OversizePolicy::Clamp),
            other => Err(PlannerError::Config(format!(
                "Unknown oversize policy '{}' (expected reject or clamp)",
                other
            ))),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(FailurePolicy::Continue),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(PlannerError::Config(format!(
                "Unknown failure policy '{}' (expected continue or abort)",
                other
            ))),
        }
    }
}

impl fmt::Display for OversizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OversizePolicy::Reject => write!(f, "reject"),
            OversizePolicy::Clamp => write!(f, "clamp"),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Continue => write!(f, "continue"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerConfig {
    /// Meal count substituted for unparseable input
    #[serde(default = "default_num_meals")]
    pub default_num_meals: u64,

    /// Plan file location, relative paths resolve against the working directory
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_delivery_service")]
    pub delivery_service: String,

    #[serde(default)]
    pub oversize_policy: OversizePolicy,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Cuisine name to recipe names
    #[serde(default = "builtin_table")]
    pub cuisines: BTreeMap<String, Vec<String>>,
}

fn default_num_meals() -> u64 {
    DEFAULT_NUM_MEALS
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_delivery_service() -> String {
    DEFAULT_DELIVERY_SERVICE.to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_num_meals: DEFAULT_NUM_MEALS,
            output_path: default_output_path(),
            delivery_service: default_delivery_service(),
            oversize_policy: OversizePolicy::default(),
            failure_policy: FailurePolicy::default(),
            cuisines: builtin_table(),
        }
    }
}

impl PickerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PickerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value stored under `key`.
    pub fn value(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::DefaultMeals => ConfigValue::DefaultMeals(self.default_num_meals),
            ConfigKey::Output => ConfigValue::Output(self.output_path.clone()),
            ConfigKey::Service => ConfigValue::Service(self.delivery_service.clone()),
            ConfigKey::Oversize => ConfigValue::Oversize(self.oversize_policy),
            ConfigKey::OnFailure => ConfigValue::OnFailure(self.failure_policy),
        }
    }

    /// Store `value`, returning the value it replaced.
    pub fn apply(&mut self, value: ConfigValue) -> ConfigValue {
        let previous = self.value(value.key());
        match value {
            ConfigValue::DefaultMeals(n) => self.default_num_meals = n,
            ConfigValue::Output(path) => self.output_path = path,
            ConfigValue::Service(name) => self.delivery_service = name,
            ConfigValue::Oversize(policy) => self.oversize_policy = policy,
            ConfigValue::OnFailure(policy) => self.failure_policy = policy,
        }
        previous
    }
}

/// The user-editable settings, by their command-line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DefaultMeals,
    Output,
    Service,
    Oversize,
    OnFailure,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::DefaultMeals,
        ConfigKey::Output,
        ConfigKey::Service,
        ConfigKey::Oversize,
        ConfigKey::OnFailure,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::DefaultMeals => "default-meals",
            ConfigKey::Output => "output",
            ConfigKey::Service => "service",
            ConfigKey::Oversize => "oversize",
            ConfigKey::OnFailure => "on-failure",
        }
    }

    /// Parse a raw command-line value into the type this key stores.
    pub fn parse_value(self, raw: &str) -> Result<ConfigValue> {
        let trimmed = raw.trim();
        match self {
            ConfigKey::DefaultMeals => trimmed.parse().map(ConfigValue::DefaultMeals).map_err(|_| {
                PlannerError::Config(format!(
                    "default-meals must be a whole number, got '{}'",
                    raw
                ))
            }),
            ConfigKey::Output if trimmed.is_empty() => {
                Err(PlannerError::Config("output cannot be empty".to_string()))
            }
            ConfigKey::Output => Ok(ConfigValue::Output(PathBuf::from(trimmed))),
            ConfigKey::Service if trimmed.is_empty() => {
                Err(PlannerError::Config("service cannot be empty".to_string()))
            }
            ConfigKey::Service => Ok(ConfigValue::Service(trimmed.to_string())),
            ConfigKey::Oversize => trimmed.parse().map(ConfigValue::Oversize),
            ConfigKey::OnFailure => trimmed.parse().map(ConfigValue::OnFailure),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| PlannerError::Config(format!("Unknown config key: {}", s.trim())))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A setting together with its parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    DefaultMeals(u64),
    Output(PathBuf),
    Service(String),
    Oversize(OversizePolicy),
    OnFailure(FailurePolicy),
}

impl ConfigValue {
    pub fn key(&self) -> ConfigKey {
        match self {
            ConfigValue::DefaultMeals(_) => ConfigKey::DefaultMeals,
            ConfigValue::Output(_) => ConfigKey::Output,
            ConfigValue::Service(_) => ConfigKey::Service,
            ConfigValue::Oversize(_) => ConfigKey::Oversize,
            ConfigValue::OnFailure(_) => ConfigKey::OnFailure,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::DefaultMeals(n) => write!(f, "{}", n),
            ConfigValue::Output(path) => write!(f, "{}", path.display()),
            ConfigValue::Service(name) => f.write_str(name),
            ConfigValue::Oversize(policy) => write!(f, "{}", policy),
            ConfigValue::OnFailure(policy) => write!(f, "{}", policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.default_num_meals, 3);
        assert_eq!(config.output_path, PathBuf::from("meal_plan.json"));
        assert_eq!(config.delivery_service, "GroceryNow");
        assert_eq!(config.oversize_policy, OversizePolicy::Reject);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.cuisines.len(), 3);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PickerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"default_num_meals": 5, "oversize_policy": "clamp"}"#,
        )
        .unwrap();

        let config = PickerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_num_meals, 5);
        assert_eq!(config.oversize_policy, OversizePolicy::Clamp);
        assert_eq!(config.delivery_service, "GroceryNow");
        assert!(config.cuisines.contains_key("Italian"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = PickerConfig::default();
        config.apply(ConfigValue::Service("FreshCart".into()));
        config.apply(ConfigValue::OnFailure(FailurePolicy::Abort));
        config.save(&nested).unwrap();

        let loaded = PickerConfig::load(&nested).unwrap();
        assert_eq!(loaded.delivery_service, "FreshCart");
        assert_eq!(loaded.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn test_parse_value_is_typed_per_key() {
        assert_eq!(
            ConfigKey::DefaultMeals.parse_value(" 5000000000 ").unwrap(),
            ConfigValue::DefaultMeals(5_000_000_000)
        );
        assert_eq!(
            ConfigKey::Oversize.parse_value("CLAMP").unwrap(),
            ConfigValue::Oversize(OversizePolicy::Clamp)
        );
        assert_eq!(
            ConfigKey::Output.parse_value("plans/week.json").unwrap(),
            ConfigValue::Output(PathBuf::from("plans/week.json"))
        );
    }

    #[test]
    fn test_parse_value_rejects_bad_values() {
        assert!(ConfigKey::DefaultMeals.parse_value("many").is_err());
        assert!(ConfigKey::DefaultMeals.parse_value("-1").is_err());
        assert!(ConfigKey::Oversize.parse_value("stretch").is_err());
        assert!(ConfigKey::OnFailure.parse_value("retry").is_err());
        assert!(ConfigKey::Output.parse_value("  ").is_err());
        assert!(ConfigKey::Service.parse_value("").is_err());
    }

    #[test]
    fn test_apply_returns_previous_value() {
        let mut config = PickerConfig::default();
        let previous = config.apply(ConfigValue::Oversize(OversizePolicy::Clamp));
        assert_eq!(previous, ConfigValue::Oversize(OversizePolicy::Reject));
        assert_eq!(config.oversize_policy, OversizePolicy::Clamp);
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in ConfigKey::ALL {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), key);
        }
        assert_eq!("On-Failure".parse::<ConfigKey>().unwrap(), ConfigKey::OnFailure);
        assert!("colour".parse::<ConfigKey>().is_err());
    }
}
