use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, PickerConfig};
use crate::error::Result;
use std::path::Path;

/// A config request as typed on the command line. Keys and values are parsed
/// by [`run`], so a bad entry becomes an error message rather than a failure.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PickerConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(raw_key) => match raw_key.parse::<ConfigKey>() {
            Ok(key) => result.add_message(CmdMessage::info(config.value(key).to_string())),
            Err(e) => result.add_message(CmdMessage::error(e.to_string())),
        },
        ConfigAction::Set(raw_key, raw_value) => {
            let parsed = raw_key
                .parse::<ConfigKey>()
                .and_then(|key| key.parse_value(&raw_value));
            let value = match parsed {
                Ok(value) => value,
                Err(e) => {
                    result.add_message(CmdMessage::error(e.to_string()));
                    return Ok(result.with_config(config));
                }
            };

            let key = value.key();
            if config.value(key) == value {
                result.add_message(CmdMessage::info(format!("{} is already {}", key, value)));
            } else {
                let previous = config.apply(value.clone());
                config.save(config_dir)?;
                tracing::debug!(%key, %previous, %value, "config updated");
                result.add_message(CmdMessage::success(format!(
                    "{} changed from {} to {}",
                    key, previous, value
                )));
            }
        }
    }

    Ok(result.with_config(config))
}
