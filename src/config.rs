use std::str::FromStr;

use log::LevelFilter;
use serde_json::Value;

use crate::disjoint_set::Strategy;
use crate::error::ScriptError;

/// Settings read from the JSON header line of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptConfig {
	pub strategy: Strategy,
	pub log_level: LevelFilter,
}

impl Default for ScriptConfig {
	fn default() -> ScriptConfig {
		ScriptConfig {
			strategy: Strategy::Ranked,
			log_level: LevelFilter::Info,
		}
	}
}

impl ScriptConfig {
	pub fn from_json(value: &Value) -> Result<ScriptConfig, ScriptError> {
		if !value.is_object() {
			return Err(ScriptError::Config { field: "<root>", reason: format!("expected an object, got {}", value) });
		}
		let mut config = ScriptConfig::default();

		if let Some(mode) = field_str(value, "mode")? {
			config.strategy = match mode {
				"standard" => Strategy::Ranked,
				"compressed" => Strategy::Compressed,
				"rigid" => Strategy::Rigid,
				other => return Err(ScriptError::Config { field: "mode", reason: format!("unknown mode `{}`", other) }),
			};
		}
		if let Some(level) = field_str(value, "log_level")? {
			config.log_level = LevelFilter::from_str(level)
				.map_err(|_| ScriptError::Config { field: "log_level", reason: format!("unknown level `{}`", level) })?;
		}

		Ok(config)
	}

	pub fn parse_line(line: &str) -> Result<ScriptConfig, ScriptError> {
		let value: Value = serde_json::from_str(line)?;
		ScriptConfig::from_json(&value)
	}
}

fn field_str<'a>(value: &'a Value, field: &'static str) -> Result<Option<&'a str>, ScriptError> {
	match value.get(field) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.as_str())),
		Some(other) => Err(ScriptError::Config { field, reason: format!("expected a string, got {}", other) }),
	}
}
