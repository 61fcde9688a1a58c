use std::io;

use thiserror::Error;

use crate::disjoint_set::Strategy;

#[derive(Debug, Error)]
pub enum ScriptError {
	#[error("failed to read input: {0}")]
	Io(#[from] io::Error),
	#[error("malformed json: {0}")]
	Json(#[from] serde_json::Error),
	#[error("input is empty, expected a config line")]
	MissingConfig,
	#[error("config field `{field}`: {reason}")]
	Config { field: &'static str, reason: String },
	#[error("line {line}: unknown command `{command}`")]
	UnknownCommand { line: usize, command: String },
	#[error("line {line}: `{command}` takes {expected} key(s), got {got}")]
	Arity { line: usize, command: &'static str, expected: usize, got: usize },
	#[error("line {line}: `tree` needs a rigid container, this one is {strategy:?}")]
	TreeUnavailable { line: usize, strategy: Strategy },
}
