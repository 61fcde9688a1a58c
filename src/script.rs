use std::io::{self, Write};

use crate::config::ScriptConfig;
use crate::error::ScriptError;
use crate::sets::DisjointSets;
use crate::tree::{get_tree, sort_forest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Add(String),
	Union(String, String),
	Find(String),
	Same(String, String),
	Print,
	Tree,
}

impl Command {
	/// Parses one script line. Blank lines and `#` comments give `None`.
	pub fn parse(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			return Ok(None);
		}
		let mut words = line.split_whitespace();
		let name = match words.next() {
			Some(name) => name,
			None => return Ok(None),
		};
		let args: Vec<String> = words.map(String::from).collect();

		let (command, expected): (&'static str, usize) = match name {
			"add" => ("add", 1),
			"union" => ("union", 2),
			"find" => ("find", 1),
			"same" => ("same", 2),
			"print" => ("print", 0),
			"tree" => ("tree", 0),
			other => return Err(ScriptError::UnknownCommand { line: line_no, command: other.to_string() }),
		};
		if args.len() != expected {
			return Err(ScriptError::Arity { line: line_no, command, expected, got: args.len() });
		}

		let mut args = args.into_iter();
		let mut next = || args.next().unwrap_or_default();
		Ok(Some(match command {
			"add" => Command::Add(next()),
			"union" => {
				let a = next();
				Command::Union(a, next())
			},
			"find" => Command::Find(next()),
			"same" => {
				let a = next();
				Command::Same(a, next())
			},
			"print" => Command::Print,
			_ => Command::Tree,
		}))
	}
}

/// A container plus the commands run against it so far.
pub struct Session {
	sets: DisjointSets<String>,
}

impl Session {
	pub fn new(config: &ScriptConfig) -> Session {
		Session { sets: DisjointSets::with_strategy(config.strategy) }
	}

	pub fn sets(&self) -> &DisjointSets<String> {
		&self.sets
	}

	/// Runs one command, returning the lines it prints.
	pub fn execute(&mut self, line_no: usize, command: Command) -> Result<Vec<String>, ScriptError> {
		debug!("line {}: {:?}", line_no, command);
		let output = match command {
			Command::Add(key) => {
				self.sets.add(key);
				vec![]
			},
			Command::Union(a, b) => {
				self.sets.union(a, b);
				vec![]
			},
			Command::Find(key) => vec![self.sets.find(key)],
			Command::Same(a, b) => vec![self.sets.in_same_set(a, b).to_string()],
			Command::Print => {
				let keys: Vec<String> = self.sets.keys().to_vec();
				keys.into_iter()
					.map(|key| {
						let root = self.sets.find(key.clone());
						format!("{} -> {}", key, root)
					})
					.collect()
			},
			Command::Tree => {
				if self.sets.is_compressed() {
					return Err(ScriptError::TreeUnavailable { line: line_no, strategy: self.sets.strategy() });
				}
				let mut forest = get_tree(&self.sets);
				sort_forest(&mut forest);
				vec![serde_json::to_string(&forest)?]
			},
		};
		Ok(output)
	}
}

/// Reads the JSON header line.
pub fn read_config<I: Iterator<Item = io::Result<String>>>(lines_iter: &mut I) -> Result<ScriptConfig, ScriptError> {
	match lines_iter.next() {
		Some(line) => ScriptConfig::parse_line(&line?),
		None => Err(ScriptError::MissingConfig),
	}
}

/// Runs every remaining line, writing command output to `out`. Stops at the
/// first bad line. `first_line` is the number of the line `lines_iter`
/// starts at.
pub fn run<I, W>(config: &ScriptConfig, lines_iter: &mut I, first_line: usize, out: &mut W) -> Result<Session, ScriptError>
	where I: Iterator<Item = io::Result<String>>, W: Write
{
	let mut session = Session::new(config);
	for (offset, line) in lines_iter.enumerate() {
		let line_no = first_line + offset;
		let command = match Command::parse(line_no, &line?)? {
			Some(command) => command,
			None => continue,
		};
		for printed in session.execute(line_no, command)? {
			writeln!(out, "{}", printed)?;
		}
	}
	info!("script done, {} keys enrolled", session.sets.len());
	Ok(session)
}
