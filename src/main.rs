#[macro_use] extern crate log;
extern crate simplelog;
extern crate ufset;

use simplelog::*;
use std::io::{self, BufRead, BufReader, stdin, stdout};
use std::process;

fn main() {
	let stdin = stdin();
	let reader = BufReader::new(stdin.lock());
	let mut lines_iter = reader.lines();

	// first line: {"mode": "standard" | "compressed" | "rigid", "log_level": ...}
	let script_config = match ufset::read_config(&mut lines_iter) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("ufset: {}", e);
			process::exit(1);
		},
	};

	let _ = CombinedLogger::init(
		vec![
			WriteLogger::new(
				script_config.log_level,
				Config {time: None, level: None, target: None, location: None, time_format: None},
				io::stderr()),
		]
	);
	info!("running with {:?}", script_config.strategy);

	let stdout = stdout();
	let mut out = stdout.lock();
	if let Err(e) = ufset::run(&script_config, &mut lines_iter, 2, &mut out) {
		error!("{}", e);
		process::exit(1);
	}
}
