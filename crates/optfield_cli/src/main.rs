#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "optfield", about = "Inspect how JSON record fields decode as optional values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Report absent/present state for each field of a JSON object.
	Inspect(cmd::inspect::Args),
	/// Re-encode a JSON object, dropping or nulling absent fields.
	Normalize(cmd::normalize::Args),
	/// Check that every field survives an encode/decode cycle.
	Roundtrip(cmd::roundtrip::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Normalize(args) => cmd::normalize::run(args),
		Commands::Roundtrip(args) => cmd::roundtrip::run(args),
	}
}

/// Stderr subscriber honouring `RUST_LOG`; stdout stays reserved for command output.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
