use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use note_table::{build_table, render_checked, RustSource};

mod config;
use config::Config;

mod writer;
use writer::write_artifact;


/// Generates the MIDI note table: one constant per key number and a table of note names and
/// A440 frequencies.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// TOML config file; every setting has a default
	config: Option<PathBuf>,

	/// Write the table here instead of the configured destination
	#[arg(short, long)]
	out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = load_config(Args::parse())?;

	generate(&config)
}

/// Reads the config named on the command line, if any, and applies `--out` over it.
fn load_config(args: Args) -> anyhow::Result<Config> {
	let mut config = match &args.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};

	if let Some(out) = args.out {
		config.set_destination(out);
	}

	Ok(config)
}

fn generate(config: &Config) -> anyhow::Result<()> {
	let notes = build_table();
	let renderer = RustSource::new(config.render_settings());

	let source = render_checked(&renderer, &notes)
		.context("Generated note table is invalid")?;

	write_artifact(config.destination(), &source)
		.with_context(|| format!("Unable to write \"{}\"", config.destination().display()))?;

	log::info!("Wrote {} notes to {:?}", notes.len(), config.destination());

	Ok(())
}
