use std::fs;
use std::path::{ Path, PathBuf };

use anyhow::Context;
use serde::Deserialize;

use note_table::RenderSettings;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	destination: PathBuf,
	type_name: String,
	info_name: String,
	table_name: String,
}

impl Default for Config {
	fn default() -> Self {
		let settings = RenderSettings::default();

		Self {
			destination: PathBuf::from("frequencies.rs"),
			type_name: settings.type_name,
			info_name: settings.info_name,
			table_name: settings.table_name,
		}
	}
}

impl Config {
	pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(s)
	}

	pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
		let path = path.as_ref();

		let contents = fs::read_to_string(path)
			.with_context(|| format!("Unable to read config file \"{}\"", path.display()))?;

		Self::from_toml(&contents)
			.with_context(|| format!("Unable to parse config file \"{}\"", path.display()))
	}

	pub fn destination(&self) -> &Path {
		&self.destination
	}

	pub fn set_destination(&mut self, destination: PathBuf) {
		self.destination = destination;
	}

	pub fn render_settings(&self) -> RenderSettings {
		RenderSettings {
			type_name: self.type_name.clone(),
			info_name: self.info_name.clone(),
			table_name: self.table_name.clone(),
		}
	}
}
