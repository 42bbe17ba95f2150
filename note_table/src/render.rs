use std::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::note::NoteRecord;
use crate::sanitize::{is_identifier, verify_identifiers};

const PRIMITIVE_TYPES: [&str; 17] = [
	"bool", "char", "str", "f32", "f64",
	"i8", "i16", "i32", "i64", "i128", "isize",
	"u8", "u16", "u32", "u64", "u128", "usize",
];

/// Turns the finished table into source text.
pub trait Renderer {
	fn render(&self, notes: &[NoteRecord], out: &mut dyn Write) -> fmt::Result;

	/// Checks that rendering `notes` would produce valid output.
	fn verify(&self, notes: &[NoteRecord]) -> Result<()> {
		verify_identifiers(notes)
	}

	fn render_to_string(&self, notes: &[NoteRecord]) -> Result<String> {
		let mut out = String::new();
		self.render(notes, &mut out)?;
		Ok(out)
	}
}

/// Names used in the generated source.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
	pub type_name: String,
	pub info_name: String,
	pub table_name: String,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			type_name: "PitchValue".to_owned(),
			info_name: "PitchInfo".to_owned(),
			table_name: "PITCH_VALUES".to_owned(),
		}
	}
}

impl RenderSettings {
	fn names(&self) -> [(&'static str, &str); 3] {
		[
			("type_name", self.type_name.as_str()),
			("info_name", self.info_name.as_str()),
			("table_name", self.table_name.as_str()),
		]
	}

	/// Checks that every name is a usable identifier that doesn't collide with a primitive type,
	/// another configured name or a note constant.
	pub fn verify(&self, notes: &[NoteRecord]) -> Result<()> {
		let names = self.names();

		for (i, &(field, name)) in names.iter().enumerate() {
			let reason = if !is_identifier(name) {
				Some("is not a valid identifier")
			} else if PRIMITIVE_TYPES.contains(&name) {
				Some("shadows a primitive type")
			} else if names[..i].iter().any(|&(_, other)| other == name) {
				Some("is used for more than one item")
			} else if notes.iter().any(|n| n.identifier() == name) {
				Some("is already a note constant")
			} else {
				None
			};

			if let Some(reason) = reason {
				return Err(Error::InvalidName { field, name: name.to_owned(), reason });
			}
		}

		Ok(())
	}
}

/// Renders a Rust module body: one constant per key, then a table pairing each constant with its
/// name and frequency.
#[derive(Clone, Debug, Default)]
pub struct RustSource {
	settings: RenderSettings,
}

impl RustSource {
	pub fn new(settings: RenderSettings) -> Self {
		Self { settings }
	}

	fn render_header(&self, out: &mut dyn Write) -> fmt::Result {
		let RenderSettings { type_name, info_name, .. } = &self.settings;

		writeln!(out, "// Code generated by note_gen; DO NOT EDIT.")?;
		writeln!(out, "#![allow(non_upper_case_globals)]")?;
		writeln!(out)?;
		writeln!(out, "pub type {} = u8;", type_name)?;
		writeln!(out)?;
		writeln!(out, "#[derive(Clone, Copy, Debug, PartialEq)]")?;
		writeln!(out, "pub struct {} {{", info_name)?;
		writeln!(out, "\tpub name: &'static str,")?;
		writeln!(out, "\tpub frequency: f64,")?;
		writeln!(out, "}}")
	}

	fn render_consts(&self, notes: &[NoteRecord], out: &mut dyn Write) -> fmt::Result {
		for note in notes {
			writeln!(out, "pub const {:<9} {} = {};",
				format!("{}:", note.identifier()),
				self.settings.type_name,
				note.key_number(),
			)?;
		}
		Ok(())
	}

	fn render_table(&self, notes: &[NoteRecord], out: &mut dyn Write) -> fmt::Result {
		let RenderSettings { type_name, info_name, table_name } = &self.settings;

		writeln!(out, "pub const {}: [({}, {}); {}] = [", table_name, type_name, info_name, notes.len())?;
		for note in notes {
			// {:?} prints the shortest f64 literal that parses back to the same value
			writeln!(out, "\t({:<9} {} {{ name: {:?}, frequency: {:?} }}),",
				format!("{},", note.identifier()),
				info_name,
				note.display_name(),
				note.frequency_hz(),
			)?;
		}
		writeln!(out, "];")
	}
}

impl Renderer for RustSource {
	fn render(&self, notes: &[NoteRecord], out: &mut dyn Write) -> fmt::Result {
		self.render_header(out)?;
		writeln!(out)?;
		self.render_consts(notes, out)?;
		writeln!(out)?;
		self.render_table(notes, out)
	}

	fn verify(&self, notes: &[NoteRecord]) -> Result<()> {
		verify_identifiers(notes)?;
		self.settings.verify(notes)
	}
}

/// Verifies that `renderer` can render `notes`, then renders them.
pub fn render_checked(renderer: &dyn Renderer, notes: &[NoteRecord]) -> Result<String> {
	renderer.verify(notes)?;
	renderer.render_to_string(notes)
}
