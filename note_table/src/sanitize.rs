use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::note::NoteRecord;

/// Substitutions applied in order, each to the first match only.
///
/// Only octave -1 is negative within the MIDI range, so "-1" is the only sign that needs
/// replacing.
pub const SANITIZE_RULES: [(&str, &str); 2] = [
	("#", "sharp"),
	("-1", "_1"),
];

/// Replaces characters that are forbidden in constant names, e.g. A#4 => Asharp4; C-1 => C_1
pub fn sanitize(display_name: &str) -> String {
	SANITIZE_RULES.iter()
		.fold(display_name.to_owned(), |name, (from, to)| name.replacen(from, to, 1))
}

/// Strict and reserved keywords of the 2018 edition.
const KEYWORDS: [&str; 51] = [
	"as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
	"if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
	"self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
	"where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
	"macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Whether `s` may be used as a Rust identifier.
pub fn is_identifier(s: &str) -> bool {
	if KEYWORDS.contains(&s) {
		return false;
	}

	let mut chars = s.chars();

	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
		_ => return false,
	}

	s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Checks that every identifier is usable and that no two keys share one.
pub fn verify_identifiers(notes: &[NoteRecord]) -> Result<()> {
	let mut seen: HashMap<&str, u8> = HashMap::with_capacity(notes.len());

	for note in notes {
		if !is_identifier(note.identifier()) {
			return Err(Error::InvalidIdentifier {
				identifier: note.identifier().to_owned(),
				key: note.key_number(),
			});
		}

		if let Some(&first) = seen.get(note.identifier()) {
			return Err(Error::Collision {
				identifier: note.identifier().to_owned(),
				first,
				second: note.key_number(),
			});
		}

		seen.insert(note.identifier(), note.key_number());
	}

	log::debug!("{} identifiers verified", seen.len());

	Ok(())
}
