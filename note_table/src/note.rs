use midly::num::u7;
use once_cell::sync::Lazy;

use crate::sanitize::sanitize;

/// Number of MIDI key numbers, 0 through 127.
pub const KEY_COUNT: usize = 128;

pub const NOTES_PER_OCTAVE: u8 = 12;

/// MIDI key 69 is A4, tuned to 440 Hz.
pub const A4_KEY: u8 = 69;
pub const A4_FREQ: f64 = 440.0;

pub const PITCH_CLASS_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
	"C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

static NOTE_TABLE: Lazy<Vec<NoteRecord>> = Lazy::new(build_table);

/// One row of the generated table.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteRecord {
	key: u7,
	display_name: String,
	identifier: String,
	frequency_hz: f64,
}

impl NoteRecord {
	/// Builds the record for `key`. A `u7` can only hold MIDI key numbers.
	pub fn new(key: u7) -> Self {
		let key_number = key.as_int();
		let display_name = format!("{}{}", pitch_class(key_number), octave(key_number));

		Self {
			key,
			identifier: sanitize(&display_name),
			display_name,
			frequency_hz: frequency(key_number),
		}
	}

	pub fn key(&self) -> u7 {
		self.key
	}

	pub fn key_number(&self) -> u8 {
		self.key.as_int()
	}

	/// Formatted like "C#4" or "C-1"
	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	/// The display name made usable as a constant name, like "Csharp4" or "C_1"
	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	pub fn frequency_hz(&self) -> f64 {
		self.frequency_hz
	}

	pub fn octave(&self) -> i8 {
		octave(self.key_number())
	}

	pub fn pitch_class(&self) -> &'static str {
		pitch_class(self.key_number())
	}
}

/// Octave in MIDI numbering, where key 0 is C-1 and key 60 is C4.
pub fn octave(key_number: u8) -> i8 {
	(key_number / NOTES_PER_OCTAVE) as i8 - 1
}

pub fn pitch_class(key_number: u8) -> &'static str {
	PITCH_CLASS_NAMES[(key_number % NOTES_PER_OCTAVE) as usize]
}

/// Equal-tempered frequency of a key number.
///
/// If n is the number of semitones between the note and A4, the frequency is 440 * 2^(n/12).
/// No rounding is applied.
pub fn frequency(key_number: u8) -> f64 {
	let distance = key_number as f64 - A4_KEY as f64;
	A4_FREQ * 2_f64.powf(distance / NOTES_PER_OCTAVE as f64)
}

/// Computes all 128 records, ordered by key number.
pub fn build_table() -> Vec<NoteRecord> {
	let notes: Vec<NoteRecord> = (0..KEY_COUNT as u8)
		.map(|key| NoteRecord::new(u7::new(key)))
		.collect();

	log::debug!(
		"built {} notes, {} ({} Hz) to {} ({} Hz)",
		notes.len(),
		notes[0].display_name(), notes[0].frequency_hz(),
		notes[KEY_COUNT - 1].display_name(), notes[KEY_COUNT - 1].frequency_hz(),
	);

	notes
}

/// The table from [`build_table`], computed on first use.
pub fn note_table() -> &'static [NoteRecord] {
	&NOTE_TABLE
}
