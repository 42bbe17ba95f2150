//! MIDI note names and A440 equal-tempered frequencies for every key number, computed ahead of
//! time and rendered as generated source.

pub mod error;
pub mod note;
pub mod render;
pub mod sanitize;


pub use error::{Error, Result};
pub use note::{build_table, frequency, note_table, NoteRecord, KEY_COUNT, PITCH_CLASS_NAMES};
pub use render::{render_checked, RenderSettings, Renderer, RustSource};
pub use sanitize::{is_identifier, sanitize, verify_identifiers};
