use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Writes `contents` to `destination` all at once.
///
/// The contents go to a temporary file next to the destination, which is renamed over it only
/// after everything was written. On failure the temporary file is removed and the destination
/// keeps whatever it held before.
pub fn write_artifact(destination: &Path, contents: &str) -> note_table::Result<()> {
	let dir = match destination.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut file = NamedTempFile::new_in(dir)?;
	file.write_all(contents.as_bytes())?;
	file.as_file().sync_all()?;

	log::debug!("persisting {:?} to {:?}", file.path(), destination);

	file.persist(destination).map_err(|e| e.error)?;

	Ok(())
}
