use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// Two keys sanitized to the same constant name.
	#[error("identifier \"{identifier}\" is shared by keys {first} and {second}")]
	Collision {
		identifier: String,
		first: u8,
		second: u8,
	},

	#[error("\"{identifier}\" (key {key}) is not a valid identifier")]
	InvalidIdentifier {
		identifier: String,
		key: u8,
	},

	/// A configured name can't be used in the generated source.
	#[error("{field} \"{name}\" {reason}")]
	InvalidName {
		field: &'static str,
		name: String,
		reason: &'static str,
	},

	#[error("unable to format generated source")]
	Fmt(#[from] std::fmt::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
