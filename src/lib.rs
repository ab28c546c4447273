#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod json;
mod normalize;
mod section;
mod validate;
mod writer;

use std::io;
use std::path::Path;

pub use error::WriteError;
pub use normalize::normalize;
pub use section::{Input, Properties, Property, PropertyMap, Section};
pub use validate::validate;
pub use writer::{DEFAULT_STARTING_SECTION, Hooks, NoHooks, Writer, WriterOptions};

/// Write `input` as INI text using the default options.
///
/// # Errors
///
/// Returns a validation error if a name or value is illegal or a property is assigned twice.
pub fn write_string(input: impl Into<Input>) -> Result<String, WriteError> {
    Writer::new().write_string(input)
}

/// Write `input` to `path` using the default options, replacing any existing file.
///
/// # Errors
///
/// Returns a validation error, or an I/O error if the file cannot be created or written.
pub fn write_file(input: impl Into<Input>, path: impl AsRef<Path>) -> Result<(), WriteError> {
    Writer::new().write_file(input, path)
}

/// Write `input` to `sink` using the default options.
///
/// # Errors
///
/// Returns a validation error, or [`WriteError::SinkWrite`] if `sink` rejects a write.
pub fn write_handle<W>(input: impl Into<Input>, sink: &mut W) -> Result<(), WriteError>
where
    W: io::Write + ?Sized,
{
    Writer::new().write_handle(input, sink)
}
