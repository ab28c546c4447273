use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use crate::error::WriteError;
use crate::normalize::normalize;
use crate::section::{Input, Property, Section};
use crate::validate::validate;

/// Name of the section whose properties are written without a header by default.
pub const DEFAULT_STARTING_SECTION: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Section written without a `[header]` when it is the first one out. `None` gives every
    /// section a header.
    pub starting_section: Option<String>,
    /// Write the header of the starting section even when it comes first.
    pub explicit_starting_header: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            starting_section: Some(DEFAULT_STARTING_SECTION.to_owned()),
            explicit_starting_header: false,
        }
    }
}

impl WriterOptions {
    #[must_use]
    pub fn with_starting_section(mut self, name: Option<impl Into<String>>) -> Self {
        self.starting_section = name.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_explicit_starting_header(mut self, explicit: bool) -> Self {
        self.explicit_starting_header = explicit;
        self
    }
}

/// Points where a [`Writer`] hands control to the caller while emitting.
pub trait Hooks {
    /// Called once the writer has moved on to `name`, before any of its text is built.
    fn change_section(&mut self, name: &str, options: &mut WriterOptions) {
        _ = (name, options);
    }

    /// Textual form of a defined value.
    fn stringify_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(value)
    }

    /// Called after the text of `name` has reached the sink.
    fn finish_section(&mut self, name: &str) {
        _ = name;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoHooks;

impl Hooks for NoHooks {}

/// Emits documents as INI text.
///
/// The set of finished sections outlives a single write: writing a second document through the
/// same `Writer` gives its starting section a header. Use [`Writer::reset`] or a fresh writer to
/// start over.
#[derive(Debug)]
pub struct Writer<H = NoHooks> {
    options: WriterOptions,
    hooks: H,
    current_section: Option<String>,
    done_sections: HashSet<String>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    #[must_use]
    pub fn with_options(options: WriterOptions) -> Self {
        Self::with_hooks(options, NoHooks)
    }
}

impl<H: Hooks> Writer<H> {
    #[must_use]
    pub fn with_hooks(options: WriterOptions, hooks: H) -> Self {
        Self {
            options,
            hooks,
            current_section: None,
            done_sections: HashSet::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut WriterOptions {
        &mut self.options
    }

    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    #[must_use]
    pub fn into_hooks(self) -> H {
        self.hooks
    }

    /// The section being written, or the last one written.
    #[must_use]
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Whether at least one section called `name` has been written in full.
    #[must_use]
    pub fn is_done(&self, name: &str) -> bool {
        self.done_sections.contains(name)
    }

    pub fn done_sections(&self) -> impl Iterator<Item = &str> {
        self.done_sections.iter().map(String::as_str)
    }

    /// Forget every section written so far.
    pub fn reset(&mut self) {
        self.current_section = None;
        self.done_sections.clear();
    }

    /// Normalize and validate `input` without writing anything.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any name or value is illegal, or a property is assigned
    /// twice.
    pub fn prepare(&self, input: impl Into<Input>) -> Result<Vec<Section>, WriteError> {
        let sections = normalize(input.into(), self.options.starting_section.as_deref());
        validate(&sections)?;
        Ok(sections)
    }

    /// # Errors
    ///
    /// Returns a validation error if the document cannot be written as INI.
    pub fn write_string(&mut self, input: impl Into<Input>) -> Result<String, WriteError> {
        let sections = self.prepare(input)?;
        let mut output = String::with_capacity(sections.len() * 64);

        self.emit_with(&sections, |text| {
            output.push_str(text);
            Ok(())
        })?;

        Ok(output)
    }

    /// Write the document to `path`, replacing whatever was there.
    ///
    /// The document is validated before the file is created, so invalid input leaves an existing
    /// file untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error, [`WriteError::CreateFile`] if the file cannot be created, or
    /// [`WriteError::SinkWrite`] if writing to it fails.
    pub fn write_file(
        &mut self,
        input: impl Into<Input>,
        path: impl AsRef<Path>,
    ) -> Result<(), WriteError> {
        let path = path.as_ref();
        let sections = self.prepare(input)?;

        tracing::debug!(path = %path.display(), "creating output file");
        let file = fs::File::create(path).map_err(|source| WriteError::CreateFile {
            path: path.to_owned(),
            source,
        })?;
        let mut file = io::BufWriter::new(file);

        self.emit(&sections, &mut file)?;
        file.flush()?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a validation error, or [`WriteError::SinkWrite`] if `sink` rejects a write.
    /// Sections written before the failure stay written.
    pub fn write_handle<W>(&mut self, input: impl Into<Input>, sink: &mut W) -> Result<(), WriteError>
    where
        W: io::Write + ?Sized,
    {
        let sections = self.prepare(input)?;
        self.emit(&sections, sink)
    }

    /// Write sections that have already been validated.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::SinkWrite`] if `sink` rejects a write.
    pub fn emit<W>(&mut self, sections: &[Section], sink: &mut W) -> Result<(), WriteError>
    where
        W: io::Write + ?Sized,
    {
        self.emit_with(sections, |text| sink.write_all(text.as_bytes()))
    }

    fn emit_with<F>(&mut self, sections: &[Section], mut write: F) -> Result<(), WriteError>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        for section in sections {
            let name = section.name();

            self.current_section = Some(name.to_owned());
            self.hooks.change_section(name, &mut self.options);

            let text = self.stringify_section(section);
            write(&text)?;

            self.done_sections.insert(name.to_owned());
            self.hooks.finish_section(name);
        }

        Ok(())
    }

    fn stringify_section(&self, section: &Section) -> String {
        let mut output = String::with_capacity(64);
        let header = self.needs_header(section.name());

        tracing::debug!(
            section = section.name(),
            properties = section.properties().len(),
            header,
            "writing section"
        );

        if header {
            self.stringify_section_header(section.name(), &mut output);
        }

        self.stringify_section_data(section.properties(), &mut output);

        output
    }

    fn needs_header(&self, name: &str) -> bool {
        let is_starting = self.options.starting_section.as_deref() == Some(name);

        !(is_starting && self.done_sections.is_empty() && !self.options.explicit_starting_header)
    }

    fn stringify_section_header(&self, name: &str, output: &mut String) {
        if !self.done_sections.is_empty() {
            output.push('\n');
        }

        output.push('[');
        output.push_str(name);
        output.push_str("]\n");
    }

    fn stringify_section_data(&self, properties: &[Property], output: &mut String) {
        for property in properties {
            self.stringify_value_assignment(property, output);
        }
    }

    fn stringify_value_assignment(&self, property: &Property, output: &mut String) {
        let Some(value) = property.value() else {
            tracing::trace!(property = property.name(), "skipping property without a value");
            return;
        };

        output.push_str(property.name());
        output.push_str(" = ");
        output.push_str(&self.hooks.stringify_value(value));
        output.push('\n');
    }
}
