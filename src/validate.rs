use std::collections::{HashMap, HashSet};

use crate::error::WriteError;
use crate::section::Section;

/// Reject names and values that cannot be written without changing their meaning, and
/// properties assigned more than once.
///
/// Assignments are tracked per section name across the whole input, so two entries sharing a
/// name cannot assign the same property between them.
///
/// # Errors
///
/// Returns the first violation found, walking sections and properties in order.
pub fn validate(sections: &[Section]) -> Result<(), WriteError> {
    let mut seen = HashMap::<&str, HashSet<&str>>::with_capacity(sections.len());

    for section in sections {
        let name = section.name();
        let assigned = seen.entry(name).or_default();

        if is_illegal_section_name(name) {
            return Err(WriteError::IllegalSectionName {
                section: name.to_owned(),
            });
        }

        for property in section.properties() {
            if is_illegal_property_name(property.name()) {
                return Err(WriteError::IllegalPropertyName {
                    section: name.to_owned(),
                    property: property.name().to_owned(),
                });
            }

            if property.value().is_some_and(is_illegal_value) {
                return Err(WriteError::IllegalValue {
                    section: name.to_owned(),
                    property: property.name().to_owned(),
                });
            }

            if !assigned.insert(property.name()) {
                return Err(WriteError::DuplicateProperty {
                    section: name.to_owned(),
                    property: property.name().to_owned(),
                });
            }
        }
    }

    Ok(())
}

fn is_illegal_section_name(name: &str) -> bool {
    breaks_line(name) || name.ends_with(char::is_whitespace)
}

fn is_illegal_property_name(name: &str) -> bool {
    breaks_line(name) || name.contains(char::is_whitespace) || name.ends_with('=')
}

fn is_illegal_value(value: &str) -> bool {
    breaks_line(value) || value.ends_with(char::is_whitespace)
}

/// True if `text` would end the line early, start with whitespace a reader would trim, or open
/// an inline comment.
fn breaks_line(text: &str) -> bool {
    if text.contains('\n') || text.starts_with(char::is_whitespace) {
        return true;
    }

    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek() == Some(&';') {
            return true;
        }
    }

    false
}
