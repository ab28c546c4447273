use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("unsupported input shape: {reason}")]
    UnsupportedShape { reason: String },

    #[error("illegal section name {section:?}")]
    IllegalSectionName { section: String },

    #[error("property name {property:?} in section {section:?} contains an illegal character")]
    IllegalPropertyName { section: String, property: String },

    #[error("value for {section}.{property} contains an illegal character")]
    IllegalValue { section: String, property: String },

    #[error("multiple assignments found for {section}.{property}")]
    DuplicateProperty { section: String, property: String },

    #[error("failed to write output")]
    SinkWrite {
        #[source]
        source: io::Error,
    },

    #[error("failed to create {}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            reason: reason.into(),
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(source: io::Error) -> Self {
        Self::SinkWrite { source }
    }
}
