//! Library entries as they appear in configuration
//!
//! An entry is either a bare pod name or a record with options:
//!
//! ```yaml
//! libraries:
//!   - LibA
//!   - name: Firebase
//!     modularHeaders: true
//! ```

use serde::{Deserialize, Serialize};

/// One pod the caller wants built as a static library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LibraryEntry {
    /// Bare pod name
    Name(String),
    /// Pod name with options
    Options(LibraryOptions),
}

/// Record form of a [`LibraryEntry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryOptions {
    pub name: String,

    /// Also enable modular headers for this pod
    #[serde(
        default,
        alias = "modular_headers",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub modular_headers: bool,
}

impl LibraryEntry {
    /// Entry requesting modular headers as well
    pub fn with_modular_headers(name: impl Into<String>) -> Self {
        LibraryEntry::Options(LibraryOptions {
            name: name.into(),
            modular_headers: true,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            LibraryEntry::Name(name) => name,
            LibraryEntry::Options(options) => &options.name,
        }
    }

    pub fn modular_headers(&self) -> bool {
        match self {
            LibraryEntry::Name(_) => false,
            LibraryEntry::Options(options) => options.modular_headers,
        }
    }
}

impl From<&str> for LibraryEntry {
    fn from(name: &str) -> Self {
        LibraryEntry::Name(name.to_string())
    }
}

impl From<String> for LibraryEntry {
    fn from(name: String) -> Self {
        LibraryEntry::Name(name)
    }
}

/// Flat lists handed to the patcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedLibraries {
    /// Every library name, input order, duplicates kept
    pub all_libraries: Vec<String>,
    /// Names that asked for modular headers
    pub modular_header_libraries: Vec<String>,
}

/// Split entries into all names and the modular-headers subset
pub fn normalize(entries: &[LibraryEntry]) -> NormalizedLibraries {
    let mut normalized = NormalizedLibraries::default();

    for entry in entries {
        normalized.all_libraries.push(entry.name().to_string());
        if entry.modular_headers() {
            normalized
                .modular_header_libraries
                .push(entry.name().to_string());
        }
    }

    normalized
}
