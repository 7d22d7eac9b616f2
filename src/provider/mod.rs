//! Character-lookup providers.
//!
//! Two community sites publish Anarchy Online character data, each in its
//! own XML dialect. This module carries the HTTP client that talks to them
//! and the per-dialect parsers that normalize their documents into one
//! [`crate::model::character::CharacterSheet`].

pub mod client;
pub mod parser;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use client::{LookupClient, LookupClientBuilder};

/// The lookup sites character data can be resolved from.
///
/// Order matters to the resolution service: `PeopleAnarchyOnline` is the
/// primary site and `RubiKa` the fallback tried after a transport failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Funcom's official character bio site (primary).
    PeopleAnarchyOnline,
    /// The rubi-ka.net community site (fallback).
    RubiKa,
}

impl Source {
    /// The label written to the `source` column of persisted records.
    pub fn label(self) -> &'static str {
        match self {
            Source::PeopleAnarchyOnline => "people.anarchy-online.com",
            Source::RubiKa => "Rubi-Ka.net",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
