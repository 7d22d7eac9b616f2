//! In-crate test helpers for types the shared test-utils crate cannot
//! construct without depending on this crate.
