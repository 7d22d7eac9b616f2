//! Test fixture modules for database and HTTP mock creation.
//!
//! The `character` submodule covers everything around player characters:
//! XML documents in both lookup-site dialects, mock lookup endpoints, and
//! player rows.

pub mod character;
