//! Business services over the repositories and the lookup client.

pub mod character;
pub mod roster;
