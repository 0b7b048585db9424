//! Shared helpers: HTML escaping, content hashing, timestamps.

pub mod date;
pub mod hash;
pub mod html;
