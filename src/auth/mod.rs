//! Credential decoding and role codes.

pub mod claims;
pub mod roles;
