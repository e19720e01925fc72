//! Network layer: auth endpoint calls, wire types, and the access-token slot.

pub mod access_token;
pub mod api;
pub mod types;
