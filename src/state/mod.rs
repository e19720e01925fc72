//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `identity` holds who is signed in; `bootstrap` holds where the shell is in
//! its startup sequence. Components depend on whichever they need.

pub mod bootstrap;
pub mod identity;
