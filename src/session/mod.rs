//! Session lifecycle: startup refresh, sign-out, and the reactive host that
//! connects both to the UI.

pub mod bootstrapper;
pub mod host;
pub mod sign_out;
