pub mod home;
pub mod install;
pub mod login;
