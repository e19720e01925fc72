//! Process-wide slot holding the current access token.
//!
//! The browser runs this crate on a single thread, so the slot is a
//! thread-local cell. Writers always store a complete token or nothing.

#[cfg(test)]
#[path = "access_token_test.rs"]
mod access_token_test;

use std::cell::RefCell;

thread_local! {
    static ACCESS_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn set_access_token(token: Option<String>) {
    ACCESS_TOKEN.with(|slot| *slot.borrow_mut() = token);
}

pub fn clear_access_token() {
    set_access_token(None);
}

pub fn access_token() -> Option<String> {
    ACCESS_TOKEN.with(|slot| slot.borrow().clone())
}

/// `Authorization` header value for authenticated requests.
pub fn bearer_header() -> Option<String> {
    access_token().map(|token| format!("Bearer {token}"))
}
