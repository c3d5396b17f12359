// Types shared by the session store and its callers
pub mod common;

mod client;
mod error;

pub use client::{init, SessionManager, SessionStore, Settings, SignupDetails};
pub use common::StoredSession;
pub use error::AuthError;
