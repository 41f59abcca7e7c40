//! Upstream authentication.
//!
//! The train API hands out short-lived bearer tokens in exchange for a fixed
//! set of client credentials. [`AuthClient`] performs that exchange and
//! [`TokenCache`] keeps the most recent token for reuse across requests.

mod client;
mod error;
mod token;

pub use client::{AuthClient, AuthConfig, Credentials, IssuedToken};
pub use error::AuthError;
pub use token::{CachedToken, TokenCache};
