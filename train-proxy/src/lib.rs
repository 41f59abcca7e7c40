//! Train departure proxy.
//!
//! Authenticates against an upstream train API, fetches the day's trains,
//! drops the ones leaving too soon and serves the rest ranked by fare,
//! seats and departure.

pub mod auth;
pub mod board;
pub mod config;
pub mod domain;
pub mod feed;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;
