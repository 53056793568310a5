//! Merlion — Singapore trip-preference wizard core.

pub mod config;
pub mod error;
pub mod nav;
pub mod notify;
pub mod store;
pub mod wizard;
