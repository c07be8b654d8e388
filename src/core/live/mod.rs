// src/core/live/mod.rs

//! The Live Client Data API: unauthenticated, read-only, reachable on a
//! fixed loopback port only while a match is running.

pub mod api;
pub mod reader;

pub use api::{LiveClientApi, LiveDataGateway};
pub use reader::LiveClientReader;
