// src/core/lcu/mod.rs

//! The LCU API: the client's own authenticated surface, reachable on a
//! dynamic loopback port whenever the client application is open.

pub mod api;
pub mod reader;

pub use api::{LcuApi, LcuGateway};
pub use reader::LcuReader;
