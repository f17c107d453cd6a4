//! # Hostinfo
//!
//! Wiring for the hostinfo binary: command line, logging, dependency
//! construction and the HTTP listener.

pub mod bootstrap;
pub mod cli;
pub mod di;
pub mod server;
