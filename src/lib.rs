//! mbta: command-line client for the MBTA v3 API
//!
//! Lists subway lines and the ordered stops along a line.
//!
//! # Architecture
//!
//! - `domain`: lines, stops and query outcomes
//! - `application`: the query service
//! - `infrastructure`: HTTP transport and DI container
//! - `cli`: argument parsing and dispatch to an exit status
//! - `config`: layered endpoint configuration

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use exitcode::ExitStatus;
