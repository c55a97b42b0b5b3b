//! Stateless arithmetic over HTTP.
//!
//! Four POST endpoints take a JSON body `{"a": number, "b": number}` and
//! answer `{"result": number}`:
//!
//! ```text
//! POST /api/add       {"a":2,"b":3}    -> 200 {"result":5}
//! POST /api/divide    {"a":10,"b":0}   -> 400 {"error":"Division by zero"}
//! POST /api/multiply  {"a":"2","b":3}  -> 400 {"error":"Invalid input"}
//! GET  /health                         -> 200 {"status":"healthy"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Service and calculation error types
//! - [`calculator`]: Operand validation and the arithmetic itself
//! - [`api`]: HTTP routes, handlers and OpenAPI document
//! - [`metrics`]: Prometheus counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{CalcError, Result, ServiceError};
