//! Core components for the PlaceNext SDK.
//!
//! This crate provides the foundational types shared by the signing client and
//! the API wrappers built on top of it.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the implementations for HTTP sending and
//!   environment access. The signing client never talks to the network or the
//!   process environment directly, it always goes through a [`Context`].
//! - **Error**: A single [`Error`] type with an [`ErrorKind`] so callers can tell
//!   configuration problems from unsigned requests and transport failures.
//! - **ErrorStack**: A chainable error carrying a stable numeric [`ErrorCode`],
//!   used by domain validation to add context without losing the code.
//!
//! ## Example
//!
//! ```
//! use placenext_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("PLACENEXT_APIKEY".to_string(), "key".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("PLACENEXT_APIKEY").as_deref(), Some("key"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Base64, MD5 and HMAC-SHA256 helpers
//! - [`time`]: RFC 1123 timestamps as the PlaceNext API expects them
//! - [`utils`]: Redaction of secrets in debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod stack;
pub use stack::{stack_after, stack_before, ErrorCode, ErrorStack};

mod request;
pub use request::{ConnectionInfo, SigningRequest};
