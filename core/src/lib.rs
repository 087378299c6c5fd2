//! Core components for signing Hyper_ API requests.
//!
//! This crate provides the service-neutral building blocks used by the
//! signers in this workspace: the logical [`SigningRequest`], the output
//! [`HeaderSet`], the typed [`Error`], and small hashing and time helpers.
//!
//! ## Example
//!
//! ```
//! use hypersign_core::{HeaderSet, SigningRequest};
//! use http::header;
//! use http::HeaderValue;
//!
//! # fn main() -> hypersign_core::Result<()> {
//! let req = SigningRequest::new("GET", "us-west-1.hyper.sh")?
//!     .with_path("v1.23/containers/json")
//!     .with_query("all", "true");
//! assert_eq!(req.payload(), b"");
//!
//! let mut signed = HeaderSet::new();
//! signed.insert(header::HOST, HeaderValue::from_str(&req.host)?);
//!
//! let mut outbound = http::HeaderMap::new();
//! signed.apply(&mut outbound);
//! assert_eq!(outbound[header::HOST], "us-west-1.hyper.sh");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod request;
pub use request::SigningRequest;
mod header;
pub use header::HeaderSet;
