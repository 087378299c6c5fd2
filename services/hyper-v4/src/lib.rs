//! Hyper_ `HYPER-HMAC-SHA256` request signer.
//!
//! The signer canonicalizes a [`SigningRequest`], derives a scoped signing
//! key from the secret key and returns the headers (including
//! `Authorization`) to attach to the outbound request.
//!
//! ## Example
//!
//! ```
//! use hypersign_core::SigningRequest;
//! use hypersign_hyper_v4::{Config, RequestSigner};
//!
//! # fn main() -> hypersign_core::Result<()> {
//! let config = Config {
//!     access_key_id: Some("AKID".to_string()),
//!     secret_access_key: Some("testsecret".to_string()),
//!     ..Default::default()
//! }
//! .with_region_from_host("us-west-1.hyper.sh");
//! let signer = RequestSigner::from_config(&config);
//!
//! let req = SigningRequest::new("GET", "us-west-1.hyper.sh")?.with_path("v1.23/version");
//! let headers = signer.sign(&req)?;
//! assert!(headers.get("authorization").is_some());
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::canonical_percent_encode;
pub use sign_request::RequestSigner;

mod constants;
