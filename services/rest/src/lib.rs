//! Signed requests to the PlaceNext API.
//!
//! Every request sent through [`Client`] carries the date headers, an
//! optional `Content-MD5` and an `Authorization: AimMatic <key>:<signature>`
//! header computed by [`compute_signature`].
//!
//! ```
//! use placenext_core::Context;
//! use placenext_rest::{Client, Config};
//!
//! let config = Config::new_with_context(
//!     &Context::new(),
//!     "UOCMBvhRFLwxDhUFdDeK2QpfvV80Og",
//!     "dMAMNw6HE60xDhV0SWZNsVZSVW91culvEXBFLE76ij62wsZXXqI+aQ",
//! )?;
//! let client = Client::new(Context::new(), config);
//! assert_eq!(client.config()?.host(), "https://api.aimmatic.com");
//! # Ok::<(), placenext_core::Error>(())
//! ```

mod constants;
pub use constants::*;

mod config;
pub use config::{default_config, set_default_config, Config};

mod sign_request;
pub use sign_request::{
    canonical_string, compute_signature, verify, Authorization, SigningOutput, Verification,
};

mod client;
pub use client::Client;
