#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use placenext_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_client, default_context};

mod api;
pub use api::RestApi;

pub mod rest {
    pub use placenext_rest::*;
}

pub mod v1 {
    pub use placenext_api_v1::*;
}
