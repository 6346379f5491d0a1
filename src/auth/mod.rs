//! Authorization module
//!
//! Supports: resource tokens, AAD bearer tokens, custom headers and
//! externally supplied request signers.
//!
//! Master-key signing is not implemented here; plug it in through
//! [`RequestSigner`].

mod authenticator;
mod types;

pub use authenticator::{encode_authorization, Authenticator};
pub use types::{AuthConfig, RequestSigner, SigningContext};
