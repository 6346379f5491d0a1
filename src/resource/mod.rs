//! Resource access contract
//!
//! Every resource family (collections today; databases, documents and
//! stored procedures follow the same shape) performs its calls through the
//! [`ResourceClient`] capability: build a [`ResourceRequest`], hand it to a
//! [`Transport`], check the status against the single expected code and
//! decode the body.

mod client;
mod types;

pub use client::{ResourceClient, Transport};
pub use types::{ResourceRequest, ResourceResponse};

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
