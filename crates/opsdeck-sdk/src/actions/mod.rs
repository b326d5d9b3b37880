//! Action factories
//!
//! Each factory builds an immutable [`ActionIntent`](opsdeck_core::ActionIntent):
//! the serializable call description plus the IAM statements required to
//! perform it. Intents are consumed later by the resolver, which strips the
//! statements into per-page policies.

pub mod app;
pub mod aws;
