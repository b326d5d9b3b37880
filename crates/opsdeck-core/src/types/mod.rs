//! Shared value types

pub mod iam;
pub mod value;

pub use iam::{Effect, IamStatement};
pub use value::PropValue;
