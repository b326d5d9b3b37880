//! Opsdeck SDK
//!
//! High-level API for declaring interactive internal apps and synthesizing
//! them into deployable templates.
//!
//! ```
//! use opsdeck_sdk::{App, AppConfig, PageProps};
//! use opsdeck_sdk::components::{display, input, LayoutOptions};
//! use opsdeck_sdk::actions::{app as app_actions, aws};
//!
//! # fn main() -> opsdeck_sdk::Result<()> {
//! let app = App::new(AppConfig {
//!     name: "User admin".to_string(),
//!     api_key: Some("key-123".to_string()),
//!     ..AppConfig::default()
//! })?
//! .page(
//!     "Input",
//!     PageProps {
//!         body: vec![
//!             display::heading("Create user", Default::default()),
//!             input::text("email", Default::default()),
//!             input::button(
//!                 "Save",
//!                 aws::lambda::invoke(
//!                     "arn:aws:lambda:eu-west-1:123:function:save",
//!                     "eu-west-1",
//!                     serde_json::json!({ "email": "{{email}}" }),
//!                     Default::default(),
//!                 ),
//!                 input::ButtonOptions {
//!                     on_click_finished: Some(
//!                         app_actions::change_page("Done", Default::default()).into(),
//!                     ),
//!                     ..Default::default()
//!                 },
//!             ),
//!         ],
//!         ..PageProps::default()
//!     },
//! )
//! .page(
//!     "Done",
//!     PageProps {
//!         body: vec![display::text("Saved.", LayoutOptions::default())],
//!         ..PageProps::default()
//!     },
//! );
//!
//! let (template, policies) = app.synth()?;
//! # let _ = (template, policies);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod app;
pub mod components;
pub mod error;
pub mod expr;

// Re-export main types
pub use app::{App, AppConfig, PageProps};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use opsdeck_compiler::{AppTemplate, PagePolicy};
pub use opsdeck_core::{
    ActionIntent, Component, Expr, IamStatement, PlainExecutionRole, Statement,
};
