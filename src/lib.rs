//! A configuration builder for the cartoon-shorts automation tool.
//!
//! This library turns raw form input into the `config.json` document read by
//! `python -m automation.main`, and derives the views that accompany it: a
//! JSON preview, a small dashboard and ready-to-paste command lines.
//!
//! # Architecture
//!
//! The library is structured into several key components:
//! - `Configuration`: the generated document and its defaults
//! - `normalize`: pure conversions from field text to typed values
//! - `FormState`/`FormFields`: where raw field text comes from
//! - `generate`: builds one complete snapshot from a form
//! - `present`/`format_commands`: dashboard figures and command lines
//! - `ViewController`: refreshes every view on change and owns the
//!   download and clipboard side effects
//! - `run_session`: an interactive line-based front end over the controller
//!
//! # Example
//! ```
//! use shorts_config::{Config, Field, FormFields, ViewController};
//!
//! let mut controller = ViewController::new(FormFields::default(), &Config::default()).unwrap();
//! controller.input(Field::Tags, "space, rockets").unwrap();
//! assert_eq!(controller.snapshot().tags, vec!["space", "rockets"]);
//! ```
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod controller;
pub mod copy_button;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod generator;
pub mod model;
pub mod normalize;
pub mod session;

// Re-export commonly used items
pub use clipboard::{Clipboard, SystemClipboard};
pub use commands::{base_command, format_commands, CommandKind, CommandSet};
pub use config::Config;
pub use controller::{CopyTarget, ViewController};
pub use copy_button::{ButtonState, CopyButton};
pub use dashboard::{present, status_text, DashboardView};
pub use error::AppError;
pub use form::{Field, FormFields, FormState};
pub use generator::generate;
pub use model::{Configuration, PrivacyStatus, CONFIG_FILE_NAME, DEFAULTS};
pub use session::{run_session, SessionCommand};
