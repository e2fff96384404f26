//! # lintnote_core
//!
//! Lint result model and output formatters for lintnote.
//!
//! This crate provides:
//! - The `Response` / `Problem` model produced by an upstream linter
//! - Location resolution into 1-based `FileLocation`s
//! - The GitHub Actions annotation formatter, plus JSON, text and summary
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust
//! use lintnote_core::{Problem, Response, format_github_actions};
//!
//! let responses = vec![Response::new(
//!     "a.proto",
//!     vec![Problem::new("core::0131::request-message-name", "bad name")],
//! )];
//!
//! let output = format_github_actions(&responses).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "::error file=a.proto,title=core%3A%3A0131%3A%3Arequest-message-name::bad name%0Ano location info found\n",
//! );
//! ```

mod config;
mod descriptor;
mod error;
pub mod formatters;
mod location;
mod position;
mod problem;
mod response;
mod rule_url;
mod source;

pub use config::{CONFIG_FILES, LintnoteConfig};
pub use descriptor::Descriptor;
pub use error::{FormatError, LintnoteError, LocationError, SpanError};
pub use formatters::{Format, OutputFormatter, format_github_actions, render};
pub use location::{Location, SourceSpan};
pub use position::{FileLocation, Position, Span};
pub use problem::Problem;
pub use response::{Response, ResponseSummary};
pub use rule_url::RuleUrlMappings;
pub use source::LineIndex;
