//! # trace2dox
//!
//! Turns trace logs into mscgen sequence diagrams that Doxygen can embed.
//!
//! Log lines carrying a trace identifier are reduced to messages such as
//! `Alice->Bob hello`, optionally filtered by the entities involved, decorated
//! with configured attributes and written out as an `@msc` comment block.

pub mod cli;
pub mod config;
pub mod diagnostic_log;
pub mod entities;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod render;
pub mod trace;

pub use config::Settings;
pub use error::Trace2DoxError;
pub use filter::{Filters, Logic};
pub use pipeline::{Diagram, run};
pub use trace::{Arrow, Message};
