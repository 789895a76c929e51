//! Trace log extraction and message parsing.
//!
//! Turns raw log output into [`Message`]s:
//!
//! - **Extraction**: keep lines carrying the trace identifier and strip
//!   timestamps, log prefixes and namespaces ([`extract`])
//! - **Parsing**: split each cleaned trace into sender, arrow, receiver and
//!   label ([`parse`])
//!
//! # Usage
//!
//! ```bash
//! # .trace2dox contains `traceid: TRACE123`
//! trace2dox -i app.log -o app.msc
//! ```

pub mod extract;
pub mod parse;

pub use extract::{TracePatterns, read_traces};
pub use parse::{Arrow, Message, parse_trace, parse_traces};
