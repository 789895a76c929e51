//! Parse cleaned trace strings into structured messages.
//!
//! A cleaned trace has the shape `<entity><arrow><entity><optional label>`:
//! ```text
//! Alice->Bob hello
//! Server=>>Client
//! Worker<:Queue ack 42
//! ```
//!
//! Entities are word-character identifiers. The arrow is one of the mscgen
//! message types listed in [`Arrow`]; anything after the receiver is the label.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use strum::VariantArray;

use crate::error::Trace2DoxError;

/// Message types understood by mscgen.
///
/// Variant order is the order the grammar tries them in, so `=>` is attempted
/// before `=>>` and the regex engine backtracks into the longer token when the
/// receiver would otherwise start with `>`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
pub enum Arrow {
    #[strum(serialize = "->")]
    Message,
    #[strum(serialize = "=>")]
    Method,
    #[strum(serialize = "=>>")]
    Callback,
    #[strum(serialize = ">>")]
    Return,
    #[strum(serialize = ":>")]
    Emphasised,
    #[strum(serialize = "<-")]
    MessageBack,
    #[strum(serialize = "<=")]
    MethodBack,
    #[strum(serialize = "<<=")]
    CallbackBack,
    #[strum(serialize = "<<")]
    ReturnBack,
    #[strum(serialize = "<:")]
    EmphasisedBack,
}

impl Arrow {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Regex alternation matching any arrow token, in grammar order.
    pub fn alternation() -> String {
        Self::VARIANTS
            .iter()
            .map(|arrow| regex::escape(arrow.as_str()))
            .collect::<Vec<_>>()
            .join("|")
    }
}

static MESSAGE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(\w+)({})(\w+)(.+)?", Arrow::alternation()))
        .expect("message grammar is a valid regex")
});

/// A message between two entities, as found in the trace log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub arrow: Arrow,
    pub receiver: String,
    /// Free text after the receiver, trimmed; empty when there was none
    pub label: String,
}

impl Message {
    pub fn new(sender: &str, arrow: Arrow, receiver: &str, label: &str) -> Self {
        Self {
            sender: sender.to_string(),
            arrow,
            receiver: receiver.to_string(),
            label: label.to_string(),
        }
    }

    /// The `sender+arrow+receiver` key used for attribute lookups, e.g. `A->B`.
    pub fn triple(&self) -> String {
        format!("{}{}{}", self.sender, self.arrow, self.receiver)
    }
}

/// Text of an optional capture group, or `""` when the group did not take part.
fn group_or_empty<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures.get(index).map_or("", |m| m.as_str())
}

/// Parse a single cleaned trace.
pub fn parse_trace(trace: &str) -> Result<Message, Trace2DoxError> {
    let parse_error = || Trace2DoxError::ParseError {
        trace: trace.to_string(),
    };
    let captures = MESSAGE_GRAMMAR.captures(trace).ok_or_else(parse_error)?;
    let arrow = group_or_empty(&captures, 2)
        .parse::<Arrow>()
        .map_err(|_| parse_error())?;

    Ok(Message::new(
        group_or_empty(&captures, 1),
        arrow,
        group_or_empty(&captures, 3),
        group_or_empty(&captures, 4).trim(),
    ))
}

/// Parse every trace, skipping (and logging) the ones that don't match the grammar.
pub fn parse_traces<S: AsRef<str>>(traces: &[S]) -> Vec<Message> {
    traces
        .iter()
        .filter_map(|trace| match parse_trace(trace.as_ref()) {
            Ok(message) => Some(message),
            Err(err) => {
                log::warn!("Skipping trace: {err}");
                None
            }
        })
        .collect()
}
