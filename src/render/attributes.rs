//! Presentation attributes for entities and messages.
//!
//! Attributes come from configuration lines keyed by an entity name or by a
//! message triple:
//! ```text
//! Alice: textcolor="red"
//! Alice->Bob: label=request, linecolor="blue"
//! ```
//! They are rendered as mscgen attribute lists, `Alice [ textcolor="red" ]`.
//! A label found on the trace line itself takes precedence over a configured
//! `label=`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{NoExpand, Regex};

use crate::trace::Message;

static LABEL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\blabel\s*=").expect("label key regex is valid"));

static LABEL_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\blabel\s*=\s*(?:"(?:[^"\\]|\\.)*"|\w*)"#).expect("label regex is valid")
});

/// Configured attribute strings, keyed by entity name or message triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }

    /// Attribute string for a key. Blank values count as not configured.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `"text"` with backslashes and double quotes escaped for mscgen.
fn quote_label(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Renders entities and messages with their configured attributes.
#[derive(Debug, Clone, Copy)]
pub struct AttributeRenderer<'a> {
    attributes: &'a Attributes,
}

impl<'a> AttributeRenderer<'a> {
    pub fn new(attributes: &'a Attributes) -> Self {
        Self { attributes }
    }

    /// `Alice [ <attributes> ]`, or just `Alice` when nothing is configured.
    pub fn entity(&self, entity: &str) -> String {
        match self.attributes.get(entity) {
            Some(attributes) => format!("{entity} [ {attributes} ]"),
            None => entity.to_string(),
        }
    }

    /// Render a message, merging its inline label with configured attributes.
    pub fn message(&self, message: &Message) -> String {
        let triple = message.triple();
        let configured = self.attributes.get(&triple);
        let label = quote_label(&message.label);

        match (message.label.is_empty(), configured) {
            (false, Some(attributes)) if LABEL_KEY.is_match(attributes) => {
                let assignment = format!("label={label}");
                let merged = LABEL_ASSIGNMENT.replace_all(attributes, NoExpand(&assignment));
                format!("{triple} [ {merged} ]")
            }
            (false, Some(attributes)) => format!("{triple} [ label={label}, {attributes} ]"),
            (false, None) => format!("{triple} [ label={label} ]"),
            (true, Some(attributes)) => format!("{triple} [ {attributes} ]"),
            (true, None) => triple,
        }
    }
}
