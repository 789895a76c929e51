//! Message filtering by entity membership.

use indexmap::IndexMap;

use crate::trace::Message;

/// How sender (`a`) and receiver (`b`) membership in the filter list combine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Logic {
    /// a and b must be in the list
    #[default]
    #[value(name = "AND")]
    And,
    /// a or b must be in the list
    #[value(name = "OR")]
    Or,
    /// neither a nor b can be in the list
    #[value(name = "NOT")]
    Not,
    /// everything except messages where a and b are both in the list
    #[value(name = "NAND")]
    Nand,
    /// either a or b must be in the list, but not both
    #[value(name = "XOR")]
    Xor,
}

impl Logic {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Combine the two membership tests.
    pub fn evaluate(self, sender_listed: bool, receiver_listed: bool) -> bool {
        match self {
            Logic::And => sender_listed && receiver_listed,
            Logic::Or => sender_listed || receiver_listed,
            Logic::Not => !sender_listed && !receiver_listed,
            Logic::Nand => !(sender_listed && receiver_listed),
            Logic::Xor => sender_listed != receiver_listed,
        }
    }
}

/// Entities named on the filter list, each mapped to a display value.
///
/// Written as `Alice,Bob:Robert`. Only the keys (`Alice`, `Bob`) take part in
/// filtering; rendered output keeps the names found in the traces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: IndexMap<String, String>,
}

impl Filters {
    /// Parse a comma-separated filter list. Empty items are ignored and the
    /// first mention of an entity wins.
    pub fn parse(list: &str) -> Self {
        let mut entries = IndexMap::new();
        for item in list.split(',') {
            let (key, display) = match item.split_once(':') {
                Some((key, display)) => (key.trim(), display.trim()),
                None => (item.trim(), item.trim()),
            };
            if key.is_empty() {
                continue;
            }
            let display = if display.is_empty() { key } else { display };
            entries
                .entry(key.to_string())
                .or_insert_with(|| display.to_string());
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entries.contains_key(entity)
    }
}

/// Whether a message survives the filter. Without a filter list every message does.
pub fn keep(message: &Message, filters: Option<&Filters>, logic: Logic) -> bool {
    let Some(filters) = filters else {
        return true;
    };
    logic.evaluate(
        filters.contains(&message.sender),
        filters.contains(&message.receiver),
    )
}

/// Apply [`keep`] to every message, preserving order.
pub fn filter_messages(
    messages: Vec<Message>,
    filters: Option<&Filters>,
    logic: Logic,
) -> Vec<Message> {
    let total = messages.len();
    let kept: Vec<_> = messages
        .into_iter()
        .filter(|message| keep(message, filters, logic))
        .collect();
    if let Some(filters) = filters {
        log::debug!(
            "Filter ({logic}, {} entities) kept {} of {total} messages",
            filters.len(),
            kept.len()
        );
    }
    kept
}
