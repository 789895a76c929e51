//! Collect the participants of a message sequence.

use indexmap::IndexSet;

use crate::trace::Message;

/// Every sender and receiver, without duplicates, in order of first appearance.
pub fn collect_entities(messages: &[Message]) -> IndexSet<&str> {
    messages
        .iter()
        .flat_map(|message| [message.sender.as_str(), message.receiver.as_str()])
        .collect()
}
