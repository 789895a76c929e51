//! The end-to-end conversion: trace log in, mscgen document out.

use crate::config::Settings;
use crate::entities::collect_entities;
use crate::filter::filter_messages;
use crate::render::{AttributeRenderer, render_document, write_document};
use crate::trace::{parse_traces, read_traces};

/// Rendered diagram contents, before they are wrapped in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    /// Rendered entity declarations, first-seen order
    pub entities: Vec<String>,
    /// Rendered messages, log order
    pub messages: Vec<String>,
}

impl Diagram {
    /// Parse, filter and render cleaned traces.
    ///
    /// Traces that don't parse as messages are skipped with a warning.
    pub fn from_traces<S: AsRef<str>>(traces: &[S], settings: &Settings) -> Self {
        let parsed = parse_traces(traces);
        let parsed_count = parsed.len();
        let messages = filter_messages(parsed, settings.filters.as_ref(), settings.logic);
        log::info!(
            "Parsed {parsed_count} of {} traces, kept {} messages",
            traces.len(),
            messages.len()
        );

        let renderer = AttributeRenderer::new(&settings.attributes);
        Self {
            entities: collect_entities(&messages)
                .into_iter()
                .map(|entity| renderer.entity(entity))
                .collect(),
            messages: messages
                .iter()
                .map(|message| renderer.message(message))
                .collect(),
        }
    }

    pub fn to_document(&self) -> Result<String, minijinja::Error> {
        render_document(&self.entities, &self.messages)
    }
}

/// Read the input log, convert it and write the output document.
pub fn run(settings: &Settings) -> anyhow::Result<Diagram> {
    let traces = read_traces(&settings.infile, &settings.patterns)?;
    let diagram = Diagram::from_traces(&traces, settings);
    let document = diagram.to_document()?;
    write_document(&settings.outfile, &document)?;
    log::info!(
        "Wrote {} entities and {} messages to {}",
        diagram.entities.len(),
        diagram.messages.len(),
        settings.outfile.display()
    );
    Ok(diagram)
}
