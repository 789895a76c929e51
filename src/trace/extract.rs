//! Pick trace lines out of a log file and strip them down to the message text.
//!
//! A raw log line looks like
//! ```text
//! 2021-01-01 12:00:00 TRACE123 MAISA_Alice->MAISA_Bob hello
//! ```
//! Lines are kept when they match the trace identifier (`TRACE123`). The
//! namespace pattern (`MAISA_`) is removed everywhere on the line, then
//! everything up to and including the trace identifier is dropped, leaving
//! `Alice->Bob hello`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::error::Trace2DoxError;

/// Compiled patterns used to recognise and clean trace lines.
#[derive(Debug, Clone)]
pub struct TracePatterns {
    trace_id: Regex,
    namespace: Regex,
    /// `.*(?:<trace id>)`, greedy, so it eats up to the last trace id
    leading_noise: Regex,
}

impl TracePatterns {
    pub fn new(trace_id: &str, namespace: &str) -> Result<Self, Trace2DoxError> {
        let compile = |key: &'static str, pattern: &str| {
            Regex::new(pattern).map_err(|e| Trace2DoxError::InvalidPattern {
                key,
                pattern: pattern.to_string(),
                error: e.to_string(),
            })
        };

        Ok(Self {
            trace_id: compile("traceid", trace_id)?,
            namespace: compile("namespace", namespace)?,
            leading_noise: compile("traceid", &format!(".*(?:{trace_id})"))?,
        })
    }

    pub fn trace_id(&self) -> &str {
        self.trace_id.as_str()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    /// Clean a single log line, or `None` if it isn't a trace line.
    pub fn clean_line(&self, line: &str) -> Option<String> {
        if !self.trace_id.is_match(line) {
            return None;
        }

        let without_namespace = self.namespace.replace_all(line, "");
        let message = self.leading_noise.replace(&without_namespace, "");
        Some(message.trim().to_string())
    }

    /// Clean every trace line from a reader, preserving order.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; log files are rarely clean.
    pub fn extract<R: BufRead>(&self, reader: R) -> std::io::Result<Vec<String>> {
        let mut traces = Vec::new();
        for line in reader.split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            if let Some(trace) = self.clean_line(&line) {
                traces.push(trace);
            }
        }
        Ok(traces)
    }
}

/// Read the input log and return its cleaned trace strings.
pub fn read_traces(path: &Path, patterns: &TracePatterns) -> Result<Vec<String>, Trace2DoxError> {
    let file = File::open(path).map_err(|_| Trace2DoxError::InputNotFound {
        path: path.to_path_buf(),
    })?;

    let traces = patterns
        .extract(BufReader::new(file))
        .map_err(|e| Trace2DoxError::InputRead {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

    log::info!(
        "Found {} trace lines in {} (traceid {:?}, namespace {:?})",
        traces.len(),
        path.display(),
        patterns.trace_id(),
        patterns.namespace()
    );
    Ok(traces)
}
