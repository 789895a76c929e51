//! The line-oriented configuration file.
//!
//! ```text
//! # Comments start with a hash
//! traceid: TRACE123
//! namespace: MAISA_
//! Alice: textcolor="red"
//! Alice->Bob: label=request, linecolor="blue"
//! Alice:>Bob: arcskip=1
//! ```
//!
//! Each line is split at its first colon, except that a message triple using
//! `:>` or `<:` keeps the arrow in the key. Values are trimmed and the first
//! occurrence of a key wins.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Layer;
use crate::error::Trace2DoxError;
use crate::trace::Arrow;

static TRIPLE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(\w+(?:{})\w+)\s*:(.*)$",
        Arrow::alternation()
    ))
    .expect("triple key regex is valid")
});

/// Split one line into key and value, or `None` for comments and non-settings.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') {
        return None;
    }

    if let Some(captures) = TRIPLE_KEY.captures(line)
        && let (Some(key), Some(value)) = (captures.get(1), captures.get(2))
    {
        return Some((key.as_str(), value.as_str().trim()));
    }

    // A colon in the first column has no key before it
    match line.find(':') {
        Some(pos) if pos > 0 => {
            let (key, value) = (&line[..pos], &line[pos + 1..]);
            let key = key.trim();
            (!key.is_empty()).then(|| (key, value.trim()))
        }
        _ => None,
    }
}

/// Parse configuration file contents into a layer.
pub fn parse_config(contents: &str) -> Layer {
    let mut layer = Layer::new();
    for (key, value) in contents.lines().filter_map(parse_line) {
        layer
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    layer
}

/// Read and parse a configuration file.
pub fn read_config_file(path: &Path) -> Result<Layer, Trace2DoxError> {
    let bytes = std::fs::read(path).map_err(|_| Trace2DoxError::ConfigNotFound {
        path: path.to_path_buf(),
    })?;
    let layer = parse_config(&String::from_utf8_lossy(&bytes));
    log::debug!("Read {} settings from {}", layer.len(), path.display());
    Ok(layer)
}
