//! Configuration layering.
//!
//! Settings are resolved from three layers, later layers winning per key:
//!
//! 1. Built-in defaults ([`defaults`])
//! 2. The config file (`.trace2dox`, or the `--config` path)
//! 3. Command-line flags
//!
//! Command-line flags are applied before the config file is read as well, so
//! `--config` picks the file. Every layer is a plain string map; [`Settings`]
//! is the validated result handed to the rest of the pipeline.
//!
//! Keys other than the ones below are attribute strings for entities
//! (`Alice`) or messages (`Alice->Bob`).

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::Trace2DoxError;
use crate::filter::{Filters, Logic};
use crate::render::Attributes;
use crate::trace::TracePatterns;

pub mod file;

/// One configuration layer: setting name to raw value, in insertion order.
pub type Layer = IndexMap<String, String>;

pub const INFILE: &str = "infile";
pub const OUTFILE: &str = "outfile";
pub const NAMESPACE: &str = "namespace";
pub const LOGIC: &str = "logic";
pub const CONFIG_FILE: &str = "config-file";
pub const TRACE_ID: &str = "traceid";
pub const FILTERS: &str = "filters";

pub const DEFAULT_INPUT_FILE: &str = "trace.log";
pub const DEFAULT_OUTPUT_FILE: &str = "trace.msc";
pub const DEFAULT_NAMESPACE: &str = "MAISA_";
pub const DEFAULT_CONFIG_FILE: &str = ".trace2dox";

/// The built-in bottom layer.
pub fn defaults() -> Layer {
    [
        (INFILE, DEFAULT_INPUT_FILE),
        (OUTFILE, DEFAULT_OUTPUT_FILE),
        (NAMESPACE, DEFAULT_NAMESPACE),
        (LOGIC, Logic::default().as_str()),
        (CONFIG_FILE, DEFAULT_CONFIG_FILE),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Overlay `upper` onto `base`; keys present in both take `upper`'s value.
pub fn merge(base: &mut Layer, upper: &Layer) {
    for (key, value) in upper {
        base.insert(key.clone(), value.clone());
    }
}

/// Validated settings for one run. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Settings {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    /// The config file that was actually read
    pub config_file: PathBuf,
    pub logic: Logic,
    pub patterns: TracePatterns,
    /// `None` when no filter list is configured, so every message is kept
    pub filters: Option<Filters>,
    pub attributes: Attributes,
}

impl Settings {
    /// Resolve settings from defaults, the config file and command-line overrides.
    pub fn load(overrides: &Layer) -> Result<Self, Trace2DoxError> {
        let mut layer = defaults();
        merge(&mut layer, overrides);

        let config_file = PathBuf::from(
            layer
                .get(CONFIG_FILE)
                .map_or(DEFAULT_CONFIG_FILE, String::as_str),
        );
        let file_layer = file::read_config_file(&config_file)?;
        merge(&mut layer, &file_layer);
        merge(&mut layer, overrides);

        Self::from_layer(layer, config_file)
    }

    /// Validate a fully merged layer.
    pub fn from_layer(mut layer: Layer, config_file: PathBuf) -> Result<Self, Trace2DoxError> {
        fn take(layer: &mut Layer, key: &str, default: &str) -> String {
            layer
                .shift_remove(key)
                .unwrap_or_else(|| default.to_string())
        }

        // The path that was read wins over whatever the file says about itself
        layer.shift_remove(CONFIG_FILE);

        let infile = PathBuf::from(take(&mut layer, INFILE, DEFAULT_INPUT_FILE));
        let outfile = PathBuf::from(take(&mut layer, OUTFILE, DEFAULT_OUTPUT_FILE));
        let namespace = take(&mut layer, NAMESPACE, DEFAULT_NAMESPACE);

        let logic = take(&mut layer, LOGIC, Logic::default().as_str());
        let logic = logic
            .trim()
            .parse::<Logic>()
            .map_err(|_| Trace2DoxError::InvalidLogic { value: logic })?;

        let trace_id = layer
            .shift_remove(TRACE_ID)
            .filter(|trace_id| !trace_id.is_empty())
            .ok_or_else(|| Trace2DoxError::MissingTraceId {
                path: config_file.clone(),
            })?;
        let patterns = TracePatterns::new(&trace_id, &namespace)?;

        let filters = layer
            .shift_remove(FILTERS)
            .map(|list| Filters::parse(&list))
            .filter(|filters| !filters.is_empty());

        let settings = Self {
            infile,
            outfile,
            config_file,
            logic,
            patterns,
            filters,
            attributes: Attributes::new(layer),
        };
        log::debug!("{settings:?}");
        Ok(settings)
    }
}
