//! The mscgen document wrapped in a Doxygen comment block.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use minijinja::{Environment, context};

use crate::error::Trace2DoxError;

/// Edit this template for different colours, scaling etc.
const MSC_TEMPLATE: &str = "\n/**\n@msc\n\thscale = \"2\";\n    \n\t{{ entities }}\n    \n\
{% if messages %}\t{{ messages }}{% endif %}\n@endmsc\n*/\n";

/// Fill the template with rendered entities and messages.
///
/// Entities form one `,`-separated declaration ending in `;`. Every message
/// ends in `;` and a newline, and sits on its own tab-indented line.
pub fn render_document(
    entities: &[String],
    messages: &[String],
) -> Result<String, minijinja::Error> {
    let entities = format!("{};", entities.join(","));
    let messages: String = messages
        .iter()
        .map(|message| format!("{message};\n"))
        .collect::<Vec<_>>()
        .join("\t");

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.render_str(MSC_TEMPLATE, context! { entities, messages })
}

/// Create or truncate the output file and write the document to it.
pub fn write_document(path: &Path, document: &str) -> Result<(), Trace2DoxError> {
    let output_error = |e: std::io::Error| Trace2DoxError::OutputWrite {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut file = File::create(path).map_err(output_error)?;
    file.write_all(document.as_bytes()).map_err(output_error)?;
    file.flush().map_err(output_error)?;
    Ok(())
}
