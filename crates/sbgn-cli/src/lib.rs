//! CLI logic for the SBGN-ML tool.
//!
//! Reads an SBGN-ML file, reports what it contains and writes it back out in
//! normalized form.

mod args;
mod config;
mod error;
pub mod error_adapter;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use sbgn::{Document, DocumentBuilder, Extensible};

/// Run the SBGN-ML CLI application
///
/// Parses the input file and writes its normalized serialization to the
/// output file, or to stdout when no output path is given.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed XML or a document that is not SBGN-ML
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DocumentBuilder::new(app_config);
    let doc = builder.parse(&source)?;
    log_summary(&doc);

    let mut xml = builder.write(&doc);
    xml.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, xml)?;
            info!(output_file = path; "Document written successfully");
        }
        None => io::stdout().lock().write_all(xml.as_bytes())?,
    }

    Ok(())
}

fn log_summary(doc: &Document) {
    let Some(map) = doc.map() else {
        info!(xmlns:? = doc.xmlns(); "Document has no map");
        return;
    };

    let extensions = map
        .extension()
        .map(|extension| {
            extension
                .iter()
                .map(|(name, _)| name)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    info!(
        map_id:? = map.id(),
        language:? = map.language(),
        glyphs = map.glyphs().len(),
        arcs = map.arcs().len(),
        ports = map.port_count(),
        extensions = extensions;
        "Document summary"
    );
}
