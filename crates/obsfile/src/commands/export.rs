use std::path::Path;

use obsfile_core::ObservationDocument;
use obsfile_io::{atomic_write, load_document, write_jsonl, DocumentFormat};
use tracing::info;

use crate::cli::ExportFormat;

fn resolve_format(output: &Path, format: Option<ExportFormat>) -> anyhow::Result<ExportFormat> {
    if let Some(format) = format {
        return Ok(format);
    }
    Ok(match DocumentFormat::from_path(output)? {
        DocumentFormat::Yaml => ExportFormat::Yaml,
        DocumentFormat::Json => ExportFormat::Json,
        DocumentFormat::Jsonl => ExportFormat::Jsonl,
    })
}

fn export(doc: &ObservationDocument, output: &Path, format: ExportFormat) -> anyhow::Result<()> {
    match format {
        ExportFormat::Yaml => atomic_write(output, doc.to_yaml_string()?.as_bytes())?,
        ExportFormat::Json => atomic_write(output, doc.to_json_string()?.as_bytes())?,
        ExportFormat::Jsonl => {
            doc.ensure_finite("JSONL")?;
            write_jsonl(output, &doc.to_rows())?
        }
    }
    Ok(())
}

pub fn run(input: &Path, output: &Path, format: Option<ExportFormat>) -> anyhow::Result<()> {
    let doc = load_document(input)?;
    let format = resolve_format(output, format)?;
    export(&doc, output, format)?;
    info!(output = %output.display(), ?format, "exported observation file");
    Ok(())
}
