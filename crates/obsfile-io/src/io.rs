//! Document loading/saving, JSONL export and atomic file operations

use obsfile_core::{ObsError, ObsResult, ObservationDocument};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

/// On-disk representation, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Jsonl,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> ObsResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("jsonl") => Ok(Self::Jsonl),
            _ => Err(ObsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Read and parse an observation file (`.yml`, `.yaml` or `.json`)
pub fn load_document(path: &Path) -> ObsResult<ObservationDocument> {
    let format = DocumentFormat::from_path(path)?;
    let parse: fn(&str) -> ObsResult<ObservationDocument> = match format {
        DocumentFormat::Yaml => ObservationDocument::from_yaml_str,
        DocumentFormat::Json => ObservationDocument::from_json_str,
        DocumentFormat::Jsonl => {
            return Err(ObsError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ObsError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ObsError::Io(e)
        }
    })?;

    debug!(path = %path.display(), ?format, "loading observation document");
    parse(&content)
}

/// Serialize a document by extension and write it atomically
pub fn save_document(path: &Path, doc: &ObservationDocument) -> ObsResult<()> {
    let text = match DocumentFormat::from_path(path)? {
        DocumentFormat::Yaml => doc.to_yaml_string()?,
        DocumentFormat::Json => doc.to_json_string()?,
        DocumentFormat::Jsonl => {
            return Err(ObsError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };
    atomic_write(path, text.as_bytes())?;
    debug!(path = %path.display(), "saved observation document");
    Ok(())
}

/// Write records as JSON Lines, replacing any existing file
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> std::io::Result<()> {
    let mut buf = Vec::new();
    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(buf, "{}", json)?;
    }
    atomic_write(path, &buf)
}

/// Read all records from a JSONL file
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => warn!(line = n + 1, error = %e, "skipping malformed JSONL line"),
        }
    }

    Ok(records)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // `out.yml` -> `out.yml.tmp`, so sibling targets never share a temp file
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}
