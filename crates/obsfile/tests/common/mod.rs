use obsfile_core::ObservationDocument;
use std::path::PathBuf;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("observations.yml")
}

pub fn fixture_text() -> String {
    std::fs::read_to_string(fixture_path()).unwrap()
}

pub fn fixture() -> ObservationDocument {
    obsfile_io::load_document(&fixture_path()).unwrap()
}

/// Fixture text with the first line matching `needle` removed
pub fn fixture_without_line(needle: &str) -> String {
    let text = fixture_text();
    let mut removed = false;
    text.lines()
        .filter(|line| {
            if !removed && line.trim() == needle {
                removed = true;
                return false;
            }
            true
        })
        .collect::<Vec<_>>()
        .join("\n")
}
