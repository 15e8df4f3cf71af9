use std::path::Path;

use obsfile_core::{clean, ValidationConfig};
use obsfile_io::{load_document, save_document};
use tracing::info;

fn clean_file(input: &Path, output: &Path, rules: &ValidationConfig) -> anyhow::Result<usize> {
    let doc = load_document(input)?;
    let (cleaned, dropped) = clean(&doc, rules);
    save_document(output, &cleaned)?;
    Ok(dropped.len())
}

pub fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    let rules = super::validation_rules()?;
    let dropped = clean_file(input, output, &rules)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        dropped,
        "wrote cleaned observation file"
    );
    println!("{} item(s) dropped, wrote {}", dropped, output.display());
    Ok(())
}
