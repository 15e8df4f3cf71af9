use std::path::Path;

use obsfile_core::{validate, ObservationDocument, ValidationConfig, ValidationReport};
use obsfile_io::load_document;
use tracing::info;

fn render(report: &ValidationReport, doc: &ObservationDocument, json_mode: bool) -> String {
    if json_mode {
        let output = serde_json::json!({
            "valid": report.is_valid(),
            "series": doc.smry.len(),
            "surveys": doc.rft.len(),
            "observations": doc.observation_count(),
            "issues": report.issues,
        });
        return serde_json::to_string_pretty(&output).unwrap_or_default();
    }

    let mut lines: Vec<String> = report.issues.iter().map(|i| i.to_string()).collect();
    lines.push(format!(
        "{} series, {} RFT surveys, {} observations: {} errors, {} warnings",
        doc.smry.len(),
        doc.rft.len(),
        doc.observation_count(),
        report.errors().count(),
        report.warnings().count(),
    ));
    lines.join("\n")
}

fn check(path: &Path, rules: &ValidationConfig, json_mode: bool) -> anyhow::Result<(bool, String)> {
    let doc = load_document(path)?;
    let report = validate(&doc, rules);
    Ok((report.is_valid(), render(&report, &doc, json_mode)))
}

pub fn run(path: &Path, json_mode: bool, lenient_dates: bool) -> anyhow::Result<()> {
    let mut rules = super::validation_rules()?;
    if lenient_dates {
        rules = rules.lenient_dates();
    }

    let (valid, output) = check(path, &rules, json_mode)?;
    println!("{output}");

    if !valid {
        anyhow::bail!("{} is not a valid observation file", path.display());
    }
    info!(path = %path.display(), "observation file is valid");
    Ok(())
}
