use std::path::Path;

use obsfile_core::{ObservationDocument, SummaryKey};
use obsfile_io::load_document;

fn build_summary(doc: &ObservationDocument, json_mode: bool) -> String {
    if json_mode {
        let smry: Vec<_> = doc
            .smry
            .iter()
            .map(|s| {
                let span = s.date_span();
                let key = SummaryKey::parse(&s.key).ok();
                serde_json::json!({
                    "key": s.key,
                    "category": key.as_ref().map(|k| k.category()),
                    "well": key.as_ref().and_then(|k| k.well()),
                    "observations": s.observations.len(),
                    "first": span.map(|(first, _)| first),
                    "last": span.map(|(_, last)| last),
                })
            })
            .collect();
        let rft: Vec<_> = doc
            .rft
            .iter()
            .map(|r| {
                serde_json::json!({
                    "well": r.well,
                    "date": r.date,
                    "observations": r.observations.len(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "smry": smry,
            "rft": rft,
            "total": doc.observation_count(),
        });
        return serde_json::to_string_pretty(&output).unwrap_or_default();
    }

    let mut sections = Vec::new();

    sections.push("Summary observations\n--------------------".to_string());
    for series in &doc.smry {
        let span = match series.date_span() {
            Some((first, last)) => format!("{first} .. {last}"),
            None => "-".to_string(),
        };
        sections.push(format!(
            "  {:<20} {:>4}  {}",
            series.key,
            series.observations.len(),
            span
        ));
    }

    sections.push("\nRFT surveys\n-----------".to_string());
    for survey in &doc.rft {
        sections.push(format!(
            "  {:<20} {}  {:>4}",
            survey.well,
            survey.date,
            survey.observations.len()
        ));
    }

    let range = match doc.date_range() {
        Some((first, last)) => format!(" between {first} and {last}"),
        None => String::new(),
    };
    sections.push(format!(
        "\n{} observations{}",
        doc.observation_count(),
        range
    ));

    sections.join("\n")
}

pub fn run(path: &Path, json_mode: bool) -> anyhow::Result<()> {
    let doc = load_document(path)?;
    println!("{}", build_summary(&doc, json_mode));
    Ok(())
}
