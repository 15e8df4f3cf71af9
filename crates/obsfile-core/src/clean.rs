//! Lenient loading: drop what cannot be used instead of rejecting the file

use tracing::warn;

use crate::config::ValidationConfig;
use crate::document::ObservationDocument;
use crate::types::{RftSurvey, SummarySeries};
use crate::validate::{
    rft_observation_errors, series_key_issue, summary_observation_errors, survey_well_issue,
    Issue, Severity,
};

/// Build a cleaned copy of `doc`.
///
/// Observations with observation-level errors are removed, series and
/// surveys with an unusable key or well are removed, and summary
/// observations are sorted by date keeping the first of any duplicate
/// date. Series left without observations are removed unless
/// `rules.allow_empty_series` is set and they were empty to begin with.
pub fn clean(
    doc: &ObservationDocument,
    rules: &ValidationConfig,
) -> (ObservationDocument, Vec<Issue>) {
    let mut dropped = Vec::new();

    let smry: Vec<SummarySeries> = doc
        .smry
        .iter()
        .enumerate()
        .filter_map(|(i, series)| {
            clean_series(series, &format!("smry[{i}]"), rules, &mut dropped)
        })
        .collect();

    let rft: Vec<RftSurvey> = doc
        .rft
        .iter()
        .enumerate()
        .filter_map(|(i, survey)| {
            clean_survey(survey, &format!("rft[{i}]"), rules, &mut dropped)
        })
        .collect();

    for issue in &dropped {
        warn!(location = %issue.location, "{}", issue.message);
    }

    (ObservationDocument { smry, rft }, dropped)
}

fn dropped_issue(loc: &str, reason: &str) -> Issue {
    Issue::new(Severity::Warning, loc, format!("dropped: {reason}"))
}

fn clean_series(
    series: &SummarySeries,
    loc: &str,
    rules: &ValidationConfig,
    out: &mut Vec<Issue>,
) -> Option<SummarySeries> {
    if let Some(issue) = series_key_issue(series, loc) {
        out.push(dropped_issue(loc, &issue.message));
        return None;
    }
    if series.observations.is_empty() {
        if rules.allow_empty_series {
            return Some(series.clone());
        }
        out.push(dropped_issue(loc, "no observations"));
        return None;
    }

    let mut kept = Vec::with_capacity(series.observations.len());
    for (j, obs) in series.observations.iter().enumerate() {
        let obs_loc = format!("{loc}.observations[{j}]");
        match summary_observation_errors(obs, &obs_loc).first() {
            Some(issue) => out.push(dropped_issue(&obs_loc, &issue.message)),
            None => kept.push((j, obs.clone())),
        }
    }

    // Stable sort keeps file order among equal dates
    kept.sort_by_key(|(_, obs)| obs.date);
    let mut observations = Vec::with_capacity(kept.len());
    let mut last_date = None;
    for (j, obs) in kept {
        if last_date == Some(obs.date) {
            out.push(dropped_issue(
                &format!("{loc}.observations[{j}]"),
                &format!("duplicate date {}", obs.date),
            ));
            continue;
        }
        last_date = Some(obs.date);
        observations.push(obs);
    }

    if observations.is_empty() {
        out.push(dropped_issue(loc, "no valid observations left"));
        return None;
    }

    Some(SummarySeries {
        observations,
        ..series.clone()
    })
}

fn clean_survey(
    survey: &RftSurvey,
    loc: &str,
    rules: &ValidationConfig,
    out: &mut Vec<Issue>,
) -> Option<RftSurvey> {
    if let Some(issue) = survey_well_issue(survey, loc) {
        out.push(dropped_issue(loc, &issue.message));
        return None;
    }
    if survey.observations.is_empty() {
        if rules.allow_empty_series {
            return Some(survey.clone());
        }
        out.push(dropped_issue(loc, "no observations"));
        return None;
    }

    let mut observations = Vec::with_capacity(survey.observations.len());
    for (j, obs) in survey.observations.iter().enumerate() {
        let obs_loc = format!("{loc}.observations[{j}]");
        match rft_observation_errors(obs, &obs_loc).first() {
            Some(issue) => out.push(dropped_issue(&obs_loc, &issue.message)),
            None => observations.push(obs.clone()),
        }
    }

    if observations.is_empty() {
        out.push(dropped_issue(loc, "no valid observations left"));
        return None;
    }

    Some(RftSurvey {
        observations,
        ..survey.clone()
    })
}
