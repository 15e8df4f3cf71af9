//! Semantic validation of parsed observation documents
//!
//! Parsing already guarantees that mandatory fields exist and that values,
//! errors and dates have the right shape. The rules here cover what the
//! schema cannot express: non-negative errors, finite numbers, well-formed
//! summary keys and date ordering within a series.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::config::ValidationConfig;
use crate::document::ObservationDocument;
use crate::error::{ObsError, ObsResult};
use crate::key::SummaryKey;
use crate::types::{RftObservation, RftSurvey, SummaryObservation, SummarySeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding, located by a path like `smry[0].observations[2]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl Issue {
    pub fn new(severity: Severity, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERR ",
            Severity::Warning => "WARN",
        };
        write!(f, "{} {}: {}", tag, self.location, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(Issue::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// `Ok(warnings)` when valid, `ObsError::Invalid` otherwise
    pub fn into_result(self) -> ObsResult<Vec<Issue>> {
        let (errors, warnings): (Vec<Issue>, Vec<Issue>) =
            self.issues.into_iter().partition(Issue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ObsError::Invalid { errors })
        }
    }
}

pub fn validate(doc: &ObservationDocument, rules: &ValidationConfig) -> ValidationReport {
    let mut issues = Vec::new();

    let mut seen_keys = HashSet::new();
    for (i, series) in doc.smry.iter().enumerate() {
        let loc = format!("smry[{i}]");
        if !seen_keys.insert(series.key.as_str()) {
            issues.push(Issue::new(
                Severity::Warning,
                &loc,
                format!("duplicate summary key {}", series.key),
            ));
        }
        check_series(series, &loc, rules, &mut issues);
    }

    let mut seen_surveys = HashSet::new();
    for (i, survey) in doc.rft.iter().enumerate() {
        let loc = format!("rft[{i}]");
        if !seen_surveys.insert((survey.well.as_str(), survey.date)) {
            issues.push(Issue::new(
                Severity::Warning,
                &loc,
                format!("duplicate RFT survey for {} at {}", survey.well, survey.date),
            ));
        }
        check_survey(survey, &loc, rules, &mut issues);
    }

    tracing::debug!(issues = issues.len(), "validated observation document");
    ValidationReport { issues }
}

pub(crate) fn series_key_issue(series: &SummarySeries, loc: &str) -> Option<Issue> {
    SummaryKey::parse(&series.key)
        .err()
        .map(|e| Issue::new(Severity::Error, loc, e.to_string()))
}

pub(crate) fn survey_well_issue(survey: &RftSurvey, loc: &str) -> Option<Issue> {
    if survey.well.trim().is_empty() {
        return Some(Issue::new(Severity::Error, loc, "well name is empty"));
    }
    None
}

/// Observation-level errors for a summary record
pub(crate) fn summary_observation_errors(obs: &SummaryObservation, loc: &str) -> Vec<Issue> {
    value_error_issues(obs.value, obs.error, loc)
}

/// Observation-level errors for an RFT record
pub(crate) fn rft_observation_errors(obs: &RftObservation, loc: &str) -> Vec<Issue> {
    let mut issues = value_error_issues(obs.value, obs.error, loc);
    if obs.zone.trim().is_empty() {
        issues.push(Issue::new(Severity::Error, loc, "zone is empty"));
    }
    for (name, v) in [("MDmsl", obs.md_msl), ("x", obs.x), ("y", obs.y), ("z", obs.z)] {
        if !v.is_finite() {
            issues.push(Issue::new(
                Severity::Error,
                loc,
                format!("{name} is not a finite number ({v})"),
            ));
        }
    }
    issues
}

fn value_error_issues(value: f64, error: f64, loc: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if !value.is_finite() {
        issues.push(Issue::new(
            Severity::Error,
            loc,
            format!("value is not a finite number ({value})"),
        ));
    }
    if !error.is_finite() {
        issues.push(Issue::new(
            Severity::Error,
            loc,
            format!("error is not a finite number ({error})"),
        ));
    } else if error < 0.0 {
        issues.push(Issue::new(
            Severity::Error,
            loc,
            format!("error must be non-negative, got {error}"),
        ));
    }
    issues
}

fn zero_error_issue(error: f64, loc: &str, rules: &ValidationConfig) -> Option<Issue> {
    (rules.warn_zero_error && error == 0.0)
        .then(|| Issue::new(Severity::Warning, loc, "error is zero"))
}

fn empty_issue(loc: &str, rules: &ValidationConfig) -> Issue {
    let severity = if rules.allow_empty_series {
        Severity::Warning
    } else {
        Severity::Error
    };
    Issue::new(severity, loc, "no observations")
}

fn check_series(
    series: &SummarySeries,
    loc: &str,
    rules: &ValidationConfig,
    issues: &mut Vec<Issue>,
) {
    issues.extend(series_key_issue(series, loc));

    if series.observations.is_empty() {
        issues.push(empty_issue(loc, rules));
        return;
    }

    let order_severity = if rules.require_increasing_dates {
        Severity::Error
    } else {
        Severity::Warning
    };

    for (j, obs) in series.observations.iter().enumerate() {
        let obs_loc = format!("{loc}.observations[{j}]");
        issues.extend(summary_observation_errors(obs, &obs_loc));
        issues.extend(zero_error_issue(obs.error, &obs_loc, rules));

        if j > 0 {
            let prev = series.observations[j - 1].date;
            if obs.date == prev {
                issues.push(Issue::new(
                    order_severity,
                    &obs_loc,
                    format!("duplicate date {}", obs.date),
                ));
            } else if obs.date < prev {
                issues.push(Issue::new(
                    order_severity,
                    &obs_loc,
                    format!("date {} is before preceding date {}", obs.date, prev),
                ));
            }
        }
    }
}

fn check_survey(survey: &RftSurvey, loc: &str, rules: &ValidationConfig, issues: &mut Vec<Issue>) {
    issues.extend(survey_well_issue(survey, loc));

    if let Some(output) = &survey.simulation_output {
        if std::path::Path::new(output).is_absolute() {
            issues.push(Issue::new(
                Severity::Error,
                loc,
                format!("simulation_output must be a relative path, got {output}"),
            ));
        }
    }

    if survey.observations.is_empty() {
        issues.push(empty_issue(loc, rules));
        return;
    }

    for (j, obs) in survey.observations.iter().enumerate() {
        let obs_loc = format!("{loc}.observations[{j}]");
        issues.extend(rft_observation_errors(obs, &obs_loc));
        issues.extend(zero_error_issue(obs.error, &obs_loc, rules));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn smry_obs(value: f64, error: f64, d: NaiveDate) -> SummaryObservation {
        SummaryObservation {
            value,
            error,
            date: d,
            comment: None,
        }
    }

    fn rft_obs(error: f64, zone: &str) -> RftObservation {
        RftObservation {
            value: 300.0,
            error,
            zone: zone.to_string(),
            md_msl: 2363.0,
            x: 462608.57,
            y: 5934210.96,
            z: 1624.38,
            comment: None,
        }
    }

    fn doc_with_series(key: &str, observations: Vec<SummaryObservation>) -> ObservationDocument {
        ObservationDocument {
            smry: vec![SummarySeries {
                key: key.to_string(),
                comment: None,
                observations,
            }],
            rft: vec![],
        }
    }

    #[test]
    fn test_valid_document() {
        let doc = doc_with_series(
            "WOPR:OP_1",
            vec![
                smry_obs(100.0, 10.0, date(2001, 1, 1)),
                smry_obs(110.0, 10.0, date(2002, 1, 1)),
            ],
        );
        let report = validate(&doc, &ValidationConfig::default());
        assert!(report.is_valid());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_negative_error_rejected() {
        let doc = doc_with_series("FOPT", vec![smry_obs(1.0, -0.5, date(2001, 1, 1))]);
        let report = validate(&doc, &ValidationConfig::default());
        assert!(!report.is_valid());
        let err = report.errors().next().unwrap();
        assert_eq!(err.location, "smry[0].observations[0]");
        assert!(err.message.contains("non-negative"));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let doc = doc_with_series("FOPT", vec![smry_obs(f64::NAN, 1.0, date(2001, 1, 1))]);
        assert!(!validate(&doc, &ValidationConfig::default()).is_valid());
    }

    #[test]
    fn test_decreasing_dates() {
        let doc = doc_with_series(
            "WWCT:OP_1",
            vec![
                smry_obs(0.1, 0.01, date(2002, 1, 1)),
                smry_obs(0.2, 0.01, date(2001, 1, 1)),
                smry_obs(0.3, 0.01, date(2001, 1, 1)),
            ],
        );

        let strict = validate(&doc, &ValidationConfig::default());
        assert_eq!(strict.errors().count(), 2);

        let lenient = validate(&doc, &ValidationConfig::default().lenient_dates());
        assert!(lenient.is_valid());
        assert_eq!(lenient.warnings().count(), 2);
    }

    #[test]
    fn test_bad_key_is_error() {
        let doc = doc_with_series("wopr op1", vec![smry_obs(1.0, 0.1, date(2001, 1, 1))]);
        let report = validate(&doc, &ValidationConfig::default());
        assert_eq!(report.errors().next().unwrap().location, "smry[0]");
    }

    #[test]
    fn test_zero_error_warning() {
        let doc = doc_with_series("FOPT", vec![smry_obs(1.0, 0.0, date(2001, 1, 1))]);
        let report = validate(&doc, &ValidationConfig::default());
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);

        let rules = ValidationConfig {
            warn_zero_error: false,
            ..ValidationConfig::default()
        };
        assert!(validate(&doc, &rules).issues.is_empty());
    }

    #[test]
    fn test_empty_series() {
        let doc = doc_with_series("FOPT", vec![]);
        assert!(validate(&doc, &ValidationConfig::default()).is_valid());

        let rules = ValidationConfig {
            allow_empty_series: false,
            ..ValidationConfig::default()
        };
        assert!(!validate(&doc, &rules).is_valid());
    }

    #[test]
    fn test_duplicate_keys_and_surveys_warn() {
        let mut doc = doc_with_series("FOPT", vec![smry_obs(1.0, 0.1, date(2001, 1, 1))]);
        doc.smry.push(doc.smry[0].clone());
        let survey = RftSurvey {
            well: "OP_1".to_string(),
            date: date(2001, 9, 10),
            comment: None,
            simulation_output: None,
            observations: vec![rft_obs(3.0, "Below_TopReek")],
        };
        doc.rft = vec![survey.clone(), survey];

        let report = validate(&doc, &ValidationConfig::default());
        assert!(report.is_valid());
        let messages: Vec<_> = report.warnings().map(|i| i.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("duplicate summary key")));
        assert!(messages.iter().any(|m| m.contains("duplicate RFT survey")));
    }

    #[test]
    fn test_rft_rules() {
        let doc = ObservationDocument {
            smry: vec![],
            rft: vec![RftSurvey {
                well: " ".to_string(),
                date: date(2001, 9, 10),
                comment: None,
                simulation_output: Some("/abs/path.txt".to_string()),
                observations: vec![
                    rft_obs(-1.0, "Zone"),
                    rft_obs(3.0, ""),
                    RftObservation {
                        z: f64::INFINITY,
                        ..rft_obs(3.0, "Zone")
                    },
                ],
            }],
        };

        let report = validate(&doc, &ValidationConfig::default());
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.message.contains("well name")));
        assert!(errors.iter().any(|e| e.message.contains("relative path")));
        assert!(errors.iter().any(|e| e.message.contains("zone")));
        assert!(errors
            .iter()
            .any(|e| e.location == "rft[0].observations[2]" && e.message.starts_with("z ")));
    }

    #[test]
    fn test_into_result() {
        let doc = doc_with_series("FOPT", vec![smry_obs(1.0, 0.0, date(2001, 1, 1))]);
        let warnings = validate(&doc, &ValidationConfig::default())
            .into_result()
            .unwrap();
        assert_eq!(warnings.len(), 1);

        let bad = doc_with_series("FOPT", vec![smry_obs(1.0, -1.0, date(2001, 1, 1))]);
        let err = validate(&bad, &ValidationConfig::default())
            .into_result()
            .unwrap_err();
        assert!(matches!(err, ObsError::Invalid { ref errors } if errors.len() == 1));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(Severity::Warning, "rft[0]", "no observations");
        assert_eq!(issue.to_string(), "WARN rft[0]: no observations");
    }
}
