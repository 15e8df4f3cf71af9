//! Observation document types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated measurement of a summary vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryObservation {
    pub value: f64,
    /// Measurement uncertainty, same units as `value`
    pub error: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// All observations of one summary vector, e.g. `WOPR:OP_1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySeries {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub observations: Vec<SummaryObservation>,
}

impl SummarySeries {
    /// Observation dates in file order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Earliest and latest observation date
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.observations.iter().map(|o| o.date).min()?;
        let last = self.observations.iter().map(|o| o.date).max()?;
        Some((first, last))
    }
}

/// One pressure point of an RFT survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RftObservation {
    pub value: f64,
    pub error: f64,
    /// Geological zone label
    pub zone: String,
    /// Measured depth below mean sea level
    #[serde(rename = "MDmsl")]
    pub md_msl: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An RFT survey of one well at one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RftSurvey {
    pub well: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Relative path the simulator writes comparison output to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_output: Option<String>,
    pub observations: Vec<RftObservation>,
}

/// Series flavour, used when reporting and flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationKind {
    #[serde(rename = "smry")]
    Summary,
    #[serde(rename = "rft")]
    Rft,
}

impl std::fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObservationKind::Summary => write!(f, "smry"),
            ObservationKind::Rft => write!(f, "rft"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rft_observation_uses_mdmsl_name() {
        let obs = RftObservation {
            value: 304.0,
            error: 3.0,
            zone: "Below_TopReek".to_string(),
            md_msl: 2363.0,
            x: 462608.57,
            y: 5934210.96,
            z: 1624.38,
            comment: None,
        };

        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["MDmsl"], 2363.0);
        assert!(json.get("md_msl").is_none());
        assert!(json.get("comment").is_none());
    }

    #[test]
    fn test_summary_observation_comment_optional() {
        let json = r#"{"value": 250, "error": 5, "date": "2001-01-01"}"#;
        let obs: SummaryObservation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.value, 250.0);
        assert_eq!(obs.date, date(2001, 1, 1));
        assert_eq!(obs.comment, None);
    }

    #[test]
    fn test_date_span() {
        let series = SummarySeries {
            key: "FOPT".to_string(),
            comment: None,
            observations: vec![
                SummaryObservation {
                    value: 1.0,
                    error: 0.1,
                    date: date(2002, 1, 1),
                    comment: None,
                },
                SummaryObservation {
                    value: 2.0,
                    error: 0.1,
                    date: date(2001, 1, 1),
                    comment: None,
                },
            ],
        };
        assert_eq!(series.date_span(), Some((date(2001, 1, 1), date(2002, 1, 1))));
        assert_eq!(series.dates(), vec![date(2002, 1, 1), date(2001, 1, 1)]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ObservationKind::Summary.to_string(), "smry");
        assert_eq!(ObservationKind::Rft.to_string(), "rft");
    }
}
