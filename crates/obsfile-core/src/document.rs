//! The observation document: `smry` and `rft` collections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ObsError, ObsResult};
use crate::types::{RftSurvey, SummarySeries};

/// A complete observation file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationDocument {
    /// Summary vector series
    pub smry: Vec<SummarySeries>,
    /// RFT well surveys
    pub rft: Vec<RftSurvey>,
}

impl ObservationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(text: &str) -> ObsResult<Self> {
        let doc: Self = serde_yaml::from_str(text).map_err(|e| ObsError::Parse {
            format: "YAML",
            detail: e.to_string(),
        })?;
        debug!(
            series = doc.smry.len(),
            surveys = doc.rft.len(),
            "parsed YAML observation document"
        );
        Ok(doc)
    }

    pub fn from_json_str(text: &str) -> ObsResult<Self> {
        let doc: Self = serde_json::from_str(text).map_err(|e| ObsError::Parse {
            format: "JSON",
            detail: e.to_string(),
        })?;
        debug!(
            series = doc.smry.len(),
            surveys = doc.rft.len(),
            "parsed JSON observation document"
        );
        Ok(doc)
    }

    pub fn to_yaml_string(&self) -> ObsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> ObsResult<String> {
        self.ensure_finite("JSON")?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fails on the first NaN or infinite number. serde_json writes those
    /// as `null`, which no longer parses as a number.
    pub fn ensure_finite(&self, format: &'static str) -> ObsResult<()> {
        let non_finite = |location: String, field: &'static str, value: f64| ObsError::NonFinite {
            format,
            location,
            field,
            value,
        };

        for (i, series) in self.smry.iter().enumerate() {
            for (j, obs) in series.observations.iter().enumerate() {
                for (field, value) in [("value", obs.value), ("error", obs.error)] {
                    if !value.is_finite() {
                        let loc = format!("smry[{i}].observations[{j}]");
                        return Err(non_finite(loc, field, value));
                    }
                }
            }
        }

        for (i, survey) in self.rft.iter().enumerate() {
            for (j, obs) in survey.observations.iter().enumerate() {
                let fields = [
                    ("value", obs.value),
                    ("error", obs.error),
                    ("MDmsl", obs.md_msl),
                    ("x", obs.x),
                    ("y", obs.y),
                    ("z", obs.z),
                ];
                for (field, value) in fields {
                    if !value.is_finite() {
                        let loc = format!("rft[{i}].observations[{j}]");
                        return Err(non_finite(loc, field, value));
                    }
                }
            }
        }

        Ok(())
    }

    /// Summary keys in file order
    pub fn smry_keys(&self) -> Vec<&str> {
        self.smry.iter().map(|s| s.key.as_str()).collect()
    }

    /// Distinct RFT wells in first-seen order
    pub fn wells(&self) -> Vec<&str> {
        let mut wells: Vec<&str> = Vec::new();
        for survey in &self.rft {
            if !wells.contains(&survey.well.as_str()) {
                wells.push(survey.well.as_str());
            }
        }
        wells
    }

    /// First series with the given key
    pub fn summary(&self, key: &str) -> Option<&SummarySeries> {
        self.smry.iter().find(|s| s.key == key)
    }

    pub fn rft(&self, well: &str, date: NaiveDate) -> Option<&RftSurvey> {
        self.rft.iter().find(|r| r.well == well && r.date == date)
    }

    pub fn rft_for_well<'a>(&'a self, well: &'a str) -> impl Iterator<Item = &'a RftSurvey> + 'a {
        self.rft.iter().filter(move |r| r.well == well)
    }

    /// Number of individual observations across both collections
    pub fn observation_count(&self) -> usize {
        let smry: usize = self.smry.iter().map(|s| s.observations.len()).sum();
        let rft: usize = self.rft.iter().map(|r| r.observations.len()).sum();
        smry + rft
    }

    pub fn is_empty(&self) -> bool {
        self.observation_count() == 0
    }

    /// Earliest and latest date over all summary observations and RFT surveys
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self
            .smry
            .iter()
            .flat_map(|s| s.observations.iter().map(|o| o.date))
            .chain(self.rft.iter().map(|r| r.date));

        dates.fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }
}
