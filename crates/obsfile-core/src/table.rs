//! Flat, one-row-per-observation view of a document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::ObservationDocument;
use crate::types::ObservationKind;

/// One observation with its series context folded in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    pub kind: ObservationKind,
    /// Summary key for `smry` rows, well name for `rft` rows
    pub key: String,
    pub date: NaiveDate,
    pub value: f64,
    pub error: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(rename = "MDmsl", default, skip_serializing_if = "Option::is_none")]
    pub md_msl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ObservationDocument {
    /// All summary rows in file order, followed by all RFT rows
    pub fn to_rows(&self) -> Vec<ObservationRow> {
        let smry = self.smry.iter().flat_map(|series| {
            series.observations.iter().map(move |obs| ObservationRow {
                kind: ObservationKind::Summary,
                key: series.key.clone(),
                date: obs.date,
                value: obs.value,
                error: obs.error,
                zone: None,
                md_msl: None,
                x: None,
                y: None,
                z: None,
                comment: obs.comment.clone(),
            })
        });

        let rft = self.rft.iter().flat_map(|survey| {
            survey.observations.iter().map(move |obs| ObservationRow {
                kind: ObservationKind::Rft,
                key: survey.well.clone(),
                date: survey.date,
                value: obs.value,
                error: obs.error,
                zone: Some(obs.zone.clone()),
                md_msl: Some(obs.md_msl),
                x: Some(obs.x),
                y: Some(obs.y),
                z: Some(obs.z),
                comment: obs.comment.clone(),
            })
        });

        smry.chain(rft).collect()
    }
}
