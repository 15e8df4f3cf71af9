//! Observation file model, parsing and validation for history matching

mod clean;
mod config;
mod document;
mod error;
mod key;
mod table;
mod types;
mod validate;

pub use clean::clean;
pub use config::{Config, ValidationConfig};
pub use document::ObservationDocument;
pub use error::{ObsError, ObsResult};
pub use key::{KeyCategory, SummaryKey};
pub use table::ObservationRow;
pub use types::{ObservationKind, RftObservation, RftSurvey, SummaryObservation, SummarySeries};
pub use validate::{validate, Issue, Severity, ValidationReport};
