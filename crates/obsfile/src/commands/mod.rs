pub mod clean;
pub mod export;
pub mod summary;
pub mod validate;
pub mod version;

use obsfile_core::ValidationConfig;
use obsfile_io::{load_config, Paths};

/// Validation rules from the resolved config file, or defaults
pub(crate) fn validation_rules() -> anyhow::Result<ValidationConfig> {
    let paths = Paths::new()?;
    Ok(load_config(&paths)?.validation)
}
