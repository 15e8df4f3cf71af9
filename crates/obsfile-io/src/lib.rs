//! File I/O and config resolution for observation documents

mod io;
mod paths;

pub use io::{atomic_write, load_document, read_jsonl, save_document, write_jsonl, DocumentFormat};
pub use paths::{load_config, Paths, CONFIG_ENV, LOCAL_CONFIG};
