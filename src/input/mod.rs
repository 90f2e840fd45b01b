use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{PipelineError, Result};

pub mod quoting;
pub mod rows;

pub use rows::read_rows;

/// Columns every input file must declare. `label` is optional.
pub const REQUIRED_COLUMNS: [&str; 5] = ["startphrase", "ending0", "ending1", "ending2", "ending3"];

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}
