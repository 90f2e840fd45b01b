use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::input::{open_maybe_gz, read_rows};
use crate::model::Row;

pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    debug!(path = %path.display(), "opening input");
    let reader = open_maybe_gz(path)?;
    let rows = read_rows(reader, path)?;
    info!(path = %path.display(), n_rows = rows.len(), "loaded input rows");
    if let Some(first) = rows.first() {
        debug!(startphrase = %first.start_phrase, "first row");
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
