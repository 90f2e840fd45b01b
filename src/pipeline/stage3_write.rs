use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::model::Prediction;

pub const OUTPUT_HEADER: &str = "pred";

/// Writes `pred` followed by one index per line. The file is staged next to
/// `path` and renamed into place, so a failed write leaves no partial output.
pub fn write_predictions(predictions: &[Prediction], path: &Path) -> Result<()> {
    let tmp_path = staging_path(path);
    if let Err(err) = write_csv(predictions, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        PipelineError::io(path, e)
    })?;
    info!(
        path = %path.display(),
        n_predictions = predictions.len(),
        "wrote predictions"
    );
    Ok(())
}

fn write_csv(predictions: &[Prediction], path: &Path) -> Result<()> {
    let io_err = |e: std::io::Error| PipelineError::io(path, e);
    let csv_err = |e: csv::Error| PipelineError::io(path, e.into());

    let file = File::create(path).map_err(io_err)?;
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    w.write_record([OUTPUT_HEADER]).map_err(csv_err)?;
    for prediction in predictions {
        w.write_record([prediction.pred.to_string()])
            .map_err(csv_err)?;
    }
    w.flush().map_err(io_err)?;
    let file = w
        .into_inner()
        .map_err(|e| io_err(std::io::Error::new(e.error().kind(), e.error().to_string())))?;
    file.sync_all().map_err(io_err)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("predictions"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_write.rs"]
mod tests;
