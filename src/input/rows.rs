use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::input::REQUIRED_COLUMNS;
use crate::input::quoting::check_quoting;
use crate::model::Row;

/// Reads every data record of a CSV stream, in file order.
///
/// The header is checked up front so that a file with no data rows but a
/// broken header is still rejected. `path` is only used for error reporting.
pub fn read_rows<R: Read>(mut reader: R, path: &Path) -> Result<Vec<Row>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| classify_read_error(path, e))?;
    check_quoting(&data).map_err(|e| PipelineError::parse(path, Some(e.line), e.message))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(data.as_slice());

    let headers = csv_reader
        .headers()
        .map_err(|e| classify_csv_error(path, e))?
        .clone();
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == **col))
        .copied()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(PipelineError::parse(
            path,
            Some(1),
            format!("header is missing required columns: {}", missing.join(", ")),
        ));
    }
    let trimmed = headers.iter().map(str::trim).collect::<csv::StringRecord>();
    csv_reader.set_headers(trimmed);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<Row>() {
        rows.push(record.map_err(|e| classify_csv_error(path, e))?);
    }
    Ok(rows)
}

/// Decoder failures (corrupt gzip, invalid data) are input problems, not I/O.
fn classify_read_error(path: &Path, err: std::io::Error) -> PipelineError {
    match err.kind() {
        ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof => {
            PipelineError::parse(path, None, err.to_string())
        }
        _ => PipelineError::io(path, err),
    }
}

fn classify_csv_error(path: &Path, err: csv::Error) -> PipelineError {
    let line = err.position().map(|pos| pos.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PipelineError::io(path, source),
        _ => PipelineError::parse(path, line, message),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/rows.rs"]
mod tests;
