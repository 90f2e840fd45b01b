use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;
use crate::error::PipelineError;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("swag_load_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const SAMPLE: &str = "startphrase,ending0,ending1,ending2,ending3,label\n\
                      He opens the door.,walks in,leaves,sits,waves goodbye,0\n";

#[test]
fn test_load_plain_csv() {
    let dir = make_temp_dir();
    let path = dir.join("swag.csv");
    fs::write(&path, SAMPLE).unwrap();

    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ending3, "waves goodbye");
}

#[test]
fn test_load_gzipped_csv() {
    let dir = make_temp_dir();
    let path = dir.join("swag.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(SAMPLE.as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].start_phrase, "He opens the door.");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_rows(&dir.join("absent.csv")).unwrap_err();
    assert!(matches!(err, PipelineError::Io { .. }));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("bad.csv");
    fs::write(
        &path,
        "startphrase,ending0,ending1,ending2,ending3\nx,y,z\n",
    )
    .unwrap();
    let err = load_rows(&path).unwrap_err();
    assert!(matches!(err, PipelineError::Parse { .. }));
}

#[test]
fn test_corrupt_gzip_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("swag.csv.gz");
    fs::write(&path, SAMPLE).unwrap();

    let err = load_rows(&path).unwrap_err();
    assert!(matches!(err, PipelineError::Parse { .. }), "{err:?}");
    assert_eq!(u8::from(err.exit_status()), 3);
}
