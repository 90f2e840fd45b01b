use std::path::PathBuf;

use thiserror::Error;

/// Process exit status reported by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    /// Input or output file could not be opened, read or written.
    Io = 1,
    /// Bad command-line flags (clap's own exit code).
    Usage = 2,
    /// Input file is not well-formed.
    Data = 3,
}

impl From<ExitStatus> for u8 {
    fn from(status: ExitStatus) -> u8 {
        status as u8
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}{}: {message}", .path.display(), format_line(.line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, line: Option<u64>, message: impl Into<String>) -> Self {
        PipelineError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match self {
            PipelineError::Io { .. } => ExitStatus::Io,
            PipelineError::Parse { .. } => ExitStatus::Data,
        }
    }
}

fn format_line(line: &Option<u64>) -> String {
    match line {
        Some(n) => format!(" (line {n})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
