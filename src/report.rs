use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use strum::IntoStaticStr;

use crate::arguments::DuplicateHandling;
use crate::config::Value;
use crate::error::MatrixError;
use crate::int_matrix::IntMatrix;

#[derive(Debug, Clone, Copy, IntoStaticStr)]
pub enum TransformKind {
    SwapRows,
    SwapColumns,
    UpdateElement,
}

#[derive(Serialize)]
pub struct TransformRecord {
    transform: &'static str,
    arguments: Vec<i64>,
    result: Vec<Vec<Value>>,
}

impl TransformRecord {
    pub fn new(kind: TransformKind, arguments: Vec<i64>, result: &IntMatrix) -> TransformRecord {
        TransformRecord {
            transform: kind.into(),
            arguments,
            result: result.to_rows(),
        }
    }
}

/// Everything one run computed, in the order it happened.
#[derive(Serialize)]
pub struct RunReport<'a> {
    pub input: &'a str,
    pub size: usize,
    pub matrix_a: Vec<Vec<Value>>,
    pub matrix_b: Vec<Vec<Value>>,
    pub sum: Option<Vec<Vec<Value>>>,
    pub product: Option<Vec<Vec<Value>>>,
    pub main_diagonal_sum: Value,
    pub secondary_diagonal_sum: Value,
    pub transforms: Vec<TransformRecord>,
}

enum ReportAction {
    Continue,
    SkipReport,
}

pub fn save_report(
    report: &RunReport,
    path: &str,
    duplicate_handling: DuplicateHandling,
) -> Result<(), MatrixError> {
    let mut save_path = path.to_owned();
    match resolve_output_path(&mut save_path, duplicate_handling)? {
        ReportAction::Continue => (),
        ReportAction::SkipReport => return Ok(()),
    }

    let json = serde_json::to_string_pretty(report)?;
    eprintln!("Saving report to '{save_path}'");
    let mut file = open_output_file(&save_path, duplicate_handling)?;
    file.write_all(json.as_bytes())
        .map_err(|source| io_error(&save_path, source))
}

fn resolve_output_path(
    candidate_path: &mut String,
    duplicate_handling: DuplicateHandling,
) -> Result<ReportAction, MatrixError> {
    if Path::new(&candidate_path).exists() {
        eprint!("Existing report file '{candidate_path}' found, ");
        match duplicate_handling {
            DuplicateHandling::Fail => {
                eprintln!("terminating");
                return Err(io_error(
                    candidate_path,
                    std::io::Error::from(std::io::ErrorKind::AlreadyExists),
                ));
            }
            DuplicateHandling::Skip => {
                eprintln!("skipping");
                return Ok(ReportAction::SkipReport);
            }
            DuplicateHandling::SwitchName => {
                candidate_path.push_str(format!("{}", rand::random::<u32>()).as_str());
                eprintln!("will save the new report to '{candidate_path}'");
            }
            DuplicateHandling::Overwrite => eprintln!("overwriting"),
        };
    }
    Ok(ReportAction::Continue)
}

fn open_output_file(path: &str, duplicate_handling: DuplicateHandling) -> Result<File, MatrixError> {
    let mut openopts = OpenOptions::new();
    openopts.read(false).write(true);
    match duplicate_handling {
        DuplicateHandling::Overwrite => openopts.truncate(true).create(true),
        _ => openopts.create_new(true),
    };
    openopts.open(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &str, source: std::io::Error) -> MatrixError {
    MatrixError::Io {
        path: path.to_owned(),
        source,
    }
}
