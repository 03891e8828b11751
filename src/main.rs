mod arguments;
mod config;
mod error;
mod int_matrix;
mod matrix;
mod matrix_pair;
mod report;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use crate::arguments::Args;
use crate::config::Value;
use crate::error::MatrixError;
use crate::int_matrix::IntMatrix;
use crate::matrix_pair::MatrixPair;
use crate::report::{RunReport, TransformKind, TransformRecord};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), MatrixError> {
    let pair = if let Some(size) = args.random {
        MatrixPair::random(size, args.seed.unwrap_or_else(rand::random))
    } else {
        // clap guarantees the file is present when --random is absent
        MatrixPair::from_file(args.file.as_deref().unwrap_or_default())?
    };
    let (a, b) = (pair.a(), pair.b());

    println!("Matrix A:");
    print!("{a}");
    println!("\nMatrix B:");
    print!("{b}");

    let sum = match a.add(b) {
        Ok(sum) => {
            println!("\nA + B:");
            print!("{sum}");
            Some(sum)
        }
        Err(error) => {
            eprintln!("Addition error: {error}");
            None
        }
    };

    let product = match a.multiply(b) {
        Ok(product) => {
            println!("\nA * B:");
            print!("{product}");
            Some(product)
        }
        Err(error) => {
            eprintln!("Multiplication error: {error}");
            None
        }
    };

    println!("\nDiagonal sums for matrix A:");
    println!("Main diagonal sum:      {}", a.sum_main_diagonal());
    println!("Secondary diagonal sum: {}", a.sum_secondary_diagonal());

    let (r1, r2) = index_pair(
        args.swap_rows,
        "\nEnter two row indices to swap (0-based, default 0 1): ",
        "row",
        config::DEFAULT_SWAP_ROWS,
    );
    let rows_swapped = a.with_swapped_rows(utils::to_index(r1), utils::to_index(r2));
    println!("\nMatrix A with rows {r1} and {r2} swapped:");
    print!("{rows_swapped}");

    let (c1, c2) = index_pair(
        args.swap_columns,
        "\nEnter two column indices to swap (0-based, default 0 1): ",
        "column",
        config::DEFAULT_SWAP_COLUMNS,
    );
    let columns_swapped = a.with_swapped_columns(utils::to_index(c1), utils::to_index(c2));
    println!("\nMatrix A with columns {c1} and {c2} swapped:");
    print!("{columns_swapped}");

    let (row, col, value) = update_args(
        args.update,
        "\nEnter row, column, and new value to update (default 0 0 100): ",
    );
    let updated = a.with_updated_element(utils::to_index(row), utils::to_index(col), value);
    println!("\nMatrix A after update at ({row}, {col}) = {value}:");
    print!("{updated}");

    println!("\nOriginal matrix A (unchanged):");
    print!("{a}");

    if let Some(path) = args.report_file.as_deref() {
        let report = RunReport {
            input: pair.name(),
            size: pair.size(),
            matrix_a: a.to_rows(),
            matrix_b: b.to_rows(),
            sum: sum.as_ref().map(IntMatrix::to_rows),
            product: product.as_ref().map(IntMatrix::to_rows),
            main_diagonal_sum: a.sum_main_diagonal(),
            secondary_diagonal_sum: a.sum_secondary_diagonal(),
            transforms: vec![
                TransformRecord::new(TransformKind::SwapRows, vec![r1, r2], &rows_swapped),
                TransformRecord::new(TransformKind::SwapColumns, vec![c1, c2], &columns_swapped),
                TransformRecord::new(
                    TransformKind::UpdateElement,
                    vec![row, col, i64::from(value)],
                    &updated,
                ),
            ],
        };
        report::save_report(&report, path, args.dup)?;
    }

    Ok(())
}

/// Two indices from the flag, from a prompt, or the documented defaults.
fn index_pair(
    flag: Option<Vec<i64>>,
    prompt: &str,
    label: &str,
    default: (i64, i64),
) -> (i64, i64) {
    flag.map(|values| (values[0], values[1]))
        .or_else(|| utils::prompt_index_pair(prompt))
        .unwrap_or_else(|| {
            println!("Using default {label} indices {} and {}.", default.0, default.1);
            default
        })
}

/// The update row/column/value triple, with the same fallback chain.
fn update_args(flag: Option<Vec<i64>>, prompt: &str) -> (i64, i64, Value) {
    flag.map(|values| (values[0], values[1], values[2] as Value))
        .or_else(|| utils::prompt_update_triple(prompt))
        .unwrap_or_else(|| {
            let (row, col) = config::DEFAULT_UPDATE_POSITION;
            println!(
                "Using default (row={row}, col={col}, value={}).",
                config::DEFAULT_UPDATE_VALUE
            );
            (row, col, config::DEFAULT_UPDATE_VALUE)
        })
}
