use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicateHandling {
    /// Refuse to touch an existing report file and exit with an error.
    Fail,
    /// Keep the old file (the report is not written).
    Skip,
    /// Use a different name (append a number) for the new report file.
    SwitchName,
    /// Overwrite the old file.
    Overwrite,
}

#[derive(Parser, Debug)]
pub struct Args {
    /// Data file holding N followed by two N x N integer matrices.
    #[arg(required_unless_present = "random")]
    pub file: Option<String>,

    /// Generate two random matrices of this size instead of reading a file.
    #[arg(long, value_name = "SIZE", conflicts_with = "file")]
    pub random: Option<usize>,

    /// Seed for random matrix generation; a fresh one is drawn when omitted.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Row indices for the row swap step; prompted for when omitted.
    #[arg(long, num_args = 2, value_names = ["R1", "R2"], allow_negative_numbers = true)]
    pub swap_rows: Option<Vec<i64>>,

    /// Column indices for the column swap step; prompted for when omitted.
    #[arg(long, num_args = 2, value_names = ["C1", "C2"], allow_negative_numbers = true)]
    pub swap_columns: Option<Vec<i64>>,

    /// Row, column and new value for the update step; prompted for when omitted.
    #[arg(long, num_args = 3, value_names = ["ROW", "COL", "VALUE"], allow_negative_numbers = true)]
    pub update: Option<Vec<i64>>,

    /// Write a JSON report of the whole run to this file.
    #[arg(long, value_name = "PATH")]
    pub report_file: Option<String>,

    #[arg(value_enum, long, default_value_t = DuplicateHandling::Fail)]
    /// What to do if the report file already exists.
    pub dup: DuplicateHandling,
}
