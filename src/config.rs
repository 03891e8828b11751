/// Element type used for all matrix values.
pub type Value = i32;

// Default indices for the row swap step.
pub const DEFAULT_SWAP_ROWS: (i64, i64) = (0, 1);
// Default indices for the column swap step.
pub const DEFAULT_SWAP_COLUMNS: (i64, i64) = (0, 1);
// Default position and value for the element update step.
pub const DEFAULT_UPDATE_POSITION: (i64, i64) = (0, 0);
pub const DEFAULT_UPDATE_VALUE: Value = 100;

// Narrowest field used when printing matrix elements.
pub const MIN_PRINT_WIDTH: usize = 2;

// Range for randomly generated matrix elements.
pub const MIN_RANDOM_VALUE: Value = -99;
pub const MAX_RANDOM_VALUE: Value = 99;
