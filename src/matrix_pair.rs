use std::fs;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::config;
use crate::error::MatrixError;
use crate::int_matrix::IntMatrix;

/// The two equally-sized matrices a run operates on.
#[derive(Debug, Clone)]
pub struct MatrixPair {
    name: String,
    a: IntMatrix,
    b: IntMatrix,
}

impl MatrixPair {
    /// Loads a pair from a file holding `N` followed by two `N`x`N`
    /// blocks of whitespace-delimited integers. Tokens past the second
    /// block are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<MatrixPair, MatrixError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MatrixError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_tokens(path.display().to_string(), &mut contents.split_whitespace())
    }

    /// Generates a pair of random matrices. The same seed always yields
    /// the same pair.
    pub fn random(size: usize, seed: u64) -> MatrixPair {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut a = IntMatrix::zeroed(size);
        let mut b = IntMatrix::zeroed(size);
        fill_random(&mut a, &mut rng);
        fill_random(&mut b, &mut rng);

        MatrixPair {
            name: String::from("random"),
            a,
            b,
        }
    }

    fn from_tokens<'a, I>(name: String, tokens: &mut I) -> Result<MatrixPair, MatrixError>
    where
        I: Iterator<Item = &'a str>,
    {
        let size = match tokens.next().and_then(|token| token.parse::<i64>().ok()) {
            Some(n) if n > 0 => n as usize,
            _ => return Err(MatrixError::BadDimension),
        };

        let mut a = IntMatrix::zeroed(size);
        let mut b = IntMatrix::zeroed(size);
        a.read_from(tokens)?;
        b.read_from(tokens)?;

        Ok(MatrixPair { name, a, b })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.a.size()
    }

    pub fn a(&self) -> &IntMatrix {
        &self.a
    }

    pub fn b(&self) -> &IntMatrix {
        &self.b
    }
}

fn fill_random<R: Rng>(matrix: &mut IntMatrix, rng: &mut R) {
    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            *matrix.at_mut(row, col) =
                rng.gen_range(config::MIN_RANDOM_VALUE..=config::MAX_RANDOM_VALUE);
        }
    }
}
