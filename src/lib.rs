pub mod bignum;
pub mod config;
pub mod digits;
pub mod error;
pub mod factorial;
pub mod namebook;
pub mod output;

use std::path::{Path, PathBuf};

use factorial::Engine;
use namebook::{Checker, NameBook};

/// The result of one factorial digit-sum run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FactorialReport {
    pub n: u64,
    pub engine: Engine,
    /// Decimal digits in n!.
    pub digits: usize,
    pub digit_sum: u64,
}

/// The result of one name-list consistency run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NamesReport {
    pub file: PathBuf,
    pub checker: Checker,
    /// Names read from the file.
    pub names: usize,
    pub consistent: bool,
    /// First name whose insertion collided with an earlier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_collision: Option<String>,
}

/// Run the factorial drill: bound-check the input, compute n! with the chosen
/// engine, and report the decimal digit count and digit sum of the result.
pub fn run_factorial(n: u64, engine: Engine, max_n: u64) -> error::Result<FactorialReport> {
    if n > max_n {
        return Err(error::Error::OutOfRange { n, max: max_n });
    }

    let (digits, digit_sum) = match engine {
        Engine::Native => {
            let f = factorial::factorial_native(n)?;
            (digits::split_digits(f).len(), digits::digit_sum(f))
        }
        Engine::Bigint => {
            let f = factorial::factorial_bigint(n);
            let decimal = f.to_radix_le(10);
            (decimal.len(), decimal.iter().map(|&d| u64::from(d)).sum())
        }
        Engine::Limbs => {
            let f = factorial::factorial_limbs(n);
            (f.digit_count(), f.digit_sum())
        }
    };

    Ok(FactorialReport {
        n,
        engine,
        digits,
        digit_sum,
    })
}

/// Run the name-book drill: read a whitespace-separated name list from `path`
/// and check it for prefix collisions with the chosen checker.
pub fn check_names(path: &Path, checker: Checker) -> error::Result<NamesReport> {
    let mut book = NameBook::new(checker);
    book.read_names(path)?;

    Ok(NamesReport {
        file: path.to_path_buf(),
        checker,
        names: book.len(),
        consistent: book.consistent(),
        first_collision: book.first_collision().cloned(),
    })
}
