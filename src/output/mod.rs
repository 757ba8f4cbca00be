pub mod json;
pub mod text;

use std::io;

use crate::{FactorialReport, NamesReport};

/// Trait for reporting drill results.
pub trait Reporter {
    fn report_factorial(
        &self,
        report: &FactorialReport,
        writer: &mut dyn io::Write,
    ) -> io::Result<()>;
    fn report_names(&self, report: &NamesReport, writer: &mut dyn io::Write) -> io::Result<()>;
}
