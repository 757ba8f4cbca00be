use std::io;

use crate::output::Reporter;
use crate::{FactorialReport, NamesReport};

fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TextReporter {
    fn report_factorial(
        &self,
        report: &FactorialReport,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        writeln!(writer, "Factorial Digit Sum")?;
        writeln!(writer, "===================")?;
        writeln!(writer, "n:          {}", report.n)?;
        writeln!(writer, "engine:     {}", report.engine)?;
        writeln!(
            writer,
            "digits:     {}",
            format_with_commas(report.digits as u64)
        )?;
        writeln!(
            writer,
            "digit sum:  {}",
            format_with_commas(report.digit_sum)
        )?;
        Ok(())
    }

    fn report_names(&self, report: &NamesReport, writer: &mut dyn io::Write) -> io::Result<()> {
        writeln!(writer, "Name Book Consistency")?;
        writeln!(writer, "=====================")?;
        writeln!(writer, "file:       {}", report.file.display())?;
        writeln!(writer, "checker:    {}", report.checker)?;
        writeln!(writer, "names:      {}", report.names)?;
        writeln!(writer, "consistent: {}", report.consistent)?;
        if let Some(name) = &report.first_collision {
            writeln!(
                writer,
                "collision:  {name:?} matches the beginning of another name"
            )?;
        }
        Ok(())
    }
}
