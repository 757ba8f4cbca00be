use std::io;

use crate::output::Reporter;
use crate::{FactorialReport, NamesReport};

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report_factorial(
        &self,
        report: &FactorialReport,
        writer: &mut dyn io::Write,
    ) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        writeln!(writer, "{json}")
    }

    fn report_names(&self, report: &NamesReport, writer: &mut dyn io::Write) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        writeln!(writer, "{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::Engine;
    use crate::namebook::Checker;
    use std::path::PathBuf;

    #[test]
    fn factorial_report_round_trips() {
        let report = FactorialReport {
            n: 100,
            engine: Engine::Bigint,
            digits: 158,
            digit_sum: 648,
        };
        let mut buf = Vec::new();
        JsonReporter::new()
            .report_factorial(&report, &mut buf)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["n"].as_u64(), Some(100));
        assert_eq!(parsed["engine"].as_str(), Some("bigint"));
        assert_eq!(parsed["digit_sum"].as_u64(), Some(648));
    }

    #[test]
    fn names_report_skips_absent_collision() {
        let report = NamesReport {
            file: PathBuf::from("names.txt"),
            checker: Checker::Trie,
            names: 3,
            consistent: true,
            first_collision: None,
        };
        let mut buf = Vec::new();
        JsonReporter::new().report_names(&report, &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["consistent"].as_bool(), Some(true));
        assert_eq!(parsed["checker"].as_str(), Some("trie"));
        assert!(parsed.get("first_collision").is_none());
    }
}
