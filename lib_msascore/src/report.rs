use std::fmt;

use crate::scoring::AlignmentScores;

/// The scores of one alignment file, labelled with its source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentMetrics {
    /// The alignment file name this was computed from.
    pub source: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub scores: AlignmentScores,
}

/// One successfully scored (input, engine) pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportEntry {
    /// The originating input file, the grouping key of the report.
    pub input: String,
    pub engine: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: AlignmentMetrics,
}

/// A failed (input, engine) pair. Failures never abort the remaining pairs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineFailure {
    pub input: String,
    pub engine: String,
    pub reason: String,
}

/// The accumulated outcome of a comparative run, one entry per (input,
/// engine) pair that succeeded, in input-major order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparativeReport {
    pub entries: Vec<ReportEntry>,
    pub failures: Vec<EngineFailure>,
}

impl ComparativeReport {
    pub fn record_success(&mut self, input: String, engine: String, metrics: AlignmentMetrics) {
        self.entries.push(ReportEntry {
            input,
            engine,
            metrics,
        });
    }

    pub fn record_failure(&mut self, input: String, engine: String, reason: String) {
        self.failures.push(EngineFailure {
            input,
            engine,
            reason,
        });
    }

    /// Distinct inputs with at least one entry, in first-appearance order.
    pub fn inputs(&self) -> Vec<&str> {
        let mut inputs = Vec::new();
        for entry in &self.entries {
            if !inputs.contains(&entry.input.as_str()) {
                inputs.push(entry.input.as_str());
            }
        }
        inputs
    }
}

impl fmt::Display for ComparativeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(78))?;
        writeln!(f, "COMPARATIVE ANALYSIS SUMMARY")?;
        writeln!(f, "{}", "=".repeat(78))?;
        writeln!(
            f,
            "{:<30} | {:>10} | {:>10} | {:>10} | {:<10}",
            "Alignment File", "Gap (%)", "Match (%)", "Entropy", "Engine"
        )?;
        writeln!(f, "{}", "-".repeat(78))?;

        for input in self.inputs() {
            for entry in self.entries.iter().filter(|entry| entry.input == input) {
                writeln!(
                    f,
                    "{:<30} | {:>10.3} | {:>10.3} | {:>10.4} | {:<10}",
                    entry.metrics.source,
                    entry.metrics.scores.gap_percentage,
                    entry.metrics.scores.match_percentage,
                    entry.metrics.scores.average_entropy,
                    entry.engine,
                )?;
            }
        }

        writeln!(f, "{}", "-".repeat(78))?;
        writeln!(f, "Note: lower average entropy indicates higher conservation.")
    }
}
