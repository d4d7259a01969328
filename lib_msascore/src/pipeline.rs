use std::path::{Path, PathBuf};

use log::{error, info};

use crate::{
    engine::AlignmentEngine,
    error::{Error, Result},
    report::ComparativeReport,
    scoring::score_alignment_file,
};

/// Runs every requested engine on every input and scores the produced
/// alignments.
///
/// Pairs are processed sequentially and independently: a failing engine run
/// (or an unusable engine output) is logged, recorded in the report and
/// skipped, never aborting the remaining pairs. Engine outputs are written to
/// `output_directory` as `{input_stem}_{engine_label}.fasta`.
///
/// Having no inputs or no engines at all is fatal before any work starts.
pub fn run_comparison(
    inputs: &[PathBuf],
    engines: &[&dyn AlignmentEngine],
    output_directory: &Path,
) -> Result<ComparativeReport> {
    if inputs.is_empty() {
        return Err(Error::NoInputs);
    }
    if engines.is_empty() {
        return Err(Error::NoEngines);
    }

    let mut report = ComparativeReport::default();

    for input in inputs {
        let input_label = file_name_label(input);
        let input_stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| input_label.clone());

        for engine in engines {
            let output =
                output_directory.join(format!("{input_stem}_{}.fasta", engine.output_label()));

            info!("Running {} on {input_label}", engine.name());
            if let Err(engine_error) = engine.align(input, &output) {
                error!(
                    "{} failed on {input_label}: {engine_error}",
                    engine.name()
                );
                report.record_failure(
                    input_label.clone(),
                    engine.name().to_string(),
                    engine_error.to_string(),
                );
                continue;
            }

            match score_alignment_file(&output) {
                Ok(metrics) => {
                    info!(
                        "Scored {}: gap {:.3}%, match {:.3}%, average entropy {:.4}",
                        metrics.source,
                        metrics.scores.gap_percentage,
                        metrics.scores.match_percentage,
                        metrics.scores.average_entropy,
                    );
                    report.record_success(input_label.clone(), engine.name().to_string(), metrics);
                }
                Err(score_error) => {
                    error!(
                        "Unusable {} output for {input_label}: {score_error}",
                        engine.name()
                    );
                    report.record_failure(
                        input_label.clone(),
                        engine.name().to_string(),
                        score_error.to_string(),
                    );
                }
            }
        }
    }

    Ok(report)
}

fn file_name_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::{fs, io, path::Path};

    use crate::{
        engine::{AlignmentEngine, EngineError},
        error::Error,
    };

    use super::run_comparison;

    struct StubEngine {
        name: &'static str,
        label: &'static str,
        /// Aligned fasta content to produce, or `None` to fail.
        produces: Option<&'static str>,
    }

    impl AlignmentEngine for StubEngine {
        fn name(&self) -> &str {
            self.name
        }

        fn output_label(&self) -> &str {
            self.label
        }

        fn align(&self, _input: &Path, output: &Path) -> Result<(), EngineError> {
            match self.produces {
                Some(content) => {
                    fs::write(output, content).unwrap();
                    Ok(())
                }
                None => Err(EngineError::Spawn {
                    program: "stub",
                    source: io::Error::new(io::ErrorKind::NotFound, "engine not installed"),
                }),
            }
        }
    }

    #[test]
    fn test_failing_engine_is_skipped_but_recorded() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("input.fasta");
        fs::write(&input, ">a\nACGT\n").unwrap();

        let engine_a = StubEngine {
            name: "Engine A",
            label: "a",
            produces: Some(">a\nAC-GT\n>b\nAC-GT\n"),
        };
        let engine_b = StubEngine {
            name: "Engine B",
            label: "b",
            produces: None,
        };
        let engine_c = StubEngine {
            name: "Engine C",
            label: "c",
            produces: Some(">a\nACGGT\n>b\nACGGT\n"),
        };

        let report = run_comparison(
            &[input],
            &[&engine_a, &engine_b, &engine_c],
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].engine, "Engine A");
        assert_eq!(report.entries[1].engine, "Engine C");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].engine, "Engine B");
        assert_eq!(report.failures[0].input, "input.fasta");
        assert!(report.failures[0].reason.contains("not installed"));
    }

    #[test]
    fn test_output_files_are_named_after_input_and_engine() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("globins.fa");
        fs::write(&input, ">a\nACGT\n").unwrap();

        let engine = StubEngine {
            name: "Engine A",
            label: "a",
            produces: Some(">a\nACGT\n"),
        };

        let report = run_comparison(&[input], &[&engine], temp_dir.path()).unwrap();
        assert!(temp_dir.path().join("globins_a.fasta").is_file());
        assert_eq!(report.entries[0].metrics.source, "globins_a.fasta");
        assert_eq!(report.entries[0].input, "globins.fa");
    }

    #[test]
    fn test_contentless_engine_output_is_reported_as_zero() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("input.fasta");
        fs::write(&input, ">a\nACGT\n").unwrap();

        let engine = StubEngine {
            name: "Engine A",
            label: "a",
            produces: Some(">only headers\n"),
        };

        let report = run_comparison(&[input], &[&engine], temp_dir.path()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].metrics.scores.average_entropy, 0.0);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_ragged_engine_output_is_a_pair_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("input.fasta");
        fs::write(&input, ">a\nACGT\n").unwrap();

        let engine = StubEngine {
            name: "Engine A",
            label: "a",
            produces: Some(">a\nACGT\n>b\nACG\n"),
        };

        let report = run_comparison(&[input], &[&engine], temp_dir.path()).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].reason.contains("unequal length"));
    }

    #[test]
    fn test_missing_inputs_or_engines_are_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("input.fasta");
        fs::write(&input, ">a\nACGT\n").unwrap();
        let engine = StubEngine {
            name: "Engine A",
            label: "a",
            produces: Some(">a\nACGT\n"),
        };

        assert!(matches!(
            run_comparison(&[], &[&engine], temp_dir.path()),
            Err(Error::NoInputs)
        ));
        assert!(matches!(
            run_comparison(&[input], &[], temp_dir.path()),
            Err(Error::NoEngines)
        ));
    }
}
