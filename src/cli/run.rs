use std::{fs, path::Path};

use anyhow::{Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::{args::Arguments, discover};
use crate::config::ExtractorOptions;
use crate::core::{Extractor, ExtractorOutput};

/// Extraction outcome for one file.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// `result` is `null` when the default export is not a class or object.
    Extracted { result: Option<ExtractorOutput> },
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl FileReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

/// Reports for every input file, in input order.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
}

impl RunResult {
    pub fn failure_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }

    pub fn method_count(&self) -> usize {
        self.reports
            .iter()
            .map(|report| match &report.outcome {
                Outcome::Extracted {
                    result: Some(output),
                } => output.methods.len(),
                _ => 0,
            })
            .sum()
    }
}

fn options_for(args: &Arguments, file: &Path) -> ExtractorOptions {
    ExtractorOptions {
        filename: file.display().to_string(),
        tsx: args.tsx.then_some(true),
        decorators: !args.no_decorators,
    }
}

fn extract_file(args: &Arguments, file: &Path) -> FileReport {
    let outcome = match fs::read_to_string(file) {
        Ok(source) => match Extractor::new(options_for(args, file)).extract(&source) {
            Ok(result) => Outcome::Extracted { result },
            Err(e) => Outcome::Failed {
                error: e.to_string(),
            },
        },
        Err(e) => Outcome::Failed {
            error: format!("Failed to read file: {}", e),
        },
    };

    FileReport {
        file: file.display().to_string(),
        outcome,
    }
}

pub fn run(args: &Arguments) -> Result<RunResult> {
    let ignores = discover::compile_ignores(&args.ignore)?;
    let files = discover::collect_files(&args.paths, &ignores)?;

    if files.is_empty() {
        bail!("No source files found in {}", args.paths.join(", "));
    }
    debug!(count = files.len(), "extracting");

    // Read and parse in parallel; each worker owns its source map.
    let reports = files
        .par_iter()
        .map(|file| extract_file(args, file))
        .collect();

    Ok(RunResult { reports })
}
