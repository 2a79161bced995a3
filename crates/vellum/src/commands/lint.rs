//! Lint command - Lint Stencil component files

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use clap::{Args, ValueEnum};
use glob::glob;
use ignore::Walk;
use rayon::prelude::*;
use vellum_patina::{format_results, format_summary, Linter, OutputFormat};

use crate::config::load_config;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args)]
pub struct LintArgs {
    /// Glob patterns or directories to lint
    #[arg(default_value = ".")]
    pub patterns: Vec<String>,

    /// Config file path (defaults to ./vellum.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Maximum number of warnings before failing
    #[arg(long)]
    pub max_warnings: Option<usize>,

    /// Quiet mode - only show summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            patterns: vec![".".to_string()],
            config: None,
            format: Format::Text,
            max_warnings: None,
            quiet: false,
        }
    }
}

/// `.ts`/`.tsx` sources outside `node_modules`, declaration files excluded
fn is_lintable(path: &Path) -> bool {
    let is_ts = path
        .extension()
        .is_some_and(|ext| ext == "ts" || ext == "tsx");
    let is_declaration = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".d.ts"));
    let in_node_modules = path.components().any(|c| c.as_os_str() == "node_modules");
    is_ts && !is_declaration && !in_node_modules
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand patterns into lintable files, sorted and deduplicated
fn collect_files(patterns: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = patterns
        .iter()
        .flat_map(|pattern| {
            if is_glob(pattern) {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| is_lintable(p))
                    .collect::<Vec<_>>()
            } else {
                // Directory walking respects .gitignore
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .map(|e| e.into_path())
                    .filter(|p| p.is_file() && is_lintable(p))
                    .collect::<Vec<_>>()
            }
        })
        .collect();

    files.sort();
    files.dedup();
    files
}

pub fn run(args: LintArgs) {
    let start = Instant::now();

    let config = load_config(args.config.as_deref());
    let linter = match Linter::from_config(&config.lint) {
        Ok(linter) => linter,
        Err(e) => {
            eprintln!("Invalid lint configuration: {e}");
            std::process::exit(1);
        }
    };

    let files = collect_files(&args.patterns);
    if files.is_empty() {
        eprintln!("No .ts/.tsx files found matching patterns: {:?}", args.patterns);
        return;
    }
    tracing::debug!(files = files.len(), "collected files");

    let error_count = AtomicUsize::new(0);
    let warning_count = AtomicUsize::new(0);

    // Lint all files in parallel and collect results
    let results: Vec<_> = files
        .par_iter()
        .filter_map(|path| {
            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", path.display(), e);
                    return None;
                }
            };

            let filename = path.to_string_lossy().to_string();
            let result = linter.lint_source(&source, &filename);
            if result.parse_error_count > 0 {
                tracing::warn!(
                    file = %filename,
                    errors = result.parse_error_count,
                    "file has syntax errors"
                );
            }

            error_count.fetch_add(result.error_count, Ordering::Relaxed);
            warning_count.fetch_add(result.warning_count, Ordering::Relaxed);

            Some((filename, source, result))
        })
        .collect();

    let total_errors = error_count.load(Ordering::Relaxed);
    let total_warnings = warning_count.load(Ordering::Relaxed);
    let format = OutputFormat::from(args.format);

    if !args.quiet || total_errors > 0 || total_warnings > 0 {
        let lint_results: Vec<_> = results.iter().map(|(_, _, r)| r.clone()).collect();
        let sources: Vec<_> = results
            .iter()
            .map(|(f, s, _)| (f.clone(), s.clone()))
            .collect();

        let output = format_results(&lint_results, &sources, format);
        if !output.trim().is_empty() {
            print!("{output}");
        }
    }

    if format == OutputFormat::Text {
        println!(
            "\n{}",
            format_summary(total_errors, total_warnings, files.len())
        );
        println!("Linted {} files in {:.4?}", files.len(), start.elapsed());
    }

    if total_errors > 0 {
        std::process::exit(1);
    }

    if let Some(max) = args.max_warnings {
        if total_warnings > max {
            eprintln!("\nToo many warnings ({total_warnings} > max {max})");
            std::process::exit(1);
        }
    }
}
