use anyhow::{Result, Context, anyhow};
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn, info, debug};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::splitter::{CrossLinks, Document, DocumentStats, Splitter};

// @module: Application controller for bilingual document splitting

/// Per-invocation overrides for a split
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Link from the primary edition to the secondary edition
    pub secondary_link: Option<String>,
    /// Link from the secondary edition to the primary edition
    pub primary_link: Option<String>,
    /// Date recorded as `last_synced`, today if absent
    pub last_synced: Option<NaiveDate>,
}

/// What a split produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub version: String,
    pub primary_path: PathBuf,
    pub primary_chars: usize,
    pub primary_bytes: usize,
    pub secondary_path: PathBuf,
    pub secondary_chars: usize,
    pub secondary_bytes: usize,
}

/// Outcome counts of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for bilingual splitting
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Splitter built from the configuration
    splitter: Splitter,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        if let Ok(name) = language_utils::get_language_name(&config.languages.locale_tag) {
            debug!("Secondary language: {} ({})", name, config.languages.locale_tag);
        }

        let splitter = Splitter::from_config(&config);
        Ok(Self { config, splitter })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn splitter(&self) -> &Splitter {
        &self.splitter
    }

    /// Split one bilingual document into its two editions and write them
    pub fn split_file(
        &self,
        input_file: &Path,
        primary_output: &Path,
        secondary_output: &Path,
        options: &SplitOptions,
    ) -> Result<SplitReport> {
        let content = FileManager::read_to_string(input_file)?;
        let document = Document::new(content);

        let links = CrossLinks::new(
            options
                .secondary_link
                .clone()
                .unwrap_or_else(|| FileManager::relative_link(primary_output, secondary_output)),
            options
                .primary_link
                .clone()
                .unwrap_or_else(|| FileManager::relative_link(secondary_output, primary_output)),
        );
        let last_synced = options.last_synced.unwrap_or_else(|| Local::now().date_naive());

        debug!("Cross links: {} / {}", links.to_secondary, links.to_primary);
        let output = self.splitter.split(&document, &links, last_synced);

        let primary_text = output.primary.render();
        let secondary_text = output.secondary.render();

        FileManager::write_to_file(primary_output, &primary_text)?;
        FileManager::write_to_file(secondary_output, &secondary_text)?;

        let report = SplitReport {
            version: output.version,
            primary_path: primary_output.to_path_buf(),
            primary_chars: primary_text.chars().count(),
            primary_bytes: primary_text.len(),
            secondary_path: secondary_output.to_path_buf(),
            secondary_chars: secondary_text.chars().count(),
            secondary_bytes: secondary_text.len(),
        };

        debug!("Created: {} ({} chars)", report.primary_path.display(), report.primary_chars);
        debug!("Created: {} ({} chars)", report.secondary_path.display(), report.secondary_chars);

        Ok(report)
    }

    /// Report version and language line counts of a document without writing anything
    pub fn inspect_file(&self, input_file: &Path) -> Result<DocumentStats> {
        let content = FileManager::read_to_string(input_file)?;
        let document = Document::new(content);

        let mut classes = BTreeMap::new();
        for line in document.lines() {
            *classes.entry(format!("{:?}", self.splitter.classify(line))).or_insert(0usize) += 1;
        }
        debug!("Line classes: {:?}", classes);

        Ok(self.splitter.stats(&document))
    }

    /// Split every markdown file below `source_dir` into `output_root`.
    ///
    /// Primary editions mirror the source tree, secondary editions go to
    /// `output_root/locales/<locale_tag>/`. Files whose outputs exist are
    /// skipped unless `force_overwrite` is set. A failing file is logged and
    /// counted, the remaining files are still processed.
    pub fn run_batch(&self, source_dir: &Path, output_root: &Path, force_overwrite: bool) -> Result<BatchSummary> {
        if !source_dir.is_dir() {
            return Err(anyhow!("Source directory does not exist: {:?}", source_dir));
        }

        let files = FileManager::find_markdown_files(source_dir)?;
        if files.is_empty() {
            warn!("No markdown files found in directory: {:?}", source_dir);
            return Ok(BatchSummary::default());
        }

        let progress_bar = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = BatchSummary::default();
        let options = SplitOptions::default();

        for file in &files {
            let relative = file.strip_prefix(source_dir).unwrap_or(file);
            progress_bar.set_message(format!("Splitting: {}", relative.display()));

            let (primary_output, secondary_output) =
                FileManager::edition_paths(output_root, relative, &self.config.languages.locale_tag);

            let exists = FileManager::file_exists(&primary_output) || FileManager::file_exists(&secondary_output);
            if exists && !force_overwrite {
                warn!("Skipping {}, output already exists (use -f to force overwrite)", relative.display());
                summary.skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            match self.split_file(file, &primary_output, &secondary_output, &options) {
                Ok(_) => summary.processed += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", relative.display(), e);
                    summary.failed += 1;
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Batch complete");
        info!(
            "Batch completed: {} processed, {} skipped, {} errors",
            summary.processed, summary.skipped, summary.failed
        );

        Ok(summary)
    }
}
