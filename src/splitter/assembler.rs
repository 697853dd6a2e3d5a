/*!
 * Document assembly.
 *
 * Runs both routing paths over a source document, prepends the
 * synchronization metadata to the secondary edition and inserts the
 * cross-reference line below the main heading of each edition.
 */

use chrono::NaiveDate;
use log::debug;

use super::document::{Document, Edition, OutputDocument};
use super::version::extract_version;
use super::Splitter;

/// Delimiter line around the metadata block
pub const METADATA_DELIMITER: &str = "---";

/// Date format of the `last_synced` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Synchronization state recorded in the metadata block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Current,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
        }
    }
}

/// Metadata block prepended to the secondary-language edition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncMetadata {
    /// Relative path to the primary document
    pub source: String,
    pub source_version: String,
    pub translation_version: String,
    pub last_synced: NaiveDate,
    pub status: SyncStatus,
}

impl SyncMetadata {
    /// Metadata for a translation in sync with `version` of the source
    pub fn new(source: impl Into<String>, version: &str, last_synced: NaiveDate) -> Self {
        Self {
            source: source.into(),
            source_version: version.to_string(),
            translation_version: version.to_string(),
            last_synced,
            status: SyncStatus::Current,
        }
    }

    /// Render the block, delimiters and trailing blank line included
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            METADATA_DELIMITER.to_string(),
            format!("source: {}", self.source),
            format!("source_version: {}", self.source_version),
            format!("translation_version: {}", self.translation_version),
            format!("last_synced: {}", self.last_synced.format(DATE_FORMAT)),
            format!("status: {}", self.status.as_str()),
            METADATA_DELIMITER.to_string(),
            String::new(),
        ]
    }
}

/// Already-resolved relative links between the two editions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossLinks {
    /// Link from the primary document to the secondary document
    pub to_secondary: String,
    /// Link from the secondary document to the primary document
    pub to_primary: String,
}

impl CrossLinks {
    pub fn new(to_secondary: impl Into<String>, to_primary: impl Into<String>) -> Self {
        Self {
            to_secondary: to_secondary.into(),
            to_primary: to_primary.into(),
        }
    }
}

/// Both editions produced from one source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    /// Version extracted from the source
    pub version: String,
    pub primary: OutputDocument,
    pub secondary: OutputDocument,
}

/// Position of a scan relative to the metadata block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetadataScan {
    Outside,
    Inside,
}

impl MetadataScan {
    fn toggle(self) -> Self {
        match self {
            Self::Outside => Self::Inside,
            Self::Inside => Self::Outside,
        }
    }
}

/// Check if a line is a top-level heading (exactly one leading `#`)
fn is_top_level_heading(line: &str) -> bool {
    line.starts_with('#') && !line.starts_with("##")
}

/// Insert a blank line and `cross_reference` after the first top-level heading.
///
/// Returns false, leaving the lines untouched, if there is no such heading.
fn insert_after_first_heading(lines: &mut Vec<String>, cross_reference: String) -> bool {
    let target = lines.iter().position(|line| is_top_level_heading(line));
    insert_below(lines, target, cross_reference)
}

/// Like `insert_after_first_heading`, but headings inside a `---` block are skipped
fn insert_after_heading_outside_metadata(lines: &mut Vec<String>, cross_reference: String) -> bool {
    let mut scan = MetadataScan::Outside;
    let mut target = None;

    for (index, line) in lines.iter().enumerate() {
        if line.trim() == METADATA_DELIMITER {
            scan = scan.toggle();
            continue;
        }
        if scan == MetadataScan::Outside && is_top_level_heading(line) {
            target = Some(index);
            break;
        }
    }

    insert_below(lines, target, cross_reference)
}

// @inserts: Blank line and cross-reference below the heading at `target`
fn insert_below(lines: &mut Vec<String>, target: Option<usize>, cross_reference: String) -> bool {
    match target {
        Some(index) => {
            lines.insert(index + 1, cross_reference);
            lines.insert(index + 1, String::new());
            true
        }
        None => false,
    }
}

impl Splitter {
    /// Cross-reference line for the primary edition
    pub fn primary_cross_reference(&self, link: &str) -> String {
        format!(
            "> **Language**: English | [{}]({})",
            self.labels().secondary_name,
            link
        )
    }

    /// Cross-reference line for the secondary edition
    pub fn secondary_cross_reference(&self, link: &str) -> String {
        format!(
            "> **{}**: [English]({}) | {}",
            self.labels().secondary_label,
            link,
            self.labels().secondary_name
        )
    }

    /// Assemble the primary-language edition
    pub fn assemble_primary(&self, document: &Document, links: &CrossLinks) -> OutputDocument {
        let mut lines = self.extract_primary(document);
        let cross_reference = self.primary_cross_reference(&links.to_secondary);
        if !insert_after_first_heading(&mut lines, cross_reference) {
            debug!("No top-level heading in primary edition, cross-reference skipped");
        }
        OutputDocument::new(Edition::Primary, lines)
    }

    /// Assemble the secondary-language edition with its metadata block
    pub fn assemble_secondary(
        &self,
        document: &Document,
        links: &CrossLinks,
        version: &str,
        last_synced: NaiveDate,
    ) -> OutputDocument {
        let metadata = SyncMetadata::new(links.to_primary.as_str(), version, last_synced);
        let mut lines = metadata.to_lines();
        lines.extend(self.extract_secondary(document));

        let cross_reference = self.secondary_cross_reference(&links.to_primary);
        if !insert_after_heading_outside_metadata(&mut lines, cross_reference) {
            debug!("No top-level heading in secondary edition, cross-reference skipped");
        }
        OutputDocument::new(Edition::Secondary, lines)
    }

    /// Produce both editions of a bilingual document
    pub fn split(&self, document: &Document, links: &CrossLinks, last_synced: NaiveDate) -> SplitOutput {
        let version = extract_version(document.text());
        debug!("Splitting document of {} lines, version {}", document.line_count(), version);

        let primary = self.assemble_primary(document, links);
        let secondary = self.assemble_secondary(document, links, &version, last_synced);

        SplitOutput {
            version,
            primary,
            secondary,
        }
    }
}
