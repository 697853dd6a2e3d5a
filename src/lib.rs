/*!
 * # mdsplit - Bilingual markdown splitter
 *
 * A Rust library for splitting bilingual (English / Traditional Chinese)
 * markdown documents into two monolingual editions.
 *
 * ## Features
 *
 * - Script-ratio classification of every line
 * - Bilingual headings (`## Purpose | 目的`) split per edition
 * - Structural markdown (code fences, tables, lists, tree diagrams) preserved
 * - Synchronization metadata prepended to the secondary edition
 * - Cross-reference links between the two editions
 * - Batch processing into a `locales/<tag>/` sibling tree
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `splitter`: Line classification, routing and document assembly:
 *   - `splitter::script`: Script-ratio classifier
 *   - `splitter::construct`: Bilingual heading splitter
 *   - `splitter::primary` / `splitter::secondary`: Per-edition line routing
 *   - `splitter::assembler`: Metadata block and cross-reference insertion
 *   - `splitter::version`: Version marker extraction
 * - `file_utils`: File system operations and relative links
 * - `app_controller`: Split, inspect and batch operations
 * - `language_utils`: Locale tag validation
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod splitter;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, SplitOptions, SplitReport, BatchSummary};
pub use splitter::{Document, OutputDocument, Splitter, ScriptClassifier, CrossLinks, extract_version};
pub use errors::{AppError, ConfigError};
