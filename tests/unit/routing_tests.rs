/*!
 * Tests for per-edition line routing
 */

use mdsplit::splitter::{Disposition, Document, Splitter};
use crate::common;

/// Test that pure secondary-language lines are dropped from the primary edition
#[test]
fn test_routePrimary_withPureChineseLine_shouldDrop() {
    let splitter = Splitter::default();
    assert_eq!(splitter.route_primary("一些中文文字。"), Disposition::Drop);
}

/// Test that bilingual headings keep only the primary fragment
#[test]
fn test_routePrimary_withBilingualHeading_shouldReplaceWithPrimaryFragment() {
    let splitter = Splitter::default();
    assert_eq!(
        splitter.route_primary("## Purpose | 目的"),
        Disposition::Replace("## Purpose".to_string())
    );
}

/// Test that table rows with secondary-script text pass through unchanged
#[test]
fn test_routePrimary_withBilingualTableRow_shouldKeep() {
    let splitter = Splitter::default();
    assert_eq!(splitter.route_primary("| Feature | 功能 |"), Disposition::Keep);
    assert_eq!(splitter.route_primary("| 功能 | 說明 |"), Disposition::Drop);
}

/// Test that an important marker alone does not keep a secondary-language line
#[test]
fn test_routePrimary_withImportantChineseLine_shouldStillDrop() {
    let splitter = Splitter::default();
    assert_eq!(splitter.route_primary("✅ 正確：使用祈使語氣"), Disposition::Drop);
}

/// Test that an important bilingual heading is still split
#[test]
fn test_routePrimary_withImportantBilingualHeading_shouldReplace() {
    let splitter = Splitter::default();
    assert_eq!(
        splitter.route_primary("## ✅ Good | ✅ 好的範例"),
        Disposition::Replace("## ✅ Good".to_string())
    );
}

/// Test that primary and structural lines are kept
#[test]
fn test_routePrimary_withPrimaryAndStructuralLines_shouldKeep() {
    let splitter = Splitter::default();
    for line in ["Some English text.", "", "---", "```bash", "- item", "Use `中文` here."] {
        assert_eq!(splitter.route_primary(line), Disposition::Keep, "line {:?}", line);
    }
}

/// Test the primary body of a small document
#[test]
fn test_extractPrimary_withMixedDocument_shouldKeepEnglishOnly() {
    let splitter = Splitter::default();
    let document = Document::new("# Title | 標題\n\nSome English text.\n一些中文文字。\n");

    assert_eq!(
        splitter.extract_primary(&document),
        common::lines(&["# Title", "", "Some English text.", ""])
    );
}

/// Test that a bilingual heading yields the secondary fragment with its markers
#[test]
fn test_routeSecondary_withBilingualHeading_shouldReplaceWithSecondaryFragment() {
    let splitter = Splitter::default();
    let lines = common::lines(&["### Scope | 範圍"]);
    assert_eq!(
        splitter.route_secondary(&lines, 0),
        Disposition::Replace("### 範圍".to_string())
    );
}

/// Test that an English line followed by its translation is elided
#[test]
fn test_routeSecondary_withTranslationAfterBlankLines_shouldDropEnglish() {
    let splitter = Splitter::default();
    let lines = common::lines(&["Write clear commit messages.", "", "   ", "撰寫清晰的提交訊息。"]);
    assert_eq!(splitter.route_secondary(&lines, 0), Disposition::Drop);
    assert_eq!(splitter.route_secondary(&lines, 3), Disposition::Keep);
}

/// Test that unpaired English prose is dropped
#[test]
fn test_routeSecondary_withUnpairedEnglish_shouldDrop() {
    let splitter = Splitter::default();
    let lines = common::lines(&["Unpaired English note.", "", "Another English line."]);
    assert_eq!(splitter.route_secondary(&lines, 0), Disposition::Drop);
    assert_eq!(splitter.route_secondary(&lines, 2), Disposition::Drop);
}

/// Test that code, tree diagrams and structural lines survive
#[test]
fn test_routeSecondary_withCodeAndStructure_shouldKeep() {
    let splitter = Splitter::default();
    let lines = common::lines(&[
        "```bash",
        "// comment",
        "├── src/",
        "# Top heading",
        "- list item",
        "| a | b |",
        "---",
        "",
    ]);
    for index in 0..lines.len() {
        assert_eq!(splitter.route_secondary(&lines, index), Disposition::Keep, "line {:?}", lines[index]);
    }
}

/// Test that a structural English line is dropped when a translation follows
#[test]
fn test_routeSecondary_withEnglishListItemBeforeTranslation_shouldDrop() {
    let splitter = Splitter::default();
    let lines = common::lines(&["- Keep the subject short", "- 保持主旨簡短"]);
    assert_eq!(splitter.route_secondary(&lines, 0), Disposition::Drop);
    assert_eq!(splitter.route_secondary(&lines, 1), Disposition::Keep);
}

/// Test that a code line is never elided even if a translation follows
#[test]
fn test_routeSecondary_withCodeBeforeChinese_shouldKeep() {
    let splitter = Splitter::default();
    let lines = common::lines(&["```", "中文說明文字"]);
    assert_eq!(splitter.route_secondary(&lines, 0), Disposition::Keep);
}

/// Test out-of-range indices
#[test]
fn test_routeSecondary_withIndexPastEnd_shouldDrop() {
    let splitter = Splitter::default();
    let lines = common::lines(&["中文"]);
    assert_eq!(splitter.route_secondary(&lines, 5), Disposition::Drop);
}

/// Test the secondary body of a small document
#[test]
fn test_extractSecondary_withMixedDocument_shouldKeepChineseOnly() {
    let splitter = Splitter::default();
    let document = Document::new("# Title | 標題\n\nSome English text.\n一些中文文字。\n");

    assert_eq!(
        splitter.extract_secondary(&document),
        common::lines(&["# 標題", "", "一些中文文字。", ""])
    );
}

/// Test that CRLF input is routed like LF input
#[test]
fn test_extractBoth_withCrlfDocument_shouldMatchLfRouting() {
    let splitter = Splitter::default();
    let crlf = Document::new("# Title | 標題\r\n\r\nSome English text.\r\n一些中文文字。\r\n");
    let lf = Document::new("# Title | 標題\n\nSome English text.\n一些中文文字。\n");

    assert_eq!(crlf.lines(), lf.lines());
    assert_eq!(
        splitter.extract_primary(&crlf),
        common::lines(&["# Title", "", "Some English text.", ""])
    );
    assert_eq!(
        splitter.extract_secondary(&crlf),
        common::lines(&["# 標題", "", "一些中文文字。", ""])
    );
}

/// Test the language line counts reported by inspect
#[test]
fn test_stats_withFixtureDocument_shouldCountLanguages() {
    let splitter = Splitter::default();
    let document = Document::new(common::fixture("guide.md"));
    let stats = splitter.stats(&document);

    assert_eq!(stats.version, "2.3.1");
    assert_eq!(stats.total_lines, 32);
    assert_eq!(stats.secondary_lines, 5);
    assert_eq!(stats.primary_lines, 14);
}
