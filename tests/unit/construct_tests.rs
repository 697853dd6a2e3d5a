/*!
 * Tests for bilingual heading detection and splitting
 */

use mdsplit::splitter::construct::{is_bilingual_header, split_header};
use mdsplit::splitter::script::ScriptClassifier;

/// Test a regular bilingual heading
#[test]
fn test_splitHeader_withLevelTwoHeading_shouldReturnBothFragments() {
    let classifier = ScriptClassifier::default();
    let header = split_header("## Purpose | 目的", &classifier).expect("should be bilingual");

    assert_eq!(header.markers, "##");
    assert_eq!(header.primary, "## Purpose");
    assert_eq!(header.secondary, "目的");
    assert_eq!(header.primary_line(), "## Purpose");
    assert_eq!(header.secondary_line(), "## 目的");
}

/// Test that heading markers without a space are still recognized
#[test]
fn test_splitHeader_withoutSpaceAfterMarkers_shouldKeepMarkerCount() {
    let classifier = ScriptClassifier::default();
    let header = split_header("####Scope|範圍", &classifier).expect("should be bilingual");
    assert_eq!(header.primary_line(), "####Scope");
    assert_eq!(header.secondary_line(), "#### 範圍");
}

/// Test malformed constructs fall through
#[test]
fn test_isBilingualHeader_withMalformedConstructs_shouldReturnFalse() {
    let classifier = ScriptClassifier::default();
    assert!(!is_bilingual_header("## A | 甲 | 乙", &classifier));
    assert!(!is_bilingual_header("## Title |", &classifier));
    assert!(!is_bilingual_header("Purpose | 目的", &classifier));
    assert!(!is_bilingual_header("| Feature | 功能 |", &classifier));
    assert!(!is_bilingual_header("## Title", &classifier));
}

/// Test that a second fragment with only a couple of Han characters is rejected
#[test]
fn test_isBilingualHeader_withSparseSecondFragment_shouldReturnFalse() {
    let classifier = ScriptClassifier::default();
    assert!(!is_bilingual_header("## Options | See the 中 option list", &classifier));
    assert!(is_bilingual_header("## API Reference | API 參考", &classifier));
}
