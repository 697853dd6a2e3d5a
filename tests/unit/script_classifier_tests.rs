/*!
 * Tests for script-ratio classification
 */

use mdsplit::splitter::script::{
    ScriptClassifier, contains_secondary_script, count_secondary_script, is_secondary_script_char,
};

/// Test that the Han range bounds are inclusive
#[test]
fn test_isSecondaryScriptChar_withRangeBounds_shouldBeInclusive() {
    assert!(is_secondary_script_char('\u{4e00}'));
    assert!(is_secondary_script_char('\u{9fff}'));
    assert!(!is_secondary_script_char('\u{4dff}'));
    assert!(!is_secondary_script_char('\u{a000}'));
    // Fullwidth punctuation is not part of the range
    assert!(!is_secondary_script_char('。'));
    assert!(!is_secondary_script_char('a'));
}

/// Test counting and presence helpers
#[test]
fn test_countSecondaryScript_withMixedText_shouldCountOnlyHan() {
    assert_eq!(count_secondary_script("Hello 世界!"), 2);
    assert_eq!(count_secondary_script("plain"), 0);
    assert!(contains_secondary_script("a 中 b"));
    assert!(!contains_secondary_script("a b c"));
}

/// Test that whitespace does not count towards the ratio
#[test]
fn test_scriptRatio_withWhitespace_shouldIgnoreIt() {
    assert_eq!(ScriptClassifier::script_ratio("中 文"), 1.0);
    assert_eq!(ScriptClassifier::script_ratio("ab  中文"), 0.5);
    assert_eq!(ScriptClassifier::script_ratio(""), 0.0);
}

/// Test pure secondary-script lines
#[test]
fn test_isSecondaryLanguage_withPureChinese_shouldReturnTrue() {
    let classifier = ScriptClassifier::default();
    assert!(classifier.is_secondary_language("一些中文文字。"));
    assert!(classifier.is_secondary_language("  這是測試  "));
}

/// Test sparse secondary-script content is not secondary language
#[test]
fn test_isSecondaryLanguage_withSparseChinese_shouldReturnFalse() {
    let classifier = ScriptClassifier::default();
    assert!(!classifier.is_secondary_language("Use the `中文` keyword only in examples."));
    assert!(!classifier.is_secondary_language("Plain English sentence."));
}

/// Test the lenient primary-language predicate
#[test]
fn test_isPrimaryLanguage_withFewHanCharacters_shouldReturnTrue() {
    let classifier = ScriptClassifier::default();
    assert!(classifier.is_primary_language("Plain English sentence."));
    assert!(classifier.is_primary_language("Example: 中"));
    assert!(classifier.is_primary_language("中文"));
    assert!(!classifier.is_primary_language("一些中文文字。"));
    assert!(!classifier.is_primary_language(""));
}

/// Test that both predicates can be false for the same line
#[test]
fn test_predicates_withStructuralLine_canBothBeFalse() {
    let classifier = ScriptClassifier::default();
    // Three Han characters among many others: neither dense nor sparse enough
    let line = "This paragraph mentions 中文字 somewhere in the middle of it.";
    assert!(!classifier.is_primary_language(line));
    assert!(!classifier.is_secondary_language(line));
}

/// Test that classification is a pure function of the line
#[test]
fn test_predicates_withRepeatedEvaluation_shouldBeStable() {
    let classifier = ScriptClassifier::default();
    for line in ["# Title | 標題", "Some English text.", "一些中文文字。", "", "| a | 乙 |"] {
        let first = (classifier.is_primary_language(line), classifier.is_secondary_language(line));
        let second = (classifier.is_primary_language(line), classifier.is_secondary_language(line));
        assert_eq!(first, second, "classification of {:?} changed", line);
    }
}

/// Test default threshold constants
#[test]
fn test_default_withNoParameters_shouldUseDocumentedThresholds() {
    let classifier = ScriptClassifier::default();
    assert_eq!(classifier.secondary_ratio_threshold(), 0.3);
    assert_eq!(classifier.primary_max_secondary_chars(), 3);
}
