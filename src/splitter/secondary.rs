/*!
 * Secondary-language routing.
 *
 * A primary-language line directly followed (blank lines aside) by a
 * secondary-language line is taken to be the original of that translation
 * and is elided. Nothing in the source pairs the two lines explicitly, so
 * this is adjacency detection and nothing stricter.
 */

use log::trace;

use super::construct::split_header;
use super::document::Document;
use super::lines::{is_code_or_example, is_structural};
use super::{Disposition, Splitter};

impl Splitter {
    /// Decide what happens to the line at `index` in the secondary-language output.
    ///
    /// First match wins:
    /// 1. bilingual heading becomes its secondary fragment with the original markers
    /// 2. primary-language prose followed by a translation is dropped
    /// 3. secondary-language, code/example and structural lines are kept
    /// 4. everything else is dropped
    pub fn route_secondary(&self, lines: &[String], index: usize) -> Disposition {
        let Some(line) = lines.get(index) else {
            return Disposition::Drop;
        };

        if let Some(header) = split_header(line, self.classifier()) {
            return Disposition::Replace(header.secondary_line());
        }

        let code_or_example = is_code_or_example(line);

        if self.classifier().is_primary_language(line)
            && !code_or_example
            && self.translation_follows(lines, index)
        {
            return Disposition::Drop;
        }

        if self.classifier().is_secondary_language(line) || code_or_example || is_structural(line) {
            return Disposition::Keep;
        }

        Disposition::Drop
    }

    /// Check if the next non-blank line after `index` is secondary language
    fn translation_follows(&self, lines: &[String], index: usize) -> bool {
        lines
            .iter()
            .skip(index + 1)
            .find(|candidate| !candidate.trim().is_empty())
            .is_some_and(|next| self.classifier().is_secondary_language(next))
    }

    /// Build the secondary-language body from a bilingual document.
    ///
    /// The metadata block is not part of the body; see the assembler.
    pub fn extract_secondary(&self, document: &Document) -> Vec<String> {
        let lines = document.lines();
        let mut result = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let disposition = self.route_secondary(lines, index);
            trace!("secondary line {}: {:?}", index + 1, disposition);
            if let Some(output) = disposition.apply(line) {
                result.push(output);
            }
        }

        result
    }
}
