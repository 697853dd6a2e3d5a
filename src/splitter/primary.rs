/*!
 * Primary-language routing.
 *
 * Single forward pass, one decision per line, no lookahead.
 */

use log::trace;

use super::construct::{SEPARATOR, split_header};
use super::document::Document;
use super::lines::{is_marked_important, is_table_row};
use super::script::contains_secondary_script;
use super::{Disposition, Splitter};

impl Splitter {
    /// Decide what happens to a line in the primary-language output.
    ///
    /// First match wins:
    /// 1. secondary-language line without an important marker is dropped
    /// 2. bilingual heading is reduced to its primary fragment
    /// 3. table row with secondary-script text is kept as is
    /// 4. any other non-empty secondary-language line is dropped
    /// 5. everything else is kept
    pub fn route_primary(&self, line: &str) -> Disposition {
        let secondary = self.classifier().is_secondary_language(line);

        if secondary && !is_marked_important(line, self.important_markers()) {
            return Disposition::Drop;
        }

        if line.contains(SEPARATOR) {
            if let Some(header) = split_header(line, self.classifier()) {
                return Disposition::Replace(header.primary_line());
            }
        }

        // Tables are not split per column
        if is_table_row(line) && contains_secondary_script(line) {
            return Disposition::Keep;
        }

        if !line.trim().is_empty() && secondary {
            return Disposition::Drop;
        }

        Disposition::Keep
    }

    /// Build the primary-language body from a bilingual document
    pub fn extract_primary(&self, document: &Document) -> Vec<String> {
        let mut result = Vec::with_capacity(document.line_count());

        for (index, line) in document.lines().iter().enumerate() {
            let disposition = self.route_primary(line);
            trace!("primary line {}: {:?}", index + 1, disposition);
            if let Some(output) = disposition.apply(line) {
                result.push(output);
            }
        }

        result
    }
}
