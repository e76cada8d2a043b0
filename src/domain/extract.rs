//! Candidate extraction from explorer page markup.
//!
//! The explorer renders each labelled counterparty as a tooltip anchor
//! whose `title` holds `Name<br/>(address)` and is immediately followed by
//! a copy-to-clipboard link. We match that fragment textually rather than
//! parsing the DOM; a markup change yields fewer candidates, never an error.

use regex::Regex;

use super::source_fund::CandidateEntry;

/// Tooltip anchor preceding the captured title, and the clipboard link
/// that terminates it.
pub const TITLE_PATTERN: &str = r#"data-bs-toggle="tooltip" data-bs-trigger="hover" data-bs-placement="top" title="(.*?)</a><a class="js-clipboar"#;

/// Separator between the label and the parenthesized address.
pub const NAME_DELIMITER: &str = "<br/>(";

/// Compiled extractor for tooltip-tagged counterparties.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    pattern: Regex,
}

impl PageExtractor {
    /// Compile the title pattern.
    ///
    /// # Errors
    /// Only fails if the pattern itself is invalid.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(TITLE_PATTERN)?,
        })
    }

    /// Extract candidates in page order. Duplicates are kept.
    pub fn extract(&self, page: &str) -> Vec<CandidateEntry> {
        self.pattern
            .captures_iter(page)
            .filter_map(|caps| caps.get(1))
            .filter_map(|title| split_title(title.as_str()))
            .collect()
    }
}

/// Split `Name<br/>(address)...` into its parts.
///
/// The address runs up to the first `)` after the delimiter, or to the end
/// of the title if there is none. Titles without the delimiter are skipped.
pub fn split_title(title: &str) -> Option<CandidateEntry> {
    let mut parts = title.split(NAME_DELIMITER);
    let name = parts.next()?;
    let rest = parts.next()?;
    let address = rest.split(')').next().unwrap_or(rest);
    Some(CandidateEntry::new(name, address))
}
