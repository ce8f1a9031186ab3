//! Content check for the PRD's "7. Explicitly OUT OF SCOPE" section.
//!
//! This is a text heuristic, not a markdown parse. A PRD passes when it
//! mentions "out of scope" (any case, any whitespace between the words) and
//! also carries one of the section-7 markers: a literal `§7`, a literal
//! `section 7`, or a level-2 heading numbered `7.` at the start of a line.

use anyhow::Result;
use regex::Regex;

/// Level-2 heading numbered 7, e.g. `## 7. Explicitly OUT OF SCOPE`
const SECTION_7_HEADING_PATTERN: &str = r"(?m)^##\s+7\.\s+";

/// The phrase itself, case-insensitive
const OUT_OF_SCOPE_PATTERN: &str = r"(?i)out\s+of\s+scope";

const SECTION_SIGN_MARKER: &str = "§7";
const SECTION_WORD_MARKER: &str = "section 7";

/// What the PRD content check found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCheck {
    /// `## 7.` heading at the start of a line
    pub has_heading: bool,
    /// Literal `§7` anywhere
    pub has_section_sign: bool,
    /// Literal `section 7` anywhere (case-sensitive)
    pub has_section_word: bool,
    /// "out of scope" anywhere, any case
    pub has_out_of_scope: bool,
}

impl SectionCheck {
    /// Scan PRD content for the section-7 markers and the out-of-scope phrase.
    pub fn scan(content: &str) -> Result<Self> {
        let heading = Regex::new(SECTION_7_HEADING_PATTERN)?;
        let phrase = Regex::new(OUT_OF_SCOPE_PATTERN)?;

        Ok(Self {
            has_heading: heading.is_match(content),
            has_section_sign: content.contains(SECTION_SIGN_MARKER),
            has_section_word: content.contains(SECTION_WORD_MARKER),
            has_out_of_scope: phrase.is_match(content),
        })
    }

    /// True if any of the three section-7 markers was found.
    pub fn has_marker(&self) -> bool {
        self.has_heading || self.has_section_sign || self.has_section_word
    }

    /// The phrase and a marker are both required.
    pub fn is_compliant(&self) -> bool {
        self.has_out_of_scope && self.has_marker()
    }
}
