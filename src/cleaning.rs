/*! Text cleanup.

Raw corpus text arrives with markup fragments, hard-wrapped lines and
multi-kilobyte articles. [TextCleaner] normalizes all of that into a
single-line string bounded to [MAX_CHARS] codepoints, cutting on a
sentence boundary when one is available.

Cleaning is a pure function over strings and is idempotent:
`clean(clean(x)) == clean(x)`.
!*/
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length (in codepoints) of a cleaned string.
pub const MAX_CHARS: usize = 500;

/// First codepoint offset at which a sentence boundary cut is accepted.
const BOUNDARY_SEARCH_START: usize = 100;

/// Hard cut length when no sentence boundary is found.
const HARD_CUT_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new("<[^>]+>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

pub struct TextCleaner {
    max_chars: usize,
}

impl TextCleaner {
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Cleans a raw string: strips markup tags, collapses whitespace runs
    /// to single spaces, trims, and bounds the length.
    ///
    /// Tags are stripped before whitespace is collapsed, so that the
    /// surrounding spaces of a removed tag collapse into one.
    /// Empty input yields empty output; this is not an error.
    pub fn clean(&self, text: &str) -> String {
        let text = MARKUP_TAG.replace_all(text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        self.truncate(text.trim())
    }

    /// Bounds `text` to `max_chars` codepoints.
    ///
    /// Prefers cutting right after the first `。` found at codepoint
    /// offset >= [BOUNDARY_SEARCH_START] and below the limit. When no such
    /// boundary exists, cuts at [HARD_CUT_CHARS] and appends an ellipsis.
    fn truncate(&self, text: &str) -> String {
        if text.chars().count() <= self.max_chars {
            return text.to_string();
        }

        let boundary = text
            .chars()
            .enumerate()
            .skip(BOUNDARY_SEARCH_START)
            .take(self.max_chars.saturating_sub(BOUNDARY_SEARCH_START))
            .find(|(_, c)| *c == '。')
            .map(|(idx, _)| idx);

        match boundary {
            Some(idx) => text.chars().take(idx + 1).collect(),
            None => {
                let mut cut: String = text.chars().take(HARD_CUT_CHARS).collect();
                cut.push_str(ELLIPSIS);
                cut
            }
        }
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
        }
    }
}
