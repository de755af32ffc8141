//! Simplified-script detection heuristic.
use std::collections::HashSet;

use lazy_static::lazy_static;

use super::Filter;

lazy_static! {
    /// Characters common in Simplified Chinese whose Traditional
    /// counterparts differ. Drawn from very frequent words, so almost any
    /// natural simplified sentence contains at least one of them.
    static ref SIMPLIFIED_MARKERS: HashSet<char> =
        "简体国际发这为个着时会种长来东说对动机关进经给学实现点开问题还样"
            .chars()
            .collect();
}

/// Cheap relevance gate: does the text contain at least one marker
/// character?
///
/// This is a sampling bias, not a classifier. Simplified text without any
/// marker character slips through as a false negative, and Traditional
/// text can contain an overlapping character; both cases are accepted.
#[derive(Default)]
pub struct ScriptDetector;

impl Filter<&str> for ScriptDetector {
    fn detect(&self, text: &str) -> bool {
        text.chars().any(|c| SIMPLIFIED_MARKERS.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_characters_detected() {
        let f = ScriptDetector::default();
        assert!(f.detect("简体国际发这为个"));
        assert!(f.detect("今天天气很好，这样就行。"));
    }

    #[test]
    fn latin_rejected() {
        let f = ScriptDetector::default();
        assert!(!f.detect("plain latin text only"));
        assert!(!f.detect(""));
    }

    #[test]
    fn traditional_without_markers_rejected() {
        // pure traditional rendering of the marker words
        let f = ScriptDetector::default();
        assert!(!f.detect("簡體國際發這為個著時會種長來說對動機關進經給學實現點開問題還樣"));
    }
}
