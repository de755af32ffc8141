//! Corpus categories.
//!
//! The four corpus subsets form a closed set of extraction strategies:
//! each one carries its source directory candidates, output label, tag
//! list, length gate and field composition rule. Adding a category means
//! adding a variant here, not branching elsewhere.
use super::RawRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Encyclopedia articles (wiki2019zh).
    Wiki,
    /// News articles (news2016zh).
    News,
    /// Community Q&A (webtext2019zh).
    Webtext,
    /// Encyclopedia Q&A pairs (baike2018qa).
    Baike,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Wiki,
        Category::News,
        Category::Webtext,
        Category::Baike,
    ];

    /// Output label, also used as the sample id prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Wiki => "wiki",
            Category::News => "news",
            Category::Webtext => "social",
            Category::Baike => "baike",
        }
    }

    /// Candidate subdirectory names under the source root, in preference
    /// order. The wiki dump changed names across releases.
    pub fn source_dirs(&self) -> &'static [&'static str] {
        match self {
            Category::Wiki => &["wiki_zh", "wiki2019zh", "wiki"],
            Category::News => &["news2016zh"],
            Category::Webtext => &["webtext2019zh"],
            Category::Baike => &["baike2018qa"],
        }
    }

    /// Extra file patterns tried when no JSON-lines file is found.
    /// The wiki dump ships wikiextractor-style `wiki_00` part files.
    pub fn fallback_patterns(&self) -> &'static [&'static str] {
        match self {
            Category::Wiki => &["**/wiki_*"],
            _ => &[],
        }
    }

    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Category::Wiki => &["wiki", "encyclopedia"],
            Category::News => &["news", "formal"],
            Category::Webtext => &["social", "qa", "informal"],
            Category::Baike => &["baike", "qa", "encyclopedia"],
        }
    }

    /// Minimum candidate length in codepoints, where gated.
    /// Community Q&A halves are only required to be non-empty.
    pub fn min_size(&self) -> Option<usize> {
        match self {
            Category::Wiki | Category::News => Some(50),
            Category::Webtext => None,
            Category::Baike => Some(30),
        }
    }

    /// Composes zero or more candidate strings from a raw record,
    /// according to the category's schema.
    pub fn compose(&self, record: &RawRecord) -> Vec<String> {
        match self {
            Category::Wiki => record
                .text()
                .or_else(|| record.content())
                .map(str::to_string)
                .into_iter()
                .collect(),

            Category::News => {
                let body = record.content().or_else(|| record.desc());
                match (record.title(), body) {
                    (Some(title), Some(body)) => vec![format!("{}。{}", title, body)],
                    (Some(title), None) => vec![format!("{}。", title)],
                    (None, Some(body)) => vec![body.to_string()],
                    (None, None) => vec![],
                }
            }

            // question and answer become independent units
            Category::Webtext => {
                let mut units = Vec::new();
                if let Some(question) = record.title().or_else(|| record.question()) {
                    units.push(question.to_string());
                }
                if let Some(answer) = record.content().or_else(|| record.answer()) {
                    units.push(answer.to_string());
                }
                units
            }

            Category::Baike => {
                let question = record.title().or_else(|| record.question());
                let answer = record.answer().or_else(|| record.content());
                match (question, answer) {
                    (Some(q), Some(a)) => vec![format!("問：{} 答：{}", q, a)],
                    (Some(q), None) => vec![q.to_string()],
                    (None, Some(a)) => vec![a.to_string()],
                    (None, None) => vec![],
                }
            }
        }
    }
}
