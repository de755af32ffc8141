use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::extract::Category;

const CORPUS_SOURCE: &str = "brightmart/nlp_chinese_corpus";
const CORPUS_SOURCE_URL: &str = "https://github.com/brightmart/nlp_chinese_corpus";

/// One test fixture. `expected` stays empty until an external
/// normalization pass or a human reviewer fills it in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleRecord {
    pub id: String,
    pub input: String,
    pub expected: String,
    pub tags: Vec<String>,
    pub notes: String,
}

/// Provenance of a sampled category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusMetadata {
    pub source: String,
    pub source_url: String,
    pub license: String,
    pub collected_date: String,
    pub description: String,
    pub auto_generated: bool,
}

impl CorpusMetadata {
    pub fn for_category(category: Category) -> Self {
        Self {
            source: CORPUS_SOURCE.to_string(),
            source_url: CORPUS_SOURCE_URL.to_string(),
            license: "待確認".to_string(),
            collected_date: Local::now().format("%Y-%m-%d").to_string(),
            description: format!("{} 語料自動抽樣", category.label()),
            auto_generated: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusDocument {
    pub metadata: CorpusMetadata,
    pub corpus: Vec<SampleRecord>,
}

impl CorpusDocument {
    pub fn new(metadata: CorpusMetadata, corpus: Vec<SampleRecord>) -> Self {
        Self { metadata, corpus }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_carries_provenance() {
        let meta = CorpusMetadata::for_category(Category::Wiki);
        assert_eq!(meta.source, CORPUS_SOURCE);
        assert!(meta.auto_generated);
        assert!(meta.description.starts_with("wiki"));
        // YYYY-MM-DD
        assert_eq!(meta.collected_date.len(), 10);
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = CorpusDocument::new(
            CorpusMetadata::for_category(Category::News),
            vec![SampleRecord {
                id: "news_001".to_string(),
                input: "简体输入".to_string(),
                expected: String::new(),
                tags: vec!["news".to_string(), "formal".to_string()],
                notes: "測試".to_string(),
            }],
        );

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: CorpusDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, parsed);
    }
}
