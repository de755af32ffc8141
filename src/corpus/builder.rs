//! Sample record assembly.
use super::SampleRecord;
use crate::extract::Category;

/// Default note on every sampled record.
pub const AUTO_SAMPLED_NOTE: &str = "自動抽樣，需人工校驗 expected";

/// Note set when `expected` was filled by an external normalizer.
pub const AUTO_NORMALIZED_NOTE: &str = "自動轉換生成，需人工校驗";

/// Turns sampled texts into [SampleRecord]s, assigning sequential ids in
/// sampled order: `<label>_001`, `<label>_002`, …
pub struct RecordBuilder {
    category: Category,
}

impl RecordBuilder {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    pub fn build(&self, sampled: Vec<String>) -> Vec<SampleRecord> {
        sampled
            .into_iter()
            .enumerate()
            .map(|(idx, input)| SampleRecord {
                id: format!("{}_{:03}", self.category.label(), idx + 1),
                input,
                expected: String::new(),
                tags: self
                    .category
                    .tags()
                    .iter()
                    .map(|tag| tag.to_string())
                    .collect(),
                notes: AUTO_SAMPLED_NOTE.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_zero_padded() {
        let sampled = (0..5).map(|i| format!("文本 {}", i)).collect();
        let records = RecordBuilder::new(Category::News).build(sampled);

        assert_eq!(records[0].id, "news_001");
        assert_eq!(records[4].id, "news_005");
    }

    #[test]
    fn records_start_unverified() {
        let records = RecordBuilder::new(Category::Wiki).build(vec!["文本".to_string()]);

        assert_eq!(records[0].expected, "");
        assert_eq!(records[0].tags, vec!["wiki", "encyclopedia"]);
        assert_eq!(records[0].notes, AUTO_SAMPLED_NOTE);
    }

    #[test]
    fn empty_sample_builds_empty_list() {
        assert!(RecordBuilder::new(Category::Baike).build(Vec::new()).is_empty());
    }
}
