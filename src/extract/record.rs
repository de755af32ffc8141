//! Raw corpus records.
use serde::Deserialize;

/// One line of a corpus dump, parsed leniently.
///
/// Field presence varies by source and is never guaranteed; unknown fields
/// are ignored and empty strings count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    desc: Option<String>,
}

impl RawRecord {
    fn field(opt: &Option<String>) -> Option<&str> {
        opt.as_deref().filter(|s| !s.is_empty())
    }

    pub fn text(&self) -> Option<&str> {
        Self::field(&self.text)
    }

    pub fn content(&self) -> Option<&str> {
        Self::field(&self.content)
    }

    pub fn title(&self) -> Option<&str> {
        Self::field(&self.title)
    }

    pub fn question(&self) -> Option<&str> {
        Self::field(&self.question)
    }

    pub fn answer(&self) -> Option<&str> {
        Self::field(&self.answer)
    }

    pub fn desc(&self) -> Option<&str> {
        Self::field(&self.desc)
    }
}
