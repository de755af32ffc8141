//! Corpus document writer.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::CorpusDocument;
use crate::error::Error;

pub struct CorpusWriter;

impl CorpusWriter {
    /// Writes `document` at `path` as indented UTF-8 JSON, creating
    /// parent directories as needed.
    ///
    /// Any existing file is overwritten, no merge or backup. Non-ASCII
    /// characters are written literally, not escaped, so reviewers can
    /// read and edit the file directly.
    pub fn write(document: &CorpusDocument, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), document)?;
        Ok(())
    }
}
