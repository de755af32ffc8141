//! Candidate pool extraction.
//!
//! Walks a category's dump directory and turns raw records into cleaned
//! candidate strings. These dumps are multi-gigabyte, so only the first
//! [DEFAULT_MAX_FILES] discovered files are read. This keeps sampling
//! fast but biases the pool toward the head of the file listing; see the
//! note on [Extractor::with_max_files].
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use glob::glob;
use itertools::Itertools;
use log::{debug, error, info, warn};

use super::{Category, RawRecord};
use crate::cleaning::TextCleaner;
use crate::error::Error;
use crate::filtering::{Filter, MinLength, ScriptDetector};

/// Default bound on the number of files read per category.
pub const DEFAULT_MAX_FILES: usize = 10;

const JSON_PATTERNS: &[&str] = &["*.json", "**/*.json", "*.json.gz", "**/*.json.gz"];
const TEXT_PATTERNS: &[&str] = &["*.txt"];

pub struct Extractor {
    category: Category,
    max_files: usize,
    cleaner: TextCleaner,
    script: ScriptDetector,
    min_length: Option<MinLength>,
}

impl Extractor {
    pub fn new(category: Category) -> Self {
        Self::with_max_files(category, DEFAULT_MAX_FILES)
    }

    /// `max_files` bounds the scan. Known sampling bias: files past the
    /// bound never contribute to the pool, so the pool only represents
    /// the head of the corpus in discovery order.
    pub fn with_max_files(category: Category, max_files: usize) -> Self {
        Self {
            category,
            max_files,
            cleaner: TextCleaner::default(),
            script: ScriptDetector::default(),
            min_length: category.min_size().map(MinLength::with_min_size),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Builds the candidate pool for this category.
    ///
    /// A missing source directory yields an empty pool; a file that
    /// cannot be read contributes zero records. Neither stops the run.
    pub fn extract(&self, source_root: &Path) -> Result<Vec<String>, Error> {
        let label = self.category.label();

        let dir = match self.resolve_dir(source_root) {
            Some(dir) => dir,
            None => {
                warn!(
                    "{}: no source directory under {:?} (tried {:?}), skipping",
                    label,
                    source_root,
                    self.category.source_dirs()
                );
                return Ok(Vec::new());
            }
        };

        let files = self.discover_files(&dir)?;
        info!("{}: found {} file(s) in {:?}", label, files.len(), dir);

        let mut pool = Vec::new();
        for path in files.iter().take(self.max_files) {
            if let Err(e) = self.collect_file(path, &mut pool) {
                error!("{}: could not read {:?}: {:?}", label, path, e);
            }
        }

        debug!("{}: {} candidate unit(s)", label, pool.len());
        Ok(pool)
    }

    /// First existing candidate directory, in preference order.
    fn resolve_dir(&self, source_root: &Path) -> Option<PathBuf> {
        self.category
            .source_dirs()
            .iter()
            .map(|name| source_root.join(name))
            .find(|path| path.is_dir())
    }

    /// JSON-lines files first (flat, then recursive, gzipped included),
    /// then category-specific part files, then plain text.
    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut files = Self::glob_all(dir, JSON_PATTERNS)?;
        if files.is_empty() {
            files = Self::glob_all(dir, self.category.fallback_patterns())?;
        }
        if files.is_empty() {
            files = Self::glob_all(dir, TEXT_PATTERNS)?;
        }
        Ok(files)
    }

    fn glob_all(dir: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();
        for pattern in patterns {
            let pattern = dir.join(pattern);
            for entry in glob(&pattern.to_string_lossy())? {
                match entry {
                    Ok(path) => files.push(path),
                    Err(e) => error!("unreadable path while scanning {:?}: {:?}", dir, e),
                }
            }
        }
        // flat and recursive patterns overlap
        Ok(files.into_iter().unique().collect())
    }

    fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, Error> {
        let file = File::open(path)?;
        if path.extension().map_or(false, |ext| ext == "gz") {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }

    /// Reads one file line by line into `pool`.
    ///
    /// Lines that fail to parse are skipped silently (these dumps are
    /// known to contain the occasional malformed line); an I/O error
    /// aborts this file only.
    fn collect_file(&self, path: &Path, pool: &mut Vec<String>) -> Result<(), Error> {
        for line in Self::open_reader(path)?.lines() {
            let line = line?;
            let record: RawRecord = match serde_json::from_str(line.trim()) {
                Ok(record) => record,
                Err(_) => continue,
            };

            for candidate in self.category.compose(&record) {
                if !self.script.detect(&candidate) {
                    continue;
                }
                if let Some(min_length) = &self.min_length {
                    if !min_length.detect(&candidate) {
                        continue;
                    }
                }
                let cleaned = self.cleaner.clean(&candidate);
                if !cleaned.is_empty() {
                    pool.push(cleaned);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn long_news_line() -> String {
        format!(
            r#"{{"title":"这是一个测试标题","content":"{}"}}"#,
            "这个国家的发展很快，时间会说明问题。".repeat(4)
        )
    }

    #[test]
    fn missing_directory_yields_empty_pool() {
        let root = tempfile::tempdir().unwrap();
        let pool = Extractor::new(Category::News).extract(root.path()).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn news_pool_applies_gates() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("news2016zh");
        std::fs::create_dir(&dir).unwrap();

        let mut f = File::create(dir.join("news.json")).unwrap();
        writeln!(f, "{}", long_news_line()).unwrap();
        // too short, even though it carries marker characters
        writeln!(f, r#"{{"content":"这个很短"}}"#).unwrap();
        // not json at all
        writeln!(f, "definitely not json").unwrap();

        let pool = Extractor::new(Category::News).extract(root.path()).unwrap();
        assert_eq!(pool.len(), 1);
        assert!(pool[0].starts_with("这是一个测试标题。"));
    }

    #[test]
    fn script_gate_rejects_non_simplified() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("wiki_zh");
        std::fs::create_dir(&dir).unwrap();

        let mut f = File::create(dir.join("data.json")).unwrap();
        writeln!(
            f,
            r#"{{"text":"{}"}}"#,
            "A purely latin paragraph that is definitely longer than fifty characters in total."
        )
        .unwrap();

        let pool = Extractor::new(Category::Wiki).extract(root.path()).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn webtext_halves_need_no_length() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("webtext2019zh");
        std::fs::create_dir(&dir).unwrap();

        let mut f = File::create(dir.join("web.json")).unwrap();
        writeln!(f, r#"{{"title":"这个怎么办","content":"没问题"}}"#).unwrap();

        let pool = Extractor::new(Category::Webtext)
            .extract(root.path())
            .unwrap();
        assert_eq!(pool, vec!["这个怎么办", "没问题"]);
    }

    #[test]
    fn reads_gzipped_json_lines() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("news2016zh");
        std::fs::create_dir(&dir).unwrap();

        let f = File::create(dir.join("news.json.gz")).unwrap();
        let mut gz = flate2::write::GzEncoder::new(f, flate2::Compression::default());
        writeln!(gz, "{}", long_news_line()).unwrap();
        gz.finish().unwrap();

        let pool = Extractor::new(Category::News).extract(root.path()).unwrap();
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn file_cap_bounds_the_scan() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("news2016zh");
        std::fs::create_dir(&dir).unwrap();

        for i in 0..5 {
            let mut f = File::create(dir.join(format!("part_{}.json", i))).unwrap();
            writeln!(f, "{}", long_news_line()).unwrap();
        }

        let pool = Extractor::with_max_files(Category::News, 2)
            .extract(root.path())
            .unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn wiki_part_file_fallback() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("wiki_zh").join("AA");
        std::fs::create_dir_all(&dir).unwrap();

        let mut f = File::create(dir.join("wiki_00")).unwrap();
        writeln!(
            f,
            r#"{{"text":"{}"}}"#,
            "这个国家的发展很快，时间会说明问题。".repeat(4)
        )
        .unwrap();

        let pool = Extractor::new(Category::Wiki).extract(root.path()).unwrap();
        assert_eq!(pool.len(), 1);
    }
}
