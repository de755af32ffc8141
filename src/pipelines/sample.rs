//! Corpus sampling pipeline.
//!
//! One sequential pass per category: extract a candidate pool, draw a
//! seeded sample, assemble records, optionally pre-fill expected outputs,
//! and write `<dst>/<label>/sampled.json`.
//!
//! # Failure policy
//! Nothing in a category is fatal to the run: a missing source directory,
//! unreadable files or an empty pool reduce that category's output
//! (possibly to nothing), and the remaining categories still get
//! processed. The operator sees every degradation in the logs.
use std::path::PathBuf;

use log::{error, info, warn};

use super::Pipeline;
use crate::corpus::{CorpusDocument, CorpusMetadata, CorpusWriter, RecordBuilder};
use crate::error::Error;
use crate::extract::{Category, Extractor, DEFAULT_MAX_FILES};
use crate::normalize::{self, Normalize};
use crate::sampling::Sampler;

/// File name of the per-category output document.
pub const SAMPLED_FILE: &str = "sampled.json";

pub struct SampleCorpus {
    src: PathBuf,
    dst: PathBuf,
    count: usize,
    sampler: Sampler,
    max_files: usize,
    normalizer: Option<Box<dyn Normalize>>,
}

impl SampleCorpus {
    pub fn new(src: PathBuf, dst: PathBuf, count: usize, seed: u64) -> Self {
        Self {
            src,
            dst,
            count,
            sampler: Sampler::new(seed),
            max_files: DEFAULT_MAX_FILES,
            normalizer: None,
        }
    }

    /// Bound on the number of files read per category.
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Engine used to pre-fill `expected` fields. Without one, the
    /// fields stay empty for manual filling.
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalize>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Samples one category and writes its document.
    /// Returns the number of records written.
    fn run_category(&self, category: Category) -> Result<usize, Error> {
        let label = category.label();

        let extractor = Extractor::with_max_files(category, self.max_files);
        let pool = extractor.extract(&self.src)?;
        if pool.is_empty() {
            warn!("{}: empty candidate pool, nothing written", label);
            return Ok(0);
        }

        let sampled = self.sampler.sample(&pool, self.count);
        if sampled.len() < self.count {
            warn!(
                "{}: pool holds {} candidate(s), fewer than the {} requested",
                label,
                pool.len(),
                self.count
            );
        }

        let mut records = RecordBuilder::new(category).build(sampled);
        if let Some(normalizer) = &self.normalizer {
            normalize::fill_expected(&mut records, normalizer.as_ref());
        }

        let written = records.len();
        let document = CorpusDocument::new(CorpusMetadata::for_category(category), records);
        let path = self.dst.join(label).join(SAMPLED_FILE);
        CorpusWriter::write(&document, &path)?;

        info!("{}: wrote {} sample(s) to {:?}", label, written, path);
        Ok(written)
    }
}

impl Pipeline<usize> for SampleCorpus {
    /// Runs every category sequentially and returns the total number of
    /// samples written.
    fn run(&self) -> Result<usize, Error> {
        if !self.src.is_dir() {
            return Err(Error::Custom(format!(
                "source directory {:?} does not exist",
                self.src
            )));
        }

        let mut total = 0;
        for category in Category::ALL {
            match self.run_category(category) {
                Ok(written) => total += written,
                // one failing category must not stop the others
                Err(e) => error!("{}: {:?}", category.label(), e),
            }
        }

        info!("sampled {} record(s) in total", total);
        Ok(total)
    }
}
