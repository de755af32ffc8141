/*! Corpus documents.

The persisted output format: one [CorpusDocument] per category, holding
provenance metadata and the list of [SampleRecord]s that human reviewers
edit in place.
!*/
mod builder;
mod document;
mod writer;

pub use builder::{RecordBuilder, AUTO_NORMALIZED_NOTE, AUTO_SAMPLED_NOTE};
pub use document::{CorpusDocument, CorpusMetadata, SampleRecord};
pub use writer::CorpusWriter;
