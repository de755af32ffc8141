/*! Per-category corpus extraction.

Each corpus [Category] knows where its dump lives, how to compose a text
unit out of a raw record, and which gates a candidate must pass. The
[Extractor] walks the first files of a category's dump and accumulates a
candidate pool of cleaned strings, ready for sampling.
!*/
mod categories;
mod extractor;
mod record;

pub use categories::Category;
pub use extractor::{Extractor, DEFAULT_MAX_FILES};
pub use record::RawRecord;
