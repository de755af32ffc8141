/*! # zhtw-sampler

Builds the zhtw test corpus: draws seeded random samples from the large
public Chinese corpora published in brightmart/nlp_chinese_corpus,
cleans and filters the text, and writes one reviewable JSON document per
corpus category.

The crate can be used both as a tool (see the `zhtw-sampler` binary) and
as a lib to embed extraction, sampling and corpus writing into other
projects.

Generated `expected` fields are always provisional: even when an external
normalization engine pre-fills them, a human reviewer has the last word.
!*/
pub mod cleaning;
pub mod cli;
pub mod corpus;
pub mod download;
pub mod error;
pub mod extract;
pub mod filtering;
pub mod normalize;
pub mod pipelines;
pub mod sampling;
