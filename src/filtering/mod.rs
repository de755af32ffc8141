/*! Filtering utilities

Filters decide whether a candidate string is worth sampling.

Filters implement [filter::Filter], a pure detection trait:
two successive equal inputs yield two equal outputs.
!*/
mod filter;
mod length;
mod script;

pub use filter::Filter;
pub use length::MinLength;
pub use script::ScriptDetector;
