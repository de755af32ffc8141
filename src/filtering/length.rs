//! length gating
use super::Filter;

/// Simple length filter.
/// Returns `false` if the provided string is not longer than
/// [MinLength::min_size] unicode codepoints.
///
/// [MinLength::min_size] is 50 by default.
pub struct MinLength {
    min_size: usize,
}

impl MinLength {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the filter's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for MinLength {
    fn detect(&self, text: &str) -> bool {
        text.chars().count() > self.min_size
    }
}

impl Default for MinLength {
    /// Default minimum length is 50 Unicode Codepoints
    fn default() -> Self {
        MinLength { min_size: 50 }
    }
}
