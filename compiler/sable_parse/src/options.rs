//! Parser configuration.

/// Knobs for one parse job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Diagnostics recorded before the parser stops recording. The first
    /// diagnostic past the limit is replaced by a single "too many errors"
    /// note; later ones are dropped. Parsing itself always runs to the end.
    pub max_diagnostics: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DIAGNOSTICS: usize = 100;

    #[must_use]
    pub fn with_max_diagnostics(mut self, max_diagnostics: usize) -> Self {
        self.max_diagnostics = max_diagnostics;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_diagnostics: Self::DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}
