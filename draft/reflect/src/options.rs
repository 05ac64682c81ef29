//! Options for a catalogue walk.

use crate::naming::NameConvention;

/// Default nesting level below which examples are not described.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Controls how [`get`](crate::get) describes a sample.
///
/// ## Examples
///
/// ```
/// use draft_reflect::{NameConvention, Options};
///
/// let options = Options::default()
///     .with_naming(NameConvention::CamelCase)
///     .with_max_depth(4);
///
/// assert_eq!(options.naming, NameConvention::CamelCase);
/// assert_eq!(options.max_depth, 4);
/// assert_eq!(Options::snake_case().naming, NameConvention::SnakeCase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Convention applied to every object key.
    pub naming: NameConvention,
    /// Deepest nesting level (root is level 0) the walk will descend into.
    ///
    /// Arrays and objects at this level are described by kind only.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            naming: NameConvention::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Default options with snake_case field names.
    pub fn snake_case() -> Self {
        Self::default().with_naming(NameConvention::SnakeCase)
    }

    /// Sets the naming convention.
    pub fn with_naming(mut self, naming: NameConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Sets the level at which nested shapes are truncated.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
