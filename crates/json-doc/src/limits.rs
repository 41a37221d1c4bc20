//! Resource limits applied while parsing.

/// Default maximum nesting of arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Bounds on the input a single parse accepts.
///
/// The parser is recursive, so `max_depth` is what keeps hostile inputs like
/// `[[[[...` from exhausting the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of arrays/objects. The top-level container is depth 1.
    pub max_depth: usize,
    /// Maximum input size in bytes.
    pub max_input_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

impl Limits {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: usize::MAX,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}
