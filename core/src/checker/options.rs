//! Configuration options for the type checker.

/// Configuration options for type checking.
///
/// # Example
///
/// ```
/// use kinded_core::CheckOptions;
///
/// let options = CheckOptions { max_depth: 64 };
/// assert_eq!(CheckOptions::default().max_depth, 1000);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Maximum expression nesting depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}
