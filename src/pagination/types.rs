//! Pagination types
//!
//! Defines the state of a single iteration pass.

/// Where a collection is within its current iteration pass
///
/// ```text
/// Uninitialized -> Counting -> Ready -> {Ready -> Producing -> Ready}* -> Exhausted
///                     |                              |
///                     +----------> Failed <----------+
/// ```
///
/// `Counting` and `Producing` are only observed from outside if the future
/// driving them was dropped mid-request; such a pass is treated as `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    /// No pass has been started
    #[default]
    Uninitialized,
    /// Resolving the total count
    Counting,
    /// Waiting for the next advance
    Ready,
    /// Fetching the page for the next item
    Producing,
    /// Every item has been produced
    Exhausted,
    /// A transport fault ended the pass
    Failed,
}

impl PassState {
    /// Whether the pass can no longer produce items
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed)
    }

    /// Whether a request was in flight when the driving future was dropped
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Counting | Self::Producing)
    }
}
