/*!
Constants for the stack container.
*/

/// Number of slots allocated by [`Stack::new`](crate::Stack::new)
pub const DEFAULT_CAPACITY: usize = 1;

/// Slots added to the buffer by every `emplace`
pub const GROWTH_STEP: usize = 1;
