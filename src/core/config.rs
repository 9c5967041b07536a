/*!
Stack configuration.

Compile-time defaults come from Cargo features; [`StackConfig`] overrides
them per instance.
*/

use crate::core::constants::DEFAULT_CAPACITY;

/// What happens when a contract check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationPolicy {
    /// Unwind with a panic carrying the violation message
    Panic,

    /// Terminate the process immediately
    Abort,
}

impl ViolationPolicy {
    /// Policy selected by the `abort-on-violation` feature.
    pub const fn from_features() -> Self {
        if cfg!(feature = "abort-on-violation") {
            ViolationPolicy::Abort
        } else {
            ViolationPolicy::Panic
        }
    }
}

impl Default for ViolationPolicy {
    fn default() -> Self {
        Self::from_features()
    }
}

/// Construction parameters for a [`Stack`](crate::Stack)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackConfig {
    /// Number of default elements the stack starts with
    initial_size: usize,

    /// Reaction to contract violations
    policy: ViolationPolicy,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StackConfig {
    /// Configuration matching [`Stack::new`](crate::Stack::new)
    pub fn new() -> Self {
        Self {
            initial_size: DEFAULT_CAPACITY,
            policy: ViolationPolicy::from_features(),
        }
    }

    /// Set the number of elements allocated up front
    pub fn with_initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Set the violation policy
    pub fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the initial size
    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Get the violation policy
    pub fn policy(&self) -> ViolationPolicy {
        self.policy
    }
}
