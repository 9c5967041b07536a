//! Core components of the stack container.
//!
//! This module contains the container itself together with the contract
//! checks, error types and configuration it is built on.

// The container
pub mod stack;

// Contract checking
pub mod contract;
pub mod traits;

// Configuration
pub mod config;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::stack::{Stack, swap, try_swap};
pub use self::config::{StackConfig, ViolationPolicy};
pub use self::error::{ContractViolation, Operation, Result};
pub use self::traits::Integrity;
