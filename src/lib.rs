/*!
# LIFO Stack

A generic last-in, first-out container that owns a single fixed-length
buffer and spells out its value semantics: copies are deep, moves leave the
origin released, and every operation checks its preconditions at runtime.

## Overview

- `push` overwrites the top element in place
- `emplace` grows the buffer by one slot and places the new element on top
- `pop` lowers the logical size without shrinking the buffer
- [`swap`] exchanges two buffers in constant time

## Contract checks

A failed precondition is a programming error. The plain operations stop the
program (panic by default, abort with the `abort-on-violation` feature or a
per-instance [`ViolationPolicy`]). Every fallible operation also has a
`try_*` form returning [`ContractViolation`].

```
use lifo_stack::{Stack, swap};

let mut lhs: Stack<i32> = Stack::with_size(2);
let mut rhs: Stack<i32> = Stack::with_size(1);
lhs.push(2);
rhs.push(3);

swap(&mut lhs, &mut rhs);
assert_eq!((*lhs.top(), lhs.size()), (3, 1));
assert_eq!((*rhs.top(), rhs.size()), (2, 2));
```
*/

// Core container components
pub mod core;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used types for convenience
pub use crate::core::stack::{Stack, swap, try_swap};
pub use crate::core::config::{StackConfig, ViolationPolicy};
pub use crate::core::error::{ContractViolation, Operation, Result};
pub use crate::core::traits::Integrity;
pub use crate::core::constants::DEFAULT_CAPACITY;
