/*!
Fixed-buffer LIFO stack with explicit value semantics.

The stack owns a single contiguous buffer and a logical size. `push`
overwrites the element on top, `emplace` reallocates the buffer one slot
larger and places the new element there, and `pop` only lowers the logical
size. Copies duplicate the live elements into fresh storage; moves hand the
buffer over and leave the origin released.

Every operation checks its preconditions. The plain methods stop the program
on a violation (see [`ViolationPolicy`]); the `try_*` methods return the
[`ContractViolation`] instead and leave the stack untouched.
*/

use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::core::config::{StackConfig, ViolationPolicy};
use crate::core::constants::{DEFAULT_CAPACITY, GROWTH_STEP};
use crate::core::contract::{enforce, verify};
use crate::core::error::{ContractViolation, Operation, Result};
use crate::core::traits::Integrity;

/// A LIFO container owning a fixed-length buffer.
///
/// A stack is *valid* while it owns its buffer. Moving out of it with
/// [`take`](Stack::take) or [`move_from`](Stack::move_from), or calling
/// [`release`](Stack::release), leaves it released: it may then only be
/// dropped or assigned to.
pub struct Stack<T> {
    /// Owned storage, `None` once released
    data: Option<Box<[T]>>,
    /// Number of live elements at the bottom of `data`
    size: usize,
    /// Reaction to contract violations on this instance
    policy: ViolationPolicy,
}

impl<T: Default> Stack<T> {
    /// Create a stack holding a single default element.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CAPACITY)
    }

    /// Create a stack holding `size` default elements.
    ///
    /// A zero `size` is a contract violation.
    #[track_caller]
    pub fn with_size(size: usize) -> Self {
        let policy = ViolationPolicy::from_features();
        enforce(Self::allocate(size, policy), policy)
    }

    /// Checked form of [`with_size`](Stack::with_size).
    pub fn try_with_size(size: usize) -> Result<Self> {
        Self::allocate(size, ViolationPolicy::from_features())
    }

    /// Create a stack from a [`StackConfig`].
    #[track_caller]
    pub fn with_config(config: &StackConfig) -> Self {
        enforce(Self::allocate(config.initial_size(), config.policy()), config.policy())
    }

    fn allocate(size: usize, policy: ViolationPolicy) -> Result<Self> {
        verify(size > 0, ContractViolation::ZeroSize)?;

        let data: Box<[T]> = std::iter::repeat_with(T::default).take(size).collect();
        trace!("Allocated stack buffer with {} slots", size);

        Ok(Self {
            data: Some(data),
            size,
            policy,
        })
    }
}

impl<T> Stack<T> {
    /// Adopt `vec` as the buffer; its last element becomes the top.
    ///
    /// An empty vector is a contract violation.
    #[track_caller]
    pub fn from_vec(vec: Vec<T>) -> Self {
        enforce(Self::try_from_vec(vec), ViolationPolicy::from_features())
    }

    /// Checked form of [`from_vec`](Stack::from_vec).
    pub fn try_from_vec(vec: Vec<T>) -> Result<Self> {
        verify(!vec.is_empty(), ContractViolation::ZeroSize)?;

        let size = vec.len();
        Ok(Self {
            data: Some(vec.into_boxed_slice()),
            size,
            policy: ViolationPolicy::from_features(),
        })
    }

    /// Whether the stack still owns its buffer.
    pub fn is_valid(&self) -> bool {
        self.data.is_some()
    }

    /// Whether there are no live elements. Never fails.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Alias of [`is_empty`](Stack::is_empty).
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Length of the owned buffer, `0` once released.
    ///
    /// Equal to [`size`](Stack::size) except after `pop`, which leaves the
    /// buffer untouched.
    pub fn capacity(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len())
    }

    /// Violation policy of this instance.
    pub fn policy(&self) -> ViolationPolicy {
        self.policy
    }

    /// Replace the violation policy of this instance.
    pub fn set_policy(&mut self, policy: ViolationPolicy) {
        self.policy = policy;
    }

    /// Number of live elements.
    #[track_caller]
    pub fn size(&self) -> usize {
        enforce(self.try_size(), self.policy)
    }

    /// Checked form of [`size`](Stack::size).
    pub fn try_size(&self) -> Result<usize> {
        self.check_integrity(Operation::Size)?;
        Ok(self.size)
    }

    /// Reference to the top element.
    #[track_caller]
    pub fn top(&self) -> &T {
        enforce(self.try_top(), self.policy)
    }

    /// Checked form of [`top`](Stack::top).
    pub fn try_top(&self) -> Result<&T> {
        let live = self.try_live(Operation::Top)?;
        live.last().ok_or(ContractViolation::Unavailable { operation: Operation::Top })
    }

    /// Mutable reference to the top element.
    #[track_caller]
    pub fn top_mut(&mut self) -> &mut T {
        let policy = self.policy;
        enforce(self.try_top_mut(), policy)
    }

    /// Checked form of [`top_mut`](Stack::top_mut).
    pub fn try_top_mut(&mut self) -> Result<&mut T> {
        self.check_integrity(Operation::Top)?;

        let top = self.size - 1;
        self.data
            .as_deref_mut()
            .and_then(|data| data.get_mut(top))
            .ok_or(ContractViolation::Unavailable { operation: Operation::Top })
    }

    /// Overwrite the top element with `value`. The size does not change.
    #[track_caller]
    pub fn push(&mut self, value: T) {
        let policy = self.policy;
        enforce(self.try_push(value), policy)
    }

    /// Overwrite the top element with a clone of `value`.
    #[track_caller]
    pub fn push_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    /// Checked form of [`push`](Stack::push).
    pub fn try_push(&mut self, value: T) -> Result<()> {
        let top = self.try_top_mut().map_err(|_| ContractViolation::Unavailable {
            operation: Operation::Push,
        })?;
        *top = value;
        Ok(())
    }

    /// Grow the buffer by one slot and place `value` on top.
    ///
    /// Live elements keep their order; slots above the logical size left
    /// over from earlier pops are dropped by the reallocation.
    #[track_caller]
    pub fn emplace(&mut self, value: T) {
        let policy = self.policy;
        enforce(self.try_emplace(value), policy)
    }

    /// Grow the buffer by one slot and place a clone of `value` on top.
    #[track_caller]
    pub fn emplace_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.emplace(value.clone());
    }

    /// Checked form of [`emplace`](Stack::emplace).
    ///
    /// Unlike the other modifiers this accepts a valid stack that was
    /// popped down to no elements.
    pub fn try_emplace(&mut self, value: T) -> Result<()> {
        let old = self
            .data
            .take()
            .ok_or(ContractViolation::Unavailable { operation: Operation::Emplace })?;

        let mut grown = Vec::with_capacity(self.size + GROWTH_STEP);
        grown.extend(old.into_vec().into_iter().take(self.size));
        grown.push(value);

        self.data = Some(grown.into_boxed_slice());
        self.size += GROWTH_STEP;
        debug!("Grew stack buffer to {} slots", self.size);

        Ok(())
    }

    /// Drop the top element from the logical size.
    ///
    /// The buffer keeps its length; the popped slot is reused or discarded
    /// by the next `emplace`.
    #[track_caller]
    pub fn pop(&mut self) {
        let policy = self.policy;
        enforce(self.try_pop(), policy)
    }

    /// Checked form of [`pop`](Stack::pop).
    pub fn try_pop(&mut self) -> Result<()> {
        self.check_integrity(Operation::Pop)?;
        self.size -= 1;
        Ok(())
    }

    /// Move the contents out into a new stack, releasing `self`.
    #[track_caller]
    pub fn take(&mut self) -> Self {
        let policy = self.policy;
        enforce(self.try_take(), policy)
    }

    /// Checked form of [`take`](Stack::take).
    pub fn try_take(&mut self) -> Result<Self> {
        verify(self.is_usable(), ContractViolation::InvalidSource)?;

        let moved = Self {
            data: self.data.take(),
            size: mem::take(&mut self.size),
            policy: self.policy,
        };
        debug!("Moved stack buffer of {} slots", moved.capacity());

        verify(moved.is_usable(), ContractViolation::ZeroSize)?;
        verify(!self.is_valid() && self.is_empty(), ContractViolation::MoveNotDestructive)?;

        Ok(moved)
    }

    /// Move assignment: drop the current buffer and adopt the one owned by
    /// `source`, leaving `source` released.
    ///
    /// The violation policy of `self` is kept.
    #[track_caller]
    pub fn move_from(&mut self, source: &mut Self) {
        let policy = self.policy;
        enforce(self.try_move_from(source), policy)
    }

    /// Checked form of [`move_from`](Stack::move_from).
    pub fn try_move_from(&mut self, source: &mut Self) -> Result<()> {
        let operation = Operation::MoveAssignment;
        verify(self.is_usable(), ContractViolation::InvalidTarget { operation })?;
        verify(source.is_usable(), ContractViolation::InvalidOperand { operation })?;

        self.release();
        self.data = source.data.take();
        self.size = mem::take(&mut source.size);

        verify(self.is_usable(), ContractViolation::InvalidTarget { operation })?;
        verify(!source.is_valid() && source.is_empty(), ContractViolation::MoveNotDestructive)
    }

    /// Copy assignment: replace the buffer with a deep copy of the live
    /// elements of `source`.
    ///
    /// `&mut self` and `&source` cannot alias, so self-assignment never
    /// reaches this point.
    #[track_caller]
    pub fn assign(&mut self, source: &Self)
    where
        T: Clone,
    {
        let policy = self.policy;
        enforce(self.try_assign(source), policy)
    }

    /// Checked form of [`assign`](Stack::assign).
    pub fn try_assign(&mut self, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        let operation = Operation::CopyAssignment;
        verify(self.is_usable(), ContractViolation::InvalidTarget { operation })?;
        let live = source
            .try_live(operation)
            .map_err(|_| ContractViolation::InvalidOperand { operation })?;

        let copy: Box<[T]> = live.into();
        self.release();
        self.size = copy.len();
        self.data = Some(copy);
        trace!("Copied {} elements into stack buffer", self.size);

        Ok(())
    }

    /// Checked form of [`Clone::clone`].
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let live = self
            .try_live(Operation::CopyAssignment)
            .map_err(|_| ContractViolation::InvalidSource)?;

        Ok(Self {
            data: Some(live.into()),
            size: live.len(),
            policy: self.policy,
        })
    }

    /// Release the buffer. Calling this more than once is harmless.
    pub fn release(&mut self) {
        if let Some(data) = self.data.take() {
            trace!("Released stack buffer with {} slots", data.len());
        }
        self.size = 0;
    }

    /// Live elements, bottom first.
    pub(crate) fn try_live(&self, operation: Operation) -> Result<&[T]> {
        self.check_integrity(operation)?;
        self.data
            .as_deref()
            .and_then(|data| data.get(..self.size))
            .ok_or(ContractViolation::Unavailable { operation })
    }
}

/// Exchange the buffers of two stacks in constant time.
///
/// Both stacks must be valid and hold at least one element. Only the
/// buffers and sizes change hands; each stack keeps its own
/// [`ViolationPolicy`], as with [`Stack::move_from`] and [`Stack::assign`].
#[track_caller]
pub fn swap<T>(lhs: &mut Stack<T>, rhs: &mut Stack<T>) {
    let policy = lhs.policy;
    enforce(try_swap(lhs, rhs), policy)
}

/// Checked form of [`swap`].
pub fn try_swap<T>(lhs: &mut Stack<T>, rhs: &mut Stack<T>) -> Result<()> {
    verify(
        lhs.is_usable() && rhs.is_usable(),
        ContractViolation::Unavailable { operation: Operation::Swap },
    )?;

    mem::swap(&mut lhs.data, &mut rhs.data);
    mem::swap(&mut lhs.size, &mut rhs.size);
    debug!("Swapped stacks of size {} and {}", lhs.size, rhs.size);

    Ok(())
}

impl<T> Integrity for Stack<T> {
    fn is_valid(&self) -> bool {
        Stack::is_valid(self)
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Default> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    #[track_caller]
    fn clone(&self) -> Self {
        enforce(self.try_clone(), self.policy)
    }

    #[track_caller]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> TryFrom<Vec<T>> for Stack<T> {
    type Error = ContractViolation;

    fn try_from(vec: Vec<T>) -> Result<Self> {
        Self::try_from_vec(vec)
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (Some(lhs), Some(rhs)) => lhs.get(..self.size) == rhs.get(..other.size),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.data.as_deref().and_then(|data| data.get(..self.size));
        f.debug_struct("Stack")
            .field("elements", &live)
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize> zeroize::Zeroize for Stack<T> {
    fn zeroize(&mut self) {
        if let Some(data) = self.data.as_deref_mut() {
            for element in data.iter_mut() {
                element.zeroize();
            }
        }
    }
}
