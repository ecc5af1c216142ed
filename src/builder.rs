//! Builder pattern utilities
//!
//! Marker types used by [`GenepoolBuilder`](crate::GenepoolBuilder) to track at
//! compile time which required parameters have been supplied.

use std::marker::PhantomData;

/// A required builder field that has not been supplied yet.
pub struct Unset<T> {
    _value: PhantomData<T>,
}

impl<T> Default for Unset<T> {
    fn default() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Unset<T> {
    /// Creates a marker for a field that is still missing.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A required builder field that holds its value.
#[derive(Clone)]
pub struct Set<T> {
    value: T,
}

impl<T> Set<T> {
    /// Wraps a supplied builder value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrows the inner value without consuming the wrapper.
    pub fn as_ref_inner(&self) -> &T {
        &self.value
    }
}
