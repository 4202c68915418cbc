//! DynamicArray implementation
//!
//! Vec-backed sequence with an explicit, deterministic capacity policy.

use tracing::trace;

use crate::error::Result;
use crate::StaffError;

use super::INITIAL_CAPACITY;

/// Growable array with geometric growth and quarter-occupancy shrink
///
/// `capacity` is tracked separately from the backing `Vec` so the reported
/// value follows the resize policy exactly, whatever the allocator hands out.
/// Invariant: `len() <= capacity()`, and `capacity() == 0` implies empty.
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array (size 0, capacity 0, no allocation)
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Append an element at the end
    ///
    /// Grows capacity first when full. If the allocation fails the array is
    /// left unchanged and the element is dropped along with the error.
    pub fn push_back(&mut self, element: T) -> Result<()> {
        if self.data.len() == self.capacity {
            let new_capacity = if self.capacity == 0 {
                INITIAL_CAPACITY
            } else {
                self.capacity
                    .checked_mul(2)
                    .ok_or_else(|| StaffError::OutOfMemory("capacity overflow".to_string()))?
            };
            self.resize(new_capacity)?;
        }

        self.data.push(element);
        Ok(())
    }

    /// Element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, or `None` past the end
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Remove and return the element at `index`
    ///
    /// Later elements shift one slot toward the front, keeping their order.
    /// May shrink capacity afterwards (see module docs).
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(StaffError::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        let removed = self.data.remove(index);

        let size = self.data.len();
        if size > 0 && size < self.capacity / 4 {
            let new_capacity = (self.capacity / 2).max(INITIAL_CAPACITY);
            self.data.shrink_to(new_capacity);
            trace!(from = self.capacity, to = new_capacity, "Shrinking array");
            self.capacity = new_capacity;
        }

        Ok(removed)
    }

    /// Drop every element; capacity is kept
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Move every element of `other` to the end of `self`
    ///
    /// Capacity is grown (by the same doubling rule) before any element
    /// moves, so on allocation failure neither array is modified.
    pub fn append(&mut self, other: DynamicArray<T>) -> Result<()> {
        let needed = self
            .data
            .len()
            .checked_add(other.len())
            .ok_or_else(|| StaffError::OutOfMemory("capacity overflow".to_string()))?;

        if needed > self.capacity {
            let mut new_capacity = self.capacity.max(INITIAL_CAPACITY);
            while new_capacity < needed {
                new_capacity = new_capacity
                    .checked_mul(2)
                    .ok_or_else(|| StaffError::OutOfMemory("capacity overflow".to_string()))?;
            }
            self.resize(new_capacity)?;
        }

        self.data.extend(other.data);
        Ok(())
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no live elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated slots according to the resize policy
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the live elements (used for in-place sorting)
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Reallocate the backing store so it can hold `new_capacity` elements
    fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let additional = new_capacity.saturating_sub(self.data.len());
        self.data
            .try_reserve_exact(additional)
            .map_err(|e| StaffError::OutOfMemory(e.to_string()))?;

        trace!(from = self.capacity, to = new_capacity, "Growing array");
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
