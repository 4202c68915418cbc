//! Array Module
//!
//! Resizable sequence used as the storage substrate for every other component.
//!
//! ## Resize Policy
//! - Growth: when full, capacity becomes 4 (from 0) or doubles
//! - Shrink: after a removal leaves `0 < len < capacity / 4`,
//!   capacity becomes `max(capacity / 2, 4)`
//! - `clear()` never shrinks
//!
//! The array owns its elements. Holding borrowed views is done by storing
//! references (`DynamicArray<&T>`); dropping such an array never touches
//! the referenced values.

mod dynamic;

pub use dynamic::DynamicArray;

/// Capacity allocated on the first push into an empty array.
/// Also the floor a shrink never goes below.
pub const INITIAL_CAPACITY: usize = 4;
