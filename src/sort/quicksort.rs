//! Quicksort implementation

use std::cmp::Ordering;

use crate::array::DynamicArray;

/// Sort `array` in place so that `compare(a, b) != Greater` for every
/// adjacent pair. No-op for arrays with fewer than two elements.
pub fn quick_sort<T, F>(array: &mut DynamicArray<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_slice(array.as_mut_slice(), &mut compare);
}

/// Slice form of [`quick_sort`]
pub fn quick_sort_slice<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items, compare);

    let (left, right) = items.split_at_mut(pivot);
    quick_sort_slice(left, compare);
    // right[0] is the pivot, already in its final slot
    quick_sort_slice(&mut right[1..], compare);
}

/// Lomuto partition around the last element; returns the pivot's final index
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if compare(&items[j], &items[high]) != Ordering::Greater {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}
