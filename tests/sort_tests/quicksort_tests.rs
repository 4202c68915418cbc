//! Tests for quick_sort and the employee orderings
//!
//! These tests verify:
//! - Correct ordering for random, sorted, reversed and duplicate input
//! - Degenerate inputs (empty, single element)
//! - Each of the five SortKey orderings, including descending days

use std::cmp::Ordering;

use staffdb::array::DynamicArray;
use staffdb::sort::{quick_sort, SortKey};
use staffdb::Employee;

// =============================================================================
// Helper Functions
// =============================================================================

/// Deterministic pseudo-random sequence (LCG)
fn pseudo_random(count: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 1000) as i64
        })
        .collect()
}

fn array_from(values: &[i64]) -> DynamicArray<i64> {
    let mut array = DynamicArray::new();
    for &v in values {
        array.push_back(v).unwrap();
    }
    array
}

fn sorted_with_quick_sort(values: &[i64]) -> Vec<i64> {
    let mut array = array_from(values);
    quick_sort(&mut array, |a, b| a.cmp(b));
    array.as_slice().to_vec()
}

fn sample_employees() -> DynamicArray<Employee> {
    let rows = [
        (1004, "Dave", "Sales", "2024-03-01", 18),
        (1001, "alice", "Engineering", "2024-01-15", 22),
        (1003, "Carol", "Finance", "2023-12-31", 22),
        (1002, "Bob", "Engineering", "2024-01-02", 25),
        (1005, "Eve", "Admin", "2024-02-29", 0),
    ];

    let mut array = DynamicArray::new();
    for (id, name, dept, date, days) in rows {
        array
            .push_back(Employee::new(id, name, dept, date, days).unwrap())
            .unwrap();
    }
    array
}

fn assert_adjacent_order(array: &DynamicArray<Employee>, key: SortKey) {
    for pair in array.as_slice().windows(2) {
        assert_ne!(
            key.compare(&pair[0], &pair[1]),
            Ordering::Greater,
            "{:?} before {:?} under {}",
            pair[0],
            pair[1],
            key
        );
    }
}

// =============================================================================
// Generic Ordering Tests
// =============================================================================

#[test]
fn test_sort_random_matches_std() {
    for seed in 1..20 {
        let values = pseudo_random(200, seed);
        let mut expected = values.clone();
        expected.sort();

        assert_eq!(sorted_with_quick_sort(&values), expected, "seed {}", seed);
    }
}

#[test]
fn test_sort_already_sorted() {
    let values: Vec<i64> = (0..100).collect();

    assert_eq!(sorted_with_quick_sort(&values), values);
}

#[test]
fn test_sort_reverse_sorted() {
    let values: Vec<i64> = (0..100).rev().collect();
    let expected: Vec<i64> = (0..100).collect();

    assert_eq!(sorted_with_quick_sort(&values), expected);
}

#[test]
fn test_sort_with_duplicates() {
    let values = vec![3, 1, 3, 3, 0, 1, 2, 2, 3, 0];

    assert_eq!(
        sorted_with_quick_sort(&values),
        vec![0, 0, 1, 1, 2, 2, 3, 3, 3, 3]
    );
}

#[test]
fn test_sort_all_equal() {
    let values = vec![7; 33];

    assert_eq!(sorted_with_quick_sort(&values), values);
}

#[test]
fn test_sort_empty_and_single() {
    assert!(sorted_with_quick_sort(&[]).is_empty());
    assert_eq!(sorted_with_quick_sort(&[42]), vec![42]);
}

#[test]
fn test_sort_two_elements() {
    assert_eq!(sorted_with_quick_sort(&[2, 1]), vec![1, 2]);
    assert_eq!(sorted_with_quick_sort(&[1, 2]), vec![1, 2]);
}

#[test]
fn test_sort_custom_descending_comparator() {
    let mut array = array_from(&[5, 1, 4, 2, 3]);

    quick_sort(&mut array, |a, b| b.cmp(a));

    assert_eq!(array.as_slice(), &[5, 4, 3, 2, 1]);
}

#[test]
fn test_sort_keeps_capacity() {
    let mut array = array_from(&pseudo_random(10, 3));
    let capacity = array.capacity();

    quick_sort(&mut array, |a, b| a.cmp(b));

    assert_eq!(array.len(), 10);
    assert_eq!(array.capacity(), capacity);
}

// =============================================================================
// Employee Ordering Tests
// =============================================================================

#[test]
fn test_sort_by_id_ascending() {
    let mut employees = sample_employees();

    quick_sort(&mut employees, |a, b| SortKey::Id.compare(a, b));

    let ids: Vec<i32> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1001, 1002, 1003, 1004, 1005]);
}

#[test]
fn test_sort_by_name_is_bytewise() {
    let mut employees = sample_employees();

    quick_sort(&mut employees, |a, b| SortKey::Name.compare(a, b));

    // Uppercase sorts before lowercase in byte order
    let names: Vec<String> = employees.iter().map(|e| e.name.to_string()).collect();
    assert_eq!(names, vec!["Bob", "Carol", "Dave", "Eve", "alice"]);
}

#[test]
fn test_sort_by_department() {
    let mut employees = sample_employees();

    quick_sort(&mut employees, |a, b| SortKey::Department.compare(a, b));

    assert_adjacent_order(&employees, SortKey::Department);
    assert_eq!(employees.get(0).unwrap().department, "Admin");
    assert_eq!(employees.get(4).unwrap().department, "Sales");
}

#[test]
fn test_sort_by_attendance_date() {
    let mut employees = sample_employees();

    quick_sort(&mut employees, |a, b| SortKey::AttendanceDate.compare(a, b));

    let dates: Vec<String> = employees
        .iter()
        .map(|e| e.attendance_date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2023-12-31", "2024-01-02", "2024-01-15", "2024-02-29", "2024-03-01"]
    );
}

#[test]
fn test_sort_by_attendance_days_descending() {
    let mut employees = sample_employees();

    quick_sort(&mut employees, |a, b| SortKey::AttendanceDays.compare(a, b));

    let days: Vec<i32> = employees.iter().map(|e| e.attendance_days).collect();
    assert_eq!(days, vec![25, 22, 22, 18, 0]);
}

#[test]
fn test_every_key_satisfies_adjacent_predicate() {
    let keys = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Department,
        SortKey::AttendanceDate,
        SortKey::AttendanceDays,
    ];

    for key in keys {
        let mut employees = sample_employees();
        quick_sort(&mut employees, |a, b| key.compare(a, b));
        assert_adjacent_order(&employees, key);
        assert_eq!(employees.len(), 5);
    }
}

// =============================================================================
// SortKey Parsing Tests
// =============================================================================

#[test]
fn test_sort_key_from_str() {
    assert_eq!("id".parse::<SortKey>().unwrap(), SortKey::Id);
    assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
    assert_eq!("dept".parse::<SortKey>().unwrap(), SortKey::Department);
    assert_eq!("date".parse::<SortKey>().unwrap(), SortKey::AttendanceDate);
    assert_eq!("days".parse::<SortKey>().unwrap(), SortKey::AttendanceDays);
    assert!("salary".parse::<SortKey>().is_err());
}

#[test]
fn test_sort_key_display_round_trips() {
    for key in [SortKey::Id, SortKey::Department, SortKey::AttendanceDays] {
        assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
    }
}
