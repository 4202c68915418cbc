//! Manager Module
//!
//! Owns the employee collection and the id counter.
//!
//! ## Responsibilities
//! - Assign unique, never-reused ids
//! - Validate input before any mutation
//! - Search (by id, name substring, department), sort, aggregate
//! - Hand loaded records over from the storage layer

use std::collections::HashSet;

use tracing::debug;

use crate::array::DynamicArray;
use crate::error::Result;
use crate::record::Employee;
use crate::sort::{quick_sort, SortKey};
use crate::StaffError;

/// First id handed out by a fresh manager
pub const BASE_ID: i32 = 1001;

/// Search criteria accepted by [`RecordManager::search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQuery<'a> {
    /// Exact id match
    Id(i32),
    /// Substring of the name
    Name(&'a str),
    /// Exact department match
    Department(&'a str),
}

impl SearchQuery<'_> {
    fn matches(&self, employee: &Employee) -> bool {
        match *self {
            SearchQuery::Id(id) => employee.id == id,
            SearchQuery::Name(fragment) => employee.name.contains(fragment),
            SearchQuery::Department(department) => employee.department == department,
        }
    }
}

/// The in-memory employee collection
///
/// Records are owned exclusively: removing one hands it back to the caller,
/// dropping the manager drops every record.
#[derive(Debug)]
pub struct RecordManager {
    records: DynamicArray<Employee>,
    next_id: i32,
}

impl RecordManager {
    pub fn new() -> Self {
        Self {
            records: DynamicArray::new(),
            next_id: BASE_ID,
        }
    }

    /// Add an employee and return the id it was given
    ///
    /// Rejects negative `attendance_days` with `InvalidParameter` before
    /// anything changes. The id counter only advances on success.
    pub fn add(
        &mut self,
        name: &str,
        department: &str,
        attendance_date: &str,
        attendance_days: i32,
    ) -> Result<i32> {
        let id = self.next_id;
        let next = id
            .checked_add(1)
            .ok_or_else(|| StaffError::InvalidParameter("employee ids exhausted".to_string()))?;

        let employee = Employee::new(id, name, department, attendance_date, attendance_days)?;
        self.records.push_back(employee)?;
        self.next_id = next;

        debug!(id, "Added employee");
        Ok(id)
    }

    /// Remove the record at `index` and return it
    pub fn remove_at(&mut self, index: usize) -> Result<Employee> {
        let removed = self.records.remove_at(index)?;
        debug!(id = removed.id, index, "Removed employee");
        Ok(removed)
    }

    /// Remove the record with `id` and return it
    pub fn remove_by_id(&mut self, id: i32) -> Result<Employee> {
        let index = self.position(id).ok_or(StaffError::NotFound(id))?;
        self.remove_at(index)
    }

    /// Overwrite every field of record `id` except the id itself
    ///
    /// Position in the collection is unchanged.
    pub fn update(
        &mut self,
        id: i32,
        name: &str,
        department: &str,
        attendance_date: &str,
        attendance_days: i32,
    ) -> Result<()> {
        let employee = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StaffError::NotFound(id))?;

        employee.overwrite(name, department, attendance_date, attendance_days)?;
        debug!(id, "Updated employee");
        Ok(())
    }

    /// Collect borrowed references to every matching record, in order
    pub fn search(&self, query: SearchQuery<'_>) -> Result<DynamicArray<&Employee>> {
        let mut results = DynamicArray::new();
        for employee in self.records.iter().filter(|e| query.matches(e)) {
            results.push_back(employee)?;
        }
        Ok(results)
    }

    /// Reorder the collection in place
    pub fn sort(&mut self, key: SortKey) {
        quick_sort(&mut self.records, |a, b| key.compare(a, b));
        debug!(%key, "Sorted employees");
    }

    /// Total attendance days for dates starting with `year_month` (`YYYY-MM`)
    pub fn monthly_attendance(&self, year_month: &str) -> i64 {
        self.attendance_with_prefix(year_month)
    }

    /// Total attendance days for dates starting with `year` (`YYYY`)
    pub fn yearly_attendance(&self, year: &str) -> i64 {
        self.attendance_with_prefix(year)
    }

    /// All records, in their current order
    pub fn records(&self) -> &DynamicArray<Employee> {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.records.get(index)
    }

    /// Look up a record by id
    pub fn find(&self, id: i32) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Id the next `add` will assign
    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append records decoded from disk and adopt their id counter
    ///
    /// Fails without touching the manager when the incoming ids repeat
    /// (`InvalidFile`) or collide with ids already held (`InvalidParameter`).
    /// The counter only moves forward and always ends past every live id;
    /// with no stored counter it is one past the largest id held, never
    /// below `BASE_ID`.
    pub(crate) fn restore(
        &mut self,
        records: DynamicArray<Employee>,
        next_id: Option<i32>,
    ) -> Result<()> {
        let mut incoming = HashSet::with_capacity(records.len());
        for employee in &records {
            if !incoming.insert(employee.id) {
                return Err(StaffError::InvalidFile(format!(
                    "employee id {} appears more than once",
                    employee.id
                )));
            }
        }

        if let Some(clash) = self.records.iter().find(|e| incoming.contains(&e.id)) {
            return Err(StaffError::InvalidParameter(format!(
                "employee id {} is already loaded",
                clash.id
            )));
        }

        self.records.append(records)?;

        let past_live = self
            .records
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(BASE_ID, |max| max.max(BASE_ID - 1).saturating_add(1));

        if let Some(stored) = next_id.filter(|&id| id < past_live) {
            debug!(stored, adopted = past_live, "Stored next_id is behind live ids");
        }
        self.next_id = next_id.unwrap_or(BASE_ID).max(self.next_id).max(past_live);
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|e| e.id == id)
    }

    fn attendance_with_prefix(&self, prefix: &str) -> i64 {
        self.records
            .iter()
            .filter(|e| e.attendance_date.starts_with(prefix))
            .map(|e| i64::from(e.attendance_days))
            .sum()
    }
}

impl Default for RecordManager {
    fn default() -> Self {
        Self::new()
    }
}
