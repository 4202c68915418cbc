//! Employee orderings

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::Employee;
use crate::StaffError;

/// Field an employee list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending, numeric
    Id,
    /// Ascending, byte-wise
    Name,
    /// Ascending, byte-wise
    Department,
    /// Ascending, byte-wise on the `YYYY-MM-DD` text
    AttendanceDate,
    /// Descending
    AttendanceDays,
}

impl SortKey {
    /// Compare two employees under this ordering
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Department => a.department.cmp(&b.department),
            SortKey::AttendanceDate => a.attendance_date.cmp(&b.attendance_date),
            SortKey::AttendanceDays => b.attendance_days.cmp(&a.attendance_days),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Department => "department",
            SortKey::AttendanceDate => "date",
            SortKey::AttendanceDays => "days",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = StaffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "department" | "dept" => Ok(SortKey::Department),
            "date" | "attendance-date" => Ok(SortKey::AttendanceDate),
            "days" | "attendance-days" => Ok(SortKey::AttendanceDays),
            other => Err(StaffError::InvalidParameter(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}
