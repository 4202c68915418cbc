//! Employee record definition and codec

use std::fmt;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::StaffError;

use super::{FixedText, DATE_LEN, DEPARTMENT_LEN, NAME_LEN, RECORD_SIZE};

/// A single attendance record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique id, assigned by the manager and never reused
    pub id: i32,

    pub name: FixedText<NAME_LEN>,

    pub department: FixedText<DEPARTMENT_LEN>,

    /// `YYYY-MM-DD`, kept as text and compared byte-wise
    pub attendance_date: FixedText<DATE_LEN>,

    /// Always >= 0
    pub attendance_days: i32,
}

impl Employee {
    /// Build a record, rejecting negative attendance days
    ///
    /// Text longer than its field is truncated.
    pub fn new(
        id: i32,
        name: &str,
        department: &str,
        attendance_date: &str,
        attendance_days: i32,
    ) -> Result<Self> {
        validate_days(attendance_days)?;

        Ok(Self {
            id,
            name: FixedText::new(name),
            department: FixedText::new(department),
            attendance_date: FixedText::new(attendance_date),
            attendance_days,
        })
    }

    /// Replace every field except the id
    ///
    /// Validation happens first; on error the record is untouched.
    pub fn overwrite(
        &mut self,
        name: &str,
        department: &str,
        attendance_date: &str,
        attendance_days: i32,
    ) -> Result<()> {
        validate_days(attendance_days)?;

        self.name = FixedText::new(name);
        self.department = FixedText::new(department);
        self.attendance_date = FixedText::new(attendance_date);
        self.attendance_days = attendance_days;
        Ok(())
    }

    /// Append the fixed-width encoding to `buf`
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32_le(self.id);
        buf.put_slice(self.name.raw());
        buf.put_slice(self.department.raw());
        buf.put_slice(self.attendance_date.raw());
        buf.put_i32_le(self.attendance_days);
    }

    /// Encode into a standalone buffer of exactly `RECORD_SIZE` bytes
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(RECORD_SIZE);
        self.encode(&mut buf);
        buf.freeze()
    }

    /// Decode one record from the front of `buf`
    ///
    /// Fails when fewer than `RECORD_SIZE` bytes remain. Attendance days are
    /// taken as stored; a negative value from a foreign file is not rejected.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < RECORD_SIZE {
            return Err(StaffError::FileRead(format!(
                "record needs {} bytes, {} available",
                RECORD_SIZE,
                buf.remaining()
            )));
        }

        let id = buf.get_i32_le();

        let mut name = [0u8; NAME_LEN];
        buf.copy_to_slice(&mut name);

        let mut department = [0u8; DEPARTMENT_LEN];
        buf.copy_to_slice(&mut department);

        let mut attendance_date = [0u8; DATE_LEN];
        buf.copy_to_slice(&mut attendance_date);

        let attendance_days = buf.get_i32_le();

        Ok(Self {
            id,
            name: FixedText::from_raw(name),
            department: FixedText::from_raw(department),
            attendance_date: FixedText::from_raw(attendance_date),
            attendance_days,
        })
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<20} {:<20} {:<12} {:<10}",
            self.id, self.name, self.department, self.attendance_date, self.attendance_days
        )
    }
}

fn validate_days(attendance_days: i32) -> Result<()> {
    if attendance_days < 0 {
        return Err(StaffError::InvalidParameter(format!(
            "attendance days must be non-negative, got {}",
            attendance_days
        )));
    }
    Ok(())
}
