//! Record Module
//!
//! The employee record and its fixed-width on-disk representation.
//!
//! ## Record Layout (152 bytes, packed, little-endian)
//! ```text
//! ┌──────────┬────────────────┬────────────────┬──────────────┬──────────┐
//! │ id: i32  │ name [u8; 64]  │ dept [u8; 64]  │ date [u8;16] │ days i32 │
//! └──────────┴────────────────┴────────────────┴──────────────┴──────────┘
//! ```
//! Text fields hold at most `N - 1` bytes and are NUL padded.

mod employee;
mod text;

pub use employee::Employee;
pub use text::FixedText;

/// Capacity of the name field (including the NUL terminator)
pub const NAME_LEN: usize = 64;

/// Capacity of the department field (including the NUL terminator)
pub const DEPARTMENT_LEN: usize = 64;

/// Capacity of the attendance date field (including the NUL terminator)
pub const DATE_LEN: usize = 16;

/// Encoded size of one employee record
pub const RECORD_SIZE: usize = 4 + NAME_LEN + DEPARTMENT_LEN + DATE_LEN + 4;
