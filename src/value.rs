use std::fmt;

/// A single measurement accepted by [`CsvWriter::value`](crate::CsvWriter::value).
///
/// The set is closed: only these numeric kinds can be written to a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::I32(v) => fmt::Display::fmt(v, f),
            FieldValue::U32(v) => fmt::Display::fmt(v, f),
            FieldValue::I64(v) => fmt::Display::fmt(v, f),
            FieldValue::U64(v) => fmt::Display::fmt(v, f),
            FieldValue::F32(v) => fmt::Display::fmt(v, f),
            FieldValue::F64(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::I32(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::U32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::I64(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::U64(value)
    }
}

// Counters are usually `usize`; every supported target fits it in 64 bits.
impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::U64(value as u64)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::F32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::F64(value)
    }
}
