//! CSV output for simulator statistics: a two-phase row writer plus helpers
//! for naming per-channel/rank/bank counters.

pub mod config;
pub mod error;
pub mod index;
pub mod value;
pub mod writer;

pub use crate::config::{NameLimits, WriterConfig};
pub use crate::error::{Result, StatCsvError};
pub use crate::index::{
    index_name, index_name2, index_name3, try_index_name, try_index_name2, try_index_name3,
};
pub use crate::value::FieldValue;
pub use crate::writer::{CsvWriter, WriterState};
