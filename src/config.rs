use serde::{Deserialize, Serialize};

/// Row writer settings.
///
/// Deserializes with defaults for missing keys so it can be embedded in a host
/// application's own config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Flush the sink after every data row. The header is always flushed.
    pub flush_rows: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { flush_rows: true }
    }
}

/// Capacity limits for qualified statistic names such as `Bandwidth[0][2]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameLimits {
    /// Size of the name buffer, including one byte kept free as terminator.
    pub max_len: usize,
}

impl NameLimits {
    /// Buffer size used when none is configured.
    pub const DEFAULT_MAX_LEN: usize = 64;

    /// Characters reserved per subscript, i.e. a two digit index: `[99]`.
    pub const SUBSCRIPT_RESERVE: usize = 4;

    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for NameLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LEN)
    }
}
