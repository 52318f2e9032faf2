//! Qualified names for statistics indexed by channel, rank and bank.
//!
//! `index_name("Bandwidth", 0)` gives `Bandwidth[0]`, `index_name2` and
//! `index_name3` add a second and third subscript.
use crate::config::NameLimits;
use crate::error::{Result, StatCsvError};

impl NameLimits {
    /// Build `base[i]` within these limits.
    pub fn index_name(&self, base: &str, i: u32) -> Result<String> {
        self.qualify(base, &[i])
    }

    /// Build `base[i][j]` within these limits.
    pub fn index_name2(&self, base: &str, i: u32, j: u32) -> Result<String> {
        self.qualify(base, &[i, j])
    }

    /// Build `base[i][j][k]` within these limits.
    pub fn index_name3(&self, base: &str, i: u32, j: u32, k: u32) -> Result<String> {
        self.qualify(base, &[i, j, k])
    }

    /// Validate and format a qualified name.
    ///
    /// Two checks apply:
    /// - the base name plus `SUBSCRIPT_RESERVE` per subscript must not exceed `max_len`
    /// - the formatted name must leave one byte of `max_len` free, so wide
    ///   indices are rejected rather than cut off
    fn qualify(&self, base: &str, indices: &[u32]) -> Result<String> {
        let reserved = base.len() + indices.len() * Self::SUBSCRIPT_RESERVE;
        if reserved > self.max_len {
            return Err(StatCsvError::NameTooLong {
                name: base.to_owned(),
                len: reserved,
                max_len: self.max_len,
            });
        }

        let mut name = String::with_capacity(reserved);
        name.push_str(base);
        for i in indices {
            name.push('[');
            name.push_str(&i.to_string());
            name.push(']');
        }

        if name.len() >= self.max_len {
            return Err(StatCsvError::NameTooLong {
                len: name.len(),
                name,
                max_len: self.max_len,
            });
        }
        Ok(name)
    }
}

/// Build `base[i]` with the default limits, returning an error when it does not fit.
pub fn try_index_name(base: &str, i: u32) -> Result<String> {
    NameLimits::default().index_name(base, i)
}

/// Build `base[i][j]` with the default limits, returning an error when it does not fit.
pub fn try_index_name2(base: &str, i: u32, j: u32) -> Result<String> {
    NameLimits::default().index_name2(base, i, j)
}

/// Build `base[i][j][k]` with the default limits, returning an error when it does not fit.
pub fn try_index_name3(base: &str, i: u32, j: u32, k: u32) -> Result<String> {
    NameLimits::default().index_name3(base, i, j, k)
}

/// Build `base[i]`.
///
/// # Panics
///
/// Panics if the name exceeds [`NameLimits::DEFAULT_MAX_LEN`]. A base name that
/// long is a bug at the call site; use [`try_index_name`] to handle it instead.
///
/// The panic ends the process only when it reaches the main thread or the
/// binary is built with `panic = "abort"`. A `catch_unwind` or a panic on a
/// worker thread leaves the process running.
pub fn index_name(base: &str, i: u32) -> String {
    expect_fits(try_index_name(base, i))
}

/// Build `base[i][j]`.
///
/// # Panics
///
/// Panics if the name exceeds [`NameLimits::DEFAULT_MAX_LEN`], like [`index_name`].
pub fn index_name2(base: &str, i: u32, j: u32) -> String {
    expect_fits(try_index_name2(base, i, j))
}

/// Build `base[i][j][k]`.
///
/// # Panics
///
/// Panics if the name exceeds [`NameLimits::DEFAULT_MAX_LEN`], like [`index_name`].
pub fn index_name3(base: &str, i: u32, j: u32, k: u32) -> String {
    expect_fits(try_index_name3(base, i, j, k))
}

fn expect_fits(result: Result<String>) -> String {
    match result {
        Ok(name) => name,
        Err(err) => {
            tracing::error!(error = %err, "statistic name too long, raise NameLimits::max_len");
            panic!("{err}");
        }
    }
}
