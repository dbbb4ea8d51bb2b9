//! OBJ-style index resolution.
//!
//! References are resolved against the number of elements seen so far in
//! the stream: positive values count from the first element (1-based),
//! negative values count back from the most recently appended one.

use thiserror::Error;

/// Failure to resolve a raw OBJ index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// OBJ indices are never zero.
    #[error("indices cannot be zero")]
    Zero,

    /// The reference points outside the elements seen so far.
    #[error("index {index} is out of range ({len} elements defined so far)")]
    OutOfRange { index: i64, len: usize },
}

/// Resolve `raw` against a sequence of `len` elements into a 0-based offset.
pub fn resolve(raw: i64, len: usize) -> Result<usize, IndexError> {
    let out_of_range = IndexError::OutOfRange { index: raw, len };

    if raw == 0 {
        return Err(IndexError::Zero);
    }

    let magnitude = usize::try_from(raw.unsigned_abs()).map_err(|_| out_of_range)?;
    if magnitude > len {
        return Err(out_of_range);
    }

    if raw > 0 {
        Ok(magnitude - 1)
    } else {
        Ok(len - magnitude)
    }
}
