//! Error type of the fallible operations.

/// Errors reported by fallible constructors, checked accessors and [`Matrix::inverse`].
///
/// Shape errors that can be expressed in the type system (adding a 2-vector to a 3-vector,
/// multiplying non-conformable matrices) are compile errors and never show up here.
///
/// [`Matrix::inverse`]: crate::Matrix::inverse
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A runtime-sized source did not contain exactly as many elements as the destination.
    #[error("size mismatch: expected {expected} elements, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// The determinant's magnitude was below the tolerance, so no inverse was computed.
    #[error("matrix is singular (determinant {determinant} is below {tolerance})")]
    Singular { determinant: f64, tolerance: f64 },

    /// A checked index was not less than the container's length.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails with [`Error::SizeMismatch`] unless a source of known length has `expected` elements.
pub(crate) fn check_size(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::SizeMismatch { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::SizeMismatch {
                expected: 3,
                found: 2
            }
            .to_string(),
            "size mismatch: expected 3 elements, found 2"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 4 }.to_string(),
            "index 4 out of bounds for length 4"
        );
    }

    #[test]
    fn size_check() {
        assert_eq!(check_size(3, 3), Ok(()));
        assert_eq!(
            check_size(3, 7),
            Err(Error::SizeMismatch {
                expected: 3,
                found: 7
            })
        );
    }
}
