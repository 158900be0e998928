use std::fmt;

use thiserror::Error;

/// A run-time repeat count.
///
/// Unsigned integers are repeat counts as they are. `Count` is the checked
/// way in for signed values: converting a negative number fails with
/// [`CountError::Negative`] instead of wrapping around.
///
/// ```
/// use braid_core::{Callable, Count, CountError, repeat};
///
/// let steps: i64 = 3;
/// let count = Count::try_from(steps)?;
///
/// assert_eq!(repeat(count).wrap(|x: i32| x * 2).call((1,)), 8);
/// assert_eq!(Count::try_from(-1_i32), Err(CountError::Negative(-1)));
/// # Ok::<(), CountError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Count(u64);

impl Count {
    /// Creates a count.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when creating a [`Count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CountError {
    #[error("repeat count must not be negative, got {0}")]
    Negative(i64),
}

impl From<u64> for Count {
    fn from(count: u64) -> Self {
        Self(count)
    }
}

macro_rules! impl_count_from_unsigned {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Count {
                fn from(count: $ty) -> Self {
                    Self(u64::from(count))
                }
            }
        )+
    };
}

impl_count_from_unsigned!(u8, u16, u32);

macro_rules! impl_count_try_from_signed {
    ($($ty:ty),+) => {
        $(
            impl TryFrom<$ty> for Count {
                type Error = CountError;

                fn try_from(count: $ty) -> Result<Self, Self::Error> {
                    u64::try_from(count)
                        .map(Self)
                        .map_err(|_| CountError::Negative(i64::from(count)))
                }
            }
        )+
    };
}

impl_count_try_from_signed!(i8, i16, i32, i64);

impl TryFrom<isize> for Count {
    type Error = CountError;

    fn try_from(count: isize) -> Result<Self, Self::Error> {
        if count < 0 {
            return Err(CountError::Negative(
                i64::try_from(count).unwrap_or(i64::MIN),
            ));
        }
        Ok(Self(u64::try_from(count.unsigned_abs()).unwrap_or(u64::MAX)))
    }
}

/// A value that says how many times a loop should run.
///
/// Implemented for the unsigned primitives and [`Count`].
pub trait Iterations {
    fn iterations(&self) -> u64;
}

macro_rules! impl_iterations {
    ($($ty:ty),+) => {
        $(
            impl Iterations for $ty {
                fn iterations(&self) -> u64 {
                    u64::from(*self)
                }
            }
        )+
    };
}

impl_iterations!(u8, u16, u32, u64);

impl Iterations for usize {
    fn iterations(&self) -> u64 {
        u64::try_from(*self).unwrap_or(u64::MAX)
    }
}

impl Iterations for Count {
    fn iterations(&self) -> u64 {
        self.0
    }
}
