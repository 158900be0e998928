use std::fmt;

use crate::Callable;

/// The maximum number of arguments a callable declares it accepts.
///
/// Every callable starts out [`Unbounded`](ParamLimit::Unbounded); a
/// [`Limit`](crate::Limit) adaptor declares a bound. Adaptors that compose
/// over a callable can read its limit through [`function_param_limit`] and
/// pick a strategy accordingly.
///
/// Limits are ordered so that any bounded limit is below `Unbounded`.
///
/// # Example
///
/// ```
/// use braid_core::ParamLimit;
///
/// let two = ParamLimit::Bounded(2);
///
/// assert!(two.admits(2));
/// assert!(!two.admits(3));
/// assert!(ParamLimit::Unbounded.admits(usize::MAX));
/// assert!(two < ParamLimit::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamLimit {
    /// At most this many arguments.
    Bounded(usize),
    /// No declared maximum.
    #[default]
    Unbounded,
}

impl ParamLimit {
    /// Returns the bound, or `None` if unbounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Self::Bounded(max) => Some(max),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` if a bound has been declared.
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    /// Returns `true` if a call with `arity` arguments is within the limit.
    #[must_use]
    pub const fn admits(self, arity: usize) -> bool {
        match self {
            Self::Bounded(max) => arity <= max,
            Self::Unbounded => true,
        }
    }
}

impl fmt::Display for ParamLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(1) => write!(f, "at most 1 argument"),
            Self::Bounded(max) => write!(f, "at most {max} arguments"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Returns the parameter limit `F` declares when called with `Args`.
///
/// This is a compile-time query: it reads [`Callable::PARAM_LIMIT`] and
/// never calls anything.
///
/// # Example
///
/// ```
/// use braid_core::{ParamLimit, function_param_limit, limit_c, typenum::U2};
///
/// fn sum(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// let limited = limit_c::<U2, _>(sum);
///
/// assert_eq!(
///     function_param_limit::<fn(i32, i32) -> i32, (i32, i32)>(),
///     ParamLimit::Unbounded,
/// );
/// assert_eq!(param_limit_of(&limited), ParamLimit::Bounded(2));
///
/// fn param_limit_of<F: braid_core::Callable<(i32, i32)>>(_: &F) -> ParamLimit {
///     function_param_limit::<F, (i32, i32)>()
/// }
/// ```
#[must_use]
pub const fn function_param_limit<F, Args>() -> ParamLimit
where
    F: Callable<Args> + ?Sized,
{
    F::PARAM_LIMIT
}
