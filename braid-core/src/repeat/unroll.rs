use typenum::{B0, B1, UInt, UTerm};

use super::SelfComposable;

/// Applies a callable to its own output a compile-time number of times.
///
/// Implemented for `typenum` unsigned integers by walking their binary
/// digits: each digit doubles the applications so far, and a set digit adds
/// one more. A count `N` therefore expands to exactly `N` applications in
/// a call tree of depth proportional to `log2(N)`.
pub trait Unroll<F, T> {
    /// Applies `function` to `value` as many times as `Self` counts.
    fn unroll(function: &F, value: T) -> T;
}

impl<F, T> Unroll<F, T> for UTerm {
    #[inline]
    fn unroll(_function: &F, value: T) -> T {
        value
    }
}

impl<U, F, T> Unroll<F, T> for UInt<U, B0>
where
    U: Unroll<F, T>,
{
    #[inline]
    fn unroll(function: &F, value: T) -> T {
        U::unroll(function, U::unroll(function, value))
    }
}

impl<U, F, T> Unroll<F, T> for UInt<U, B1>
where
    U: Unroll<F, T>,
    F: SelfComposable<T>,
{
    #[inline]
    fn unroll(function: &F, value: T) -> T {
        U::unroll(function, U::unroll(function, function.step(value)))
    }
}
