mod count;
mod unroll;

use typenum::{Bit, UInt, UTerm, Unsigned};

pub use count::{Count, CountError, Iterations};
pub use unroll::Unroll;

use crate::{Callable, Decorated, Decoration, Decorator, ParamLimit, decorate};

/// A callable whose output can be fed back in as its input.
///
/// Implemented for every `F: Callable<(T,)>` whose output converts into `T`
/// (trivially so when the output *is* `T`). This is the requirement for
/// repeated self-application.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied repeatedly to `{T}`",
    label = "not self-composable over `{T}`",
    note = "`{Self}` must be callable with `({T},)` and its output must convert back into `{T}`"
)]
pub trait SelfComposable<T> {
    /// Applies the callable once.
    fn step(&self, value: T) -> T;
}

impl<F, T> SelfComposable<T> for F
where
    F: Callable<(T,)>,
    T: From<F::Output>,
{
    fn step(&self, value: T) -> T {
        T::from(self.call((value,)))
    }
}

/// A repeat count, associating each count type with its strategy.
///
/// Compile-time counts (`typenum` unsigned integers) use [`Unrolled`];
/// run-time counts (unsigned primitives and [`Count`]) use [`Looped`].
pub trait RepeatCount {
    /// The decorator that carries out the repetition.
    type Strategy: Default;
}

impl RepeatCount for UTerm {
    type Strategy = Unrolled;
}

impl<U: Unsigned, B: Bit> RepeatCount for UInt<U, B> {
    type Strategy = Unrolled;
}

macro_rules! impl_runtime_repeat_count {
    ($($ty:ty),+) => {
        $(
            impl RepeatCount for $ty {
                type Strategy = Looped;
            }
        )+
    };
}

impl_runtime_repeat_count!(u8, u16, u32, u64, usize, Count);

/// The [`repeat`] adaptor before a callable has been wrapped.
pub type Repeat<C> = Decoration<C, <C as RepeatCount>::Strategy>;

/// A callable wrapped by [`repeat`].
pub type Repeated<F, C> = Decorated<F, C, <C as RepeatCount>::Strategy>;

/// Creates an adaptor that applies a callable to its own output `count` times.
///
/// The count is either a `typenum` constant, unrolled at compile time, or a
/// run-time unsigned integer, iterated in a loop. Both give the same result
/// for the same count, and a count of zero returns the input unchanged.
///
/// `repeat` is a decoration with the count as payload, so the result is
/// wrapped with [`wrap`](Decoration::wrap) and the repeated callable is
/// unary.
///
/// # Example
///
/// ```
/// use braid_core::{Callable, repeat, typenum::U5};
///
/// let increment = |x: i32| x + 1;
///
/// assert_eq!(repeat(U5::new()).wrap(increment).call((1,)), 6);
/// assert_eq!(repeat(5_u32).wrap(increment).call((1,)), 6);
/// assert_eq!(repeat(0_u32).wrap(increment).call((1,)), 1);
/// ```
///
/// A callable whose output cannot feed back into its input is rejected:
///
/// ```compile_fail
/// use braid_core::{Callable, repeat};
///
/// let describe = |x: i32| format!("{x}");
///
/// repeat(2_u32).wrap(describe).call((1,));
/// ```
#[must_use]
pub fn repeat<C: RepeatCount>(count: C) -> Repeat<C> {
    decorate(C::Strategy::default()).with(count)
}

/// Repeats with a compile-time count, unrolled during type checking.
///
/// Only the applications that actually happen are checked, so a count of
/// zero accepts any callable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrolled;

impl<N, F, T> Decorator<N, F, (T,)> for Unrolled
where
    N: Unroll<F, T>,
{
    type Output = T;
    const PARAM_LIMIT: ParamLimit = ParamLimit::Bounded(1);

    fn decorate(&self, _count: &N, function: &F, (value,): (T,)) -> T {
        N::unroll(function, value)
    }
}

/// Repeats with a run-time count, one application per loop iteration.
///
/// Every count the count type can represent is supported; there is no
/// depth limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Looped;

impl<C, F, T> Decorator<C, F, (T,)> for Looped
where
    C: Iterations,
    F: SelfComposable<T>,
{
    type Output = T;
    const PARAM_LIMIT: ParamLimit = ParamLimit::Bounded(1);

    fn decorate(&self, count: &C, function: &F, (value,): (T,)) -> T {
        (0..count.iterations()).fold(value, |value, _| function.step(value))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;
    use typenum::{U0, U1, U2, U3, U4, U5, U6, U7, U8, U16, U17, U100};

    use super::*;
    use crate::{function_param_limit, is_callable};

    fn increment(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn increments_five_times() {
        assert_eq!(repeat(U5::new()).wrap(increment).call((1,)), 6);
        assert_eq!(repeat(5_u8).wrap(increment).call((1,)), 6);
        assert_eq!(repeat(5_usize).wrap(increment).call((1,)), 6);
        assert_eq!(repeat(Count::new(5)).wrap(increment).call((1,)), 6);
    }

    #[test]
    fn zero_is_identity() {
        assert_eq!(repeat(U0::new()).wrap(increment).call((1,)), 1);
        assert_eq!(repeat(0_u64).wrap(increment).call((1,)), 1);
        assert_eq!(repeat(Count::default()).wrap(increment).call((-7,)), -7);
    }

    #[test]
    fn constant_counts_apply_exactly_n_times() {
        fn applications<N: Unroll<CountingIncrement, i32>>() -> usize {
            let counter = CountingIncrement::default();
            N::unroll(&counter, 0);
            counter.calls.get()
        }

        assert_eq!(applications::<U0>(), 0);
        assert_eq!(applications::<U1>(), 1);
        assert_eq!(applications::<U2>(), 2);
        assert_eq!(applications::<U3>(), 3);
        assert_eq!(applications::<U4>(), 4);
        assert_eq!(applications::<U6>(), 6);
        assert_eq!(applications::<U7>(), 7);
        assert_eq!(applications::<U8>(), 8);
        assert_eq!(applications::<U16>(), 16);
        assert_eq!(applications::<U17>(), 17);
        assert_eq!(applications::<U100>(), 100);
    }

    #[test]
    fn strategies_agree() {
        let double = |x: u64| x * 2;

        assert_eq!(
            repeat(U17::new()).wrap(double).call((1,)),
            repeat(17_u32).wrap(double).call((1,))
        );

        for n in 0..20_u32 {
            assert_eq!(repeat(n).wrap(double).call((1,)), 1_u64 << n);
        }
    }

    #[test]
    fn order_of_applications_is_preserved() {
        let append = |s: String| s + "ab";

        assert_eq!(
            repeat(U3::new()).wrap(append).call((String::from(">"),)),
            ">ababab"
        );
        assert_eq!(repeat(3_u16).wrap(append).call((String::new(),)), "ababab");
    }

    #[test]
    fn floating_point_halving() {
        let halve = |x: f64| x / 2.0;

        assert_relative_eq!(repeat(U4::new()).wrap(halve).call((1.0,)), 0.0625);
        assert_relative_eq!(repeat(10_u32).wrap(halve).call((1024.0,)), 1.0);
    }

    #[test]
    fn output_converts_back_into_input() {
        #[derive(Debug, PartialEq)]
        struct Meters(f64);

        impl From<f64> for Meters {
            fn from(value: f64) -> Self {
                Meters(value)
            }
        }

        let grow = |Meters(m): Meters| m * 1.5;

        assert_eq!(repeat(2_u32).wrap(grow).call((Meters(4.0),)), Meters(9.0));
    }

    #[test]
    fn large_runtime_counts() {
        let add_three = |x: u64| x + 3;

        assert_eq!(repeat(1_000_000_u32).wrap(add_three).call((0,)), 3_000_000);
    }

    #[test]
    fn stages_are_callables() {
        let repeated = repeat(U2::new()).call((increment as fn(i32) -> i32,));

        assert_eq!(repeated.call((40,)), 42);
    }

    #[test]
    fn repeated_callables_are_unary() {
        type Repeated5 = Repeated<fn(i32) -> i32, U5>;

        assert!(is_callable!(Repeated5: (i32,)));
        assert!(!is_callable!(Repeated5: (i32, i32)));
        assert!(!is_callable!(Repeated5: ()));
        assert_eq!(
            function_param_limit::<Repeated5, (i32,)>(),
            ParamLimit::Bounded(1)
        );
    }

    #[test]
    fn non_self_composable_functions_are_rejected() {
        type Describe = fn(i32) -> String;

        assert!(!is_callable!(Repeated<Describe, U2>: (i32,)));
        assert!(!is_callable!(Repeated<Describe, u32>: (i32,)));
        // No application happens, so nothing needs to compose.
        assert!(is_callable!(Repeated<Describe, U0>: (i32,)));
    }

    /// Counts how many times it has been applied.
    #[derive(Default)]
    struct CountingIncrement {
        calls: Cell<usize>,
    }

    impl Callable<(i32,)> for CountingIncrement {
        type Output = i32;

        fn call(&self, (x,): (i32,)) -> i32 {
            self.calls.set(self.calls.get() + 1);
            x + 1
        }
    }
}
