use approx::assert_relative_eq;
use braid_core::{
    Callable, Decorator, Limit, ParamLimit, Rejection, capability, decorate, function_param_limit,
    is_callable, limit, limit_c, repeat,
    typenum::{U1, U2, U3, U5},
};

fn increment(x: i32) -> i32 {
    x + 1
}

fn sum(x: i32, y: i32) -> i32 {
    x + y
}

type Increment = fn(i32) -> i32;
type Sum = fn(i32, i32) -> i32;

/// Calls the wrapped function only when the payload allows it.
#[derive(Debug, Clone, Copy)]
struct Gate;

impl<F, Args> Decorator<bool, F, Args> for Gate
where
    F: Callable<Args>,
{
    type Output = Option<F::Output>;

    fn decorate(&self, open: &bool, function: &F, args: Args) -> Self::Output {
        open.then(|| function.call(args))
    }
}

#[test]
fn repeat_over_a_limited_function() {
    let unary = limit_c::<U1, _>(increment);

    assert_eq!(repeat(U5::new()).wrap(unary).call((1,)), 6);
    assert_eq!(repeat(5_u32).wrap(unary).call((1,)), 6);
}

#[test]
fn limit_over_a_repeated_function() {
    let add_three = limit(U1::new()).wrap(repeat(U3::new()).wrap(increment));

    assert_eq!(add_three.call((0,)), 3);
    assert_eq!(
        function_param_limit::<Limit<U1, braid_core::Repeated<Increment, U3>>, (i32,)>(),
        ParamLimit::Bounded(1)
    );
}

#[test]
fn decorate_over_a_limit_keeps_the_limit_in_force() {
    type Gated = braid_core::Decorated<Limit<U2, Sum>, bool, Gate>;

    let open = decorate(Gate).with(true).wrap(limit_c::<U2, _>(sum));
    let closed = decorate(Gate).with(false).wrap(limit_c::<U2, _>(sum));

    assert_eq!(open.call((2, 3)), Some(5));
    assert_eq!(closed.call((2, 3)), None);

    assert!(is_callable!(Gated: (i32, i32)));
    assert!(!is_callable!(Gated: (i32, i32, i32)));
}

#[test]
fn rejections_name_the_innermost_refusing_layer() {
    type Gated = braid_core::Decorated<Limit<U2, Sum>, bool, Gate>;

    let too_many = capability!(Gated: (i32, i32, i32));
    let wrong_type = capability!(Gated: (String, i32));

    assert_eq!(
        too_many.rejection().map(Rejection::component),
        Some("Limit<U2, fn(i32, i32) -> i32>")
    );
    assert_eq!(
        wrong_type.rejection().map(Rejection::component),
        Some("fn(i32, i32) -> i32")
    );
}

#[test]
fn decorating_changes_the_reported_limit_only_through_the_decorator() {
    type Gated = braid_core::Decorated<Limit<U2, Sum>, bool, Gate>;

    assert_eq!(
        function_param_limit::<Limit<U2, Sum>, (i32, i32)>(),
        ParamLimit::Bounded(2)
    );
    assert_eq!(
        function_param_limit::<Gated, (i32, i32)>(),
        ParamLimit::Unbounded
    );
}

#[test]
fn nested_limits_are_idempotent() {
    let once = limit_c::<U2, _>(sum);
    let twice = limit_c::<U2, _>(limit_c::<U2, _>(sum));

    for (x, y) in [(0, 0), (1, 2), (-5, 9)] {
        assert_eq!(once.call((x, y)), twice.call((x, y)));
    }
    assert_eq!(
        function_param_limit::<Limit<U2, Limit<U2, Sum>>, (i32, i32)>(),
        function_param_limit::<Limit<U2, Sum>, (i32, i32)>()
    );
}

#[test]
fn adaptor_stages_can_be_reused() {
    let twice = repeat(U2::new());
    let halve = |x: f64| x / 2.0;
    let square = |x: f64| x * x;

    assert_relative_eq!(twice.wrap(halve).call((10.0,)), 2.5);
    assert_relative_eq!(twice.wrap(square).call((3.0,)), 81.0);
}

#[test]
fn repeated_decorated_function() {
    let checked = decorate(|_: &(), f: &Increment, (x,): (i32,)| f(x).min(10))
        .with(())
        .wrap(increment as Increment);

    assert_eq!(repeat(4_u8).wrap(checked).call((0,)), 4);
    assert_eq!(repeat(40_u8).wrap(checked).call((0,)), 10);
}
