//! Repeating and limiting functions, with compile-time and run-time counts.

use braid_core::{
    Callable, Count, Limit, ParamLimit, function_param_limit, is_callable, limit, limit_c, repeat,
    typenum::{U1, U2, U10},
};
use tracing_subscriber::EnvFilter;

fn collatz(n: u64) -> u64 {
    if n % 2 == 0 { n / 2 } else { 3 * n + 1 }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Unrolled at compile time.
    let ten_steps = repeat(U10::new()).wrap(collatz);
    tracing::info!(start = 27, after = ten_steps.call((27,)), "collatz, ten steps");

    // Counted at run time; the count could come from anywhere.
    let requested: i64 = 111;
    match Count::try_from(requested) {
        Ok(count) => {
            let steps = repeat(count).wrap(collatz);
            tracing::info!(%count, after = steps.call((27,)), "collatz, run-time count");
        }
        Err(error) => tracing::error!(%error, "invalid repeat count"),
    }

    if let Err(error) = Count::try_from(-1_i64) {
        tracing::warn!(%error, "negative counts are rejected");
    }

    // Limits narrow what a callable accepts and record the bound.
    let pair_sum = limit_c::<U2, _>(|x: i32, y: i32| x + y);
    let unary = limit(U1::new()).wrap(collatz);

    tracing::info!(result = pair_sum.call((40, 2)), "limited sum");
    let unary_limit = function_param_limit::<Limit<U1, fn(u64) -> u64>, (u64,)>();
    tracing::info!(limit = %unary_limit, result = unary.call((6,)), "limited collatz");

    let three_args = is_callable!(Limit<U2, fn(i32, i32, i32) -> i32>: (i32, i32, i32));
    tracing::info!(three_args, "can a two-argument limit take three?");

    assert_eq!(
        function_param_limit::<Limit<U2, fn(i32, i32) -> i32>, (i32, i32)>(),
        ParamLimit::Bounded(2)
    );
}
