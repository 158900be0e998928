//! Decorating functions: built-in tracing and a hand-written decorator.
//!
//! Run with `RUST_LOG=debug` to see the events emitted by `traced`.

use braid_core::{Callable, Decorator, decorate, traced};
use tracing_subscriber::EnvFilter;

fn sum(x: i32, y: i32) -> i32 {
    x + y
}

/// Clamps the wrapped function's result to a range.
#[derive(Debug, Clone, Copy)]
struct Clamp;

impl<F, Args> Decorator<(i32, i32), F, Args> for Clamp
where
    F: Callable<Args, Output = i32>,
{
    type Output = i32;

    fn decorate(&self, &(low, high): &(i32, i32), function: &F, args: Args) -> i32 {
        function.call(args).clamp(low, high)
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let traced_sum = traced("calling sum").wrap(sum);
    tracing::info!(result = traced_sum.call((1, 2)), "traced sum");

    let percent = decorate(Clamp).with((0, 100));
    let clamped_sum = percent.wrap(sum);
    let clamped_product = percent.wrap(|x: i32, y: i32| x * y);

    tracing::info!(
        sum = clamped_sum.call((60, 70)),
        product = clamped_product.call((-3, 4)),
        "clamped to 0..=100"
    );

    // Decorators stack: the clamp runs inside the trace.
    let both = traced("calling clamped sum").wrap(clamped_sum);
    tracing::info!(result = both.call((99, 2)), "traced and clamped");
}
