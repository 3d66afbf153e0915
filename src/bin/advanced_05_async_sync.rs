// Language Feature 5: Synchronous vs Asynchronous Calls
// The async versions hand the arithmetic to the blocking pool and await it,
// first one at a time and then all together.

use futures::future::join_all;
use oop_design_patterns::console;
use oop_design_patterns::PatternError;
use std::future::Future;
use std::pin::Pin;

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        let err = PatternError::DivideByZero { dividend: a };
        tracing::warn!(%err, "guarded division");
        console::failure("Error: division by zero is not allowed.");
        return f64::NAN;
    }
    a / b
}

// ============================================================================
// Example: Async wrappers
// ============================================================================

async fn run_blocking(op: fn(f64, f64) -> f64, a: f64, b: f64) -> anyhow::Result<f64> {
    Ok(tokio::task::spawn_blocking(move || op(a, b)).await?)
}

async fn add_async(a: f64, b: f64) -> anyhow::Result<f64> {
    run_blocking(add, a, b).await
}

async fn subtract_async(a: f64, b: f64) -> anyhow::Result<f64> {
    run_blocking(subtract, a, b).await
}

async fn multiply_async(a: f64, b: f64) -> anyhow::Result<f64> {
    run_blocking(multiply, a, b).await
}

async fn divide_async(a: f64, b: f64) -> anyhow::Result<f64> {
    run_blocking(divide, a, b).await
}

fn sync_results(a: f64, b: f64) -> [f64; 4] {
    [add(a, b), subtract(a, b), multiply(a, b), divide(a, b)]
}

/// Awaits each operation before starting the next.
async fn sequential_results(a: f64, b: f64) -> anyhow::Result<[f64; 4]> {
    let sum = add_async(a, b).await?;
    let difference = subtract_async(a, b).await?;
    let product = multiply_async(a, b).await?;
    let quotient = divide_async(a, b).await?;
    Ok([sum, difference, product, quotient])
}

type OpFuture = Pin<Box<dyn Future<Output = anyhow::Result<f64>> + Send>>;

/// Starts all four and awaits them together; results keep operation order.
async fn concurrent_results(a: f64, b: f64) -> anyhow::Result<Vec<f64>> {
    let pending: Vec<OpFuture> = vec![
        Box::pin(add_async(a, b)),
        Box::pin(subtract_async(a, b)),
        Box::pin(multiply_async(a, b)),
        Box::pin(divide_async(a, b)),
    ];
    join_all(pending).await.into_iter().collect()
}

fn print_results(suffix: &str, a: f64, b: f64, results: &[f64]) {
    let symbols = ["+", "-", "*", "/"];
    let labels = ["Add", "Subtract", "Multiply", "Divide"];
    for ((label, symbol), value) in labels.iter().zip(symbols).zip(results) {
        println!("{}{}: {} {} {} = {}", label, suffix, a, symbol, b, value);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_results() {
        assert_eq!(sync_results(10.0, 5.0), [15.0, 5.0, 50.0, 2.0]);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(divide(10.0, 0.0).is_nan());
    }

    #[tokio::test]
    async fn test_sequential_matches_sync() {
        let results = sequential_results(10.0, 5.0).await.unwrap();
        assert_eq!(results, sync_results(10.0, 5.0));
    }

    #[tokio::test]
    async fn test_concurrent_keeps_order() {
        let results = concurrent_results(10.0, 5.0).await.unwrap();
        assert_eq!(results, vec![15.0, 5.0, 50.0, 2.0]);
    }

    #[tokio::test]
    async fn test_async_divide_by_zero() {
        assert!(divide_async(1.0, 0.0).await.unwrap().is_nan());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    console::init_logging();
    console::header("Sync vs Async");
    let (a, b) = (10.0, 5.0);

    println!("=== Synchronous ===");
    print_results("", a, b, &sync_results(a, b));
    println!();

    println!("=== Asynchronous (sequential awaits) ===");
    print_results(" (Async)", a, b, &sequential_results(a, b).await?);
    println!();

    println!("=== Asynchronous (awaited together) ===");
    print_results(" (Concurrent)", a, b, &concurrent_results(a, b).await?);

    println!("\nWaiting until the asynchronous operations finish...");
    console::pause();
    Ok(())
}
