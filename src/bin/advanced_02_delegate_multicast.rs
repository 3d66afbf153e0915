// Language Feature 2: Multicast Delegates - Chaining Operations
// `add` appends to the invocation list (`+=`), `assign` replaces it (`=`).
// A multicast call that returns a value yields the last target's result.

use oop_design_patterns::console;
use oop_design_patterns::delegate::Multicast;
use oop_design_patterns::PatternError;

type MathProcess = Multicast<(f64, f64), f64>;

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn checked_divide(a: f64, b: f64) -> Result<f64, PatternError> {
    if b == 0.0 {
        return Err(PatternError::DivideByZero { dividend: a });
    }
    Ok(a / b)
}

/// Reports division by zero on the console and yields NaN.
fn divide(a: f64, b: f64) -> f64 {
    match checked_divide(a, b) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "guarded division");
            console::failure("Error: division by zero is not allowed.");
            f64::NAN
        }
    }
}

fn arithmetic_chain() -> MathProcess {
    let mut process = MathProcess::new();
    process.add(|&(a, b)| add(a, b));
    process.add(|&(a, b)| subtract(a, b));
    process.add(|&(a, b)| multiply(a, b));
    process.add(|&(a, b)| divide(a, b));
    process
}

// ============================================================================
// Example: += chains every target
// ============================================================================

/// Runs the list once; the last result is what a single-value call returns.
fn run_chain(process: &MathProcess, x: f64, y: f64) -> (Vec<f64>, Option<f64>) {
    let results = process.invoke_all(&(x, y));
    let last = results.last().copied();
    (results, last)
}

fn chained_example(x: f64, y: f64) {
    let process = arithmetic_chain();
    let labels = ["Add", "Subtract", "Multiply", "Divide"];

    println!("Invoking {} targets with ({}, {}):", process.len(), x, y);
    let (results, last) = run_chain(&process, x, y);
    for (label, value) in labels.iter().zip(&results) {
        println!("  {:<9} -> {}", label, value);
    }

    if let Some(last) = last {
        println!("Single-value call returns the last target: {}", last);
    }
}

// ============================================================================
// Example: = replaces the invocation list
// ============================================================================

fn assignment_example(x: f64, y: f64) {
    let mut process = arithmetic_chain();
    process.assign(|&(a, b)| multiply(a, b));
    println!(
        "After assignment only {} target remains: {:?}",
        process.len(),
        process.invoke_all(&(x, y))
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_chain_results_in_order() {
        let process = arithmetic_chain();
        assert_eq!(process.invoke_all(&(5.0, 10.0)), vec![15.0, -5.0, 50.0, 0.5]);
    }

    #[test]
    fn test_single_call_yields_last() {
        assert_eq!(arithmetic_chain().invoke(&(5.0, 10.0)), Some(0.5));
    }

    #[test]
    fn test_assign_discards_previous_targets() {
        let mut process = arithmetic_chain();
        process.assign(|&(a, b)| add(a, b));
        assert_eq!(process.len(), 1);
        assert_eq!(process.invoke_all(&(5.0, 10.0)), vec![15.0]);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(divide(5.0, 0.0).is_nan());
        assert_eq!(
            checked_divide(5.0, 0.0),
            Err(PatternError::DivideByZero { dividend: 5.0 })
        );
    }

    #[test]
    fn test_run_chain_calls_each_target_once() {
        let calls = Rc::new(Cell::new(0));
        let mut process = arithmetic_chain();
        let counter = Rc::clone(&calls);
        process.add(move |&(a, _)| {
            counter.set(counter.get() + 1);
            a
        });

        let (results, last) = run_chain(&process, 5.0, 0.0);
        assert_eq!(calls.get(), 1);
        assert_eq!(results.len(), 5);
        assert_eq!(last, Some(5.0));
    }

    #[test]
    fn test_chain_with_zero_divisor() {
        let results = arithmetic_chain().invoke_all(&(5.0, 0.0));
        assert_eq!(&results[..3], &[5.0, 5.0, 0.0]);
        assert!(results[3].is_nan());
    }
}

fn main() {
    console::init_logging();
    console::header("Multicast Delegate (Math Process)");

    println!("=== += (chaining) ===");
    chained_example(5.0, 10.0);
    println!();

    println!("=== = (assignment) ===");
    assignment_example(5.0, 10.0);
    println!();

    println!("=== Guarded division ===");
    chained_example(5.0, 0.0);

    console::pause();
}
