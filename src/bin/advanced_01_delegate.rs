// Language Feature 1: Delegates - Typed Function References
// A delegate is a value holding a reference to a function with a fixed
// signature: it can be stored, passed around and invoked later.

use oop_design_patterns::console;
use oop_design_patterns::delegate::Multicast;

// ============================================================================
// Example: Single-target Delegate (fn pointer)
// ============================================================================

type MathOperation = fn(i32, i32) -> i32;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

fn run_operation(operation: MathOperation, x: i32, y: i32) -> i32 {
    operation(x, y)
}

fn basic_delegate_example() {
    // The delegate variable points at `add`
    let operation: MathOperation = add;
    let result = operation(3, 4);
    println!("Result: {}", result);

    // Delegates are ordinary values, so they can be passed to functions
    println!("Passed as argument (multiply): {}", run_operation(multiply, 3, 4));
}

// ============================================================================
// Example: Multicast Greeting List
// ============================================================================

fn hello_world() -> String {
    "Hello World!".to_string()
}

fn hello_erobos() -> String {
    "Hello Erobos!".to_string()
}

fn hello_nick() -> String {
    "Hello Nick!".to_string()
}

fn greeting_delegate() -> Multicast<(), String> {
    let mut greetings = Multicast::with(|_: &()| hello_world());
    greetings.add(|_: &()| hello_erobos());
    greetings.add(|_: &()| hello_nick());
    greetings
}

fn multicast_greeting_example() {
    let greetings = greeting_delegate();
    println!("Invocation list holds {} targets:", greetings.len());
    for line in greetings.invoke_all(&()) {
        println!("  {}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_through_delegate() {
        let operation: MathOperation = add;
        assert_eq!(operation(3, 4), 7);
    }

    #[test]
    fn test_delegate_as_argument() {
        assert_eq!(run_operation(add, 3, 4), 7);
        assert_eq!(run_operation(multiply, 3, 4), 12);
    }

    #[test]
    fn test_greetings_run_in_order() {
        let greetings = greeting_delegate();
        assert_eq!(
            greetings.invoke_all(&()),
            vec!["Hello World!", "Hello Erobos!", "Hello Nick!"]
        );
    }

    #[test]
    fn test_single_call_returns_last_greeting() {
        assert_eq!(greeting_delegate().invoke(&()), Some("Hello Nick!".to_string()));
    }
}

fn main() {
    console::init_logging();
    console::header("Delegate Basics");

    println!("=== Single-target Delegate ===");
    basic_delegate_example();
    println!();

    println!("=== Multicast Delegate ===");
    multicast_greeting_example();

    console::pause();
}
