// Pattern 21: State - Document Lifecycle
// Running a state's action installs that state into the context, so the
// context always reports the most recent action.

use oop_design_patterns::console;
use std::fmt;

trait DocumentState: fmt::Display {
    fn do_action(self: Box<Self>, context: &mut DocumentContext);
}

#[derive(Default)]
struct DocumentContext {
    state: Option<Box<dyn DocumentState>>,
}

impl DocumentContext {
    fn set_state(&mut self, state: Box<dyn DocumentState>) {
        self.state = Some(state);
    }

    fn state(&self) -> Option<&dyn DocumentState> {
        self.state.as_deref()
    }
}

// ============================================================================
// Example: States
// ============================================================================

macro_rules! document_state {
    ($name:ident, $label:literal) => {
        struct $name;

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($label)
            }
        }

        impl DocumentState for $name {
            fn do_action(self: Box<Self>, context: &mut DocumentContext) {
                println!("State : {}", self);
                context.set_state(self);
            }
        }
    };
}

document_state!(AddedState, "Added");
document_state!(ModifiedState, "Modified");
document_state!(DeleteState, "Delete");

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("State Pattern (Document Lifecycle)");

    let mut context = DocumentContext::default();
    Box::new(ModifiedState).do_action(&mut context);
    Box::new(DeleteState).do_action(&mut context);

    match context.state() {
        Some(state) => println!("{}", state),
        None => println!("(no state)"),
    }

    console::pause();
}
