// Pattern 9: Dependency Injection - Constructor Injection and a Tiny Container
// `Character` only knows the `InputService` and `LoggerService` traits.
// Concrete services are wired by hand or resolved from a type-keyed container.

use oop_design_patterns::console;
use oop_design_patterns::PatternError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

// ============================================================================
// Example: Abstractions and implementations
// ============================================================================

#[cfg_attr(test, mockall::automock)]
trait InputService {
    fn input_data(&self) -> String;
}

#[cfg_attr(test, mockall::automock)]
trait LoggerService {
    fn log(&self, message: &str);
}

struct KeyboardInput;

impl InputService for KeyboardInput {
    fn input_data(&self) -> String {
        "Pressing W, A, S, D (PC)".to_string()
    }
}

struct GamepadInput;

impl InputService for GamepadInput {
    fn input_data(&self) -> String {
        "Pushing the left analog stick forward (Console)".to_string()
    }
}

struct ConsoleLogger;

impl LoggerService for ConsoleLogger {
    fn log(&self, message: &str) {
        println!(
            "[Game Log] {}: {}",
            chrono::Local::now().format("%H:%M"),
            message
        );
    }
}

struct SilentLogger;

impl LoggerService for SilentLogger {
    fn log(&self, _message: &str) {}
}

// ============================================================================
// Example: Client with constructor injection
// ============================================================================

struct Character {
    input: Rc<dyn InputService>,
    logger: Rc<dyn LoggerService>,
}

impl Character {
    /// Both collaborators are required; there is no way to pass "nothing".
    fn new(input: Rc<dyn InputService>, logger: Rc<dyn LoggerService>) -> Self {
        Self { input, logger }
    }

    fn update(&self) {
        let input = self.input.input_data();
        self.logger.log(&format!("Character is moving: {}", input));
    }
}

// ============================================================================
// Example: Container keyed by abstraction type
// ============================================================================

#[derive(Default)]
struct SimpleDiContainer {
    services: HashMap<TypeId, Box<dyn Any>>,
}

impl SimpleDiContainer {
    /// Registers `service` as the implementation of abstraction `T`,
    /// replacing any earlier registration.
    fn register<T: ?Sized + 'static>(&mut self, service: Rc<T>) {
        tracing::debug!(service = std::any::type_name::<T>(), "registered");
        self.services.insert(TypeId::of::<Rc<T>>(), Box::new(service));
    }

    fn resolve<T: ?Sized + 'static>(&self) -> Result<Rc<T>, PatternError> {
        self.services
            .get(&TypeId::of::<Rc<T>>())
            .and_then(|service| service.downcast_ref::<Rc<T>>())
            .cloned()
            .ok_or_else(|| {
                let name = std::any::type_name::<T>();
                tracing::warn!(service = name, "unresolved service");
                PatternError::ServiceNotRegistered(name)
            })
    }
}

fn console_container() -> SimpleDiContainer {
    let mut container = SimpleDiContainer::default();
    container.register::<dyn InputService>(Rc::new(GamepadInput));
    // Registering SilentLogger instead would mute the output
    container.register::<dyn LoggerService>(Rc::new(ConsoleLogger));
    container
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_logs_input() {
        let mut input = MockInputService::new();
        input.expect_input_data().times(1).return_const("UP".to_string());
        let mut logger = MockLoggerService::new();
        logger
            .expect_log()
            .withf(|message| message == "Character is moving: UP")
            .times(1)
            .return_const(());

        Character::new(Rc::new(input), Rc::new(logger)).update();
    }

    #[test]
    fn test_container_resolves_registered_service() {
        let container = console_container();
        let input = container.resolve::<dyn InputService>().unwrap();
        assert!(input.input_data().contains("analog stick"));
        assert!(container.resolve::<dyn LoggerService>().is_ok());
    }

    #[test]
    fn test_container_reports_missing_service() {
        let container = SimpleDiContainer::default();
        match container.resolve::<dyn InputService>() {
            Err(PatternError::ServiceNotRegistered(name)) => assert!(name.contains("InputService")),
            other => panic!("expected missing service, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_register_replaces_previous() {
        let mut container = console_container();
        container.register::<dyn InputService>(Rc::new(KeyboardInput));
        let input = container.resolve::<dyn InputService>().unwrap();
        assert!(input.input_data().contains("W, A, S, D"));
    }

    #[test]
    fn test_silent_logger_with_mock_input() {
        let mut input = MockInputService::new();
        input.expect_input_data().times(1).return_const(String::new());
        Character::new(Rc::new(input), Rc::new(SilentLogger)).update();
    }
}

fn main() -> anyhow::Result<()> {
    console::init_logging();
    console::header("Dependency Injection Pattern");

    println!(">>> Scenario 1: PC (manual wiring)");
    let hero_pc = Character::new(Rc::new(KeyboardInput), Rc::new(ConsoleLogger));
    hero_pc.update();

    console::rule(40);

    println!(">>> Scenario 2: Console (via container)");
    let container = console_container();
    let hero_console = Character::new(
        container.resolve::<dyn InputService>()?,
        container.resolve::<dyn LoggerService>()?,
    );
    hero_console.update();

    println!("\n>>> Scenario 3: Silent logger (no output expected)");
    Character::new(Rc::new(KeyboardInput), Rc::new(SilentLogger)).update();

    println!("\n>>> Scenario 4: Empty container");
    let empty = SimpleDiContainer::default();
    if let Err(err) = empty.resolve::<dyn LoggerService>() {
        console::failure(&format!("Resolve failed: {}", err));
    }

    console::pause();
    Ok(())
}
