// Pattern 6: Command - RTS Orders with Undo
// Each order is an object that knows how to execute and reverse itself;
// the manager keeps a last-in-first-out history.

use oop_design_patterns::console;
use oop_design_patterns::PatternError;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Example: Receiver
// ============================================================================

#[derive(Debug)]
struct GameUnit {
    name: String,
    x: i32,
    y: i32,
}

impl GameUnit {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            x: 0,
            y: 0,
        }
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        println!("[Unit] {} moved -> ({}, {})", self.name, self.x, self.y);
    }

    fn attack(&self) {
        println!("[Unit] {} attacked!", self.name);
    }
}

// ============================================================================
// Example: Commands
// ============================================================================

trait Command {
    fn execute(&mut self);
    fn undo(&mut self);
}

struct MoveCommand {
    unit: Rc<RefCell<GameUnit>>,
    target: (i32, i32),
    previous: (i32, i32),
}

impl MoveCommand {
    fn new(unit: &Rc<RefCell<GameUnit>>, x: i32, y: i32) -> Self {
        Self {
            unit: Rc::clone(unit),
            target: (x, y),
            previous: (0, 0),
        }
    }
}

impl Command for MoveCommand {
    fn execute(&mut self) {
        let mut unit = self.unit.borrow_mut();
        self.previous = unit.position();
        unit.move_to(self.target.0, self.target.1);
    }

    fn undo(&mut self) {
        let mut unit = self.unit.borrow_mut();
        println!("<<< Undo: {} returns to the previous position...", unit.name);
        unit.move_to(self.previous.0, self.previous.1);
    }
}

struct AttackCommand {
    unit: Rc<RefCell<GameUnit>>,
}

impl Command for AttackCommand {
    fn execute(&mut self) {
        self.unit.borrow().attack();
    }

    fn undo(&mut self) {
        console::failure("<<< Error: an attack cannot be undone!");
    }
}

// ============================================================================
// Example: Invoker with history
// ============================================================================

#[derive(Default)]
struct CommandManager {
    history: Vec<Box<dyn Command>>,
}

impl CommandManager {
    fn execute_command(&mut self, mut command: Box<dyn Command>) {
        command.execute();
        self.history.push(command);
    }

    fn undo_last_command(&mut self) -> Result<(), PatternError> {
        match self.history.pop() {
            Some(mut command) => {
                command.undo();
                Ok(())
            }
            None => {
                tracing::warn!("undo requested with empty history");
                Err(PatternError::NothingToUndo)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn soldier() -> Rc<RefCell<GameUnit>> {
        Rc::new(RefCell::new(GameUnit::new("Private Ryan")))
    }

    #[test]
    fn test_undo_restores_previous_position() {
        let unit = soldier();
        let mut manager = CommandManager::default();
        manager.execute_command(Box::new(MoveCommand::new(&unit, 10, 5)));
        manager.execute_command(Box::new(MoveCommand::new(&unit, 20, 15)));
        assert_eq!(unit.borrow().position(), (20, 15));

        manager.undo_last_command().unwrap();
        assert_eq!(unit.borrow().position(), (10, 5));
        manager.undo_last_command().unwrap();
        assert_eq!(unit.borrow().position(), (0, 0));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut manager = CommandManager::default();
        assert_eq!(manager.undo_last_command(), Err(PatternError::NothingToUndo));
    }

    #[test]
    fn test_attack_undo_leaves_position() {
        let unit = soldier();
        let mut manager = CommandManager::default();
        manager.execute_command(Box::new(MoveCommand::new(&unit, 3, 4)));
        manager.execute_command(Box::new(AttackCommand { unit: Rc::clone(&unit) }));
        manager.undo_last_command().unwrap();
        assert_eq!(unit.borrow().position(), (3, 4));
        assert_eq!(manager.history.len(), 1);
    }

    proptest! {
        #[test]
        fn test_undo_is_lifo(moves in prop::collection::vec((-100i32..100, -100i32..100), 1..20)) {
            let unit = soldier();
            let mut manager = CommandManager::default();
            let mut positions = vec![(0, 0)];
            for &(x, y) in &moves {
                manager.execute_command(Box::new(MoveCommand::new(&unit, x, y)));
                positions.push((x, y));
            }
            positions.pop();
            while let Some(expected) = positions.pop() {
                prop_assert!(manager.undo_last_command().is_ok());
                prop_assert_eq!(unit.borrow().position(), expected);
            }
            prop_assert!(manager.undo_last_command().is_err());
        }
    }
}

fn main() {
    console::init_logging();
    console::header("Command Pattern (RTS Movement & Undo)");

    let soldier = Rc::new(RefCell::new(GameUnit::new("Private Ryan")));
    let mut input_manager = CommandManager::default();
    let (x, y) = soldier.borrow().position();
    println!("> Starting position: ({}, {})\n", x, y);

    input_manager.execute_command(Box::new(MoveCommand::new(&soldier, 10, 5)));
    input_manager.execute_command(Box::new(MoveCommand::new(&soldier, 20, 15)));
    input_manager.execute_command(Box::new(AttackCommand {
        unit: Rc::clone(&soldier),
    }));

    println!("\n--- We made a mistake, let's rewind ---");
    for _ in 0..4 {
        if let Err(err) = input_manager.undo_last_command() {
            println!("[Manager] {}", err);
        }
    }

    console::pause();
}
