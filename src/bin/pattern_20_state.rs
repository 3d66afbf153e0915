// Pattern 20: State - Character Posture FSM
// Each posture decides how to react to input and which posture comes next.
// The character just forwards input to whatever state it is in.

use oop_design_patterns::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Up,
    Down,
    Enter,
}

/// What a state says about a key press: a line of narration and, maybe, a
/// successor state.
struct Reaction {
    message: &'static str,
    next: Option<Box<dyn PlayerState>>,
}

impl Reaction {
    fn stay(message: &'static str) -> Self {
        Self { message, next: None }
    }

    fn go(message: &'static str, next: impl PlayerState + 'static) -> Self {
        Self {
            message,
            next: Some(Box::new(next)),
        }
    }
}

trait PlayerState {
    fn name(&self) -> &'static str;
    fn handle_input(&self, key: Key) -> Reaction;

    /// Per-frame behaviour; most postures do nothing.
    fn update(&self) -> Option<&'static str> {
        None
    }
}

// ============================================================================
// Example: Concrete states
// ============================================================================

struct StandingState;
struct JumpingState;
struct DuckingState;

impl PlayerState for StandingState {
    fn name(&self) -> &'static str {
        "StandingState"
    }

    fn handle_input(&self, key: Key) -> Reaction {
        match key {
            Key::Up => Reaction::go("Standing: jump key pressed.", JumpingState),
            Key::Down => Reaction::go("Standing: duck key pressed.", DuckingState),
            Key::Enter => Reaction::stay("Standing: waiting..."),
        }
    }
}

impl PlayerState for JumpingState {
    fn name(&self) -> &'static str {
        "JumpingState"
    }

    fn handle_input(&self, key: Key) -> Reaction {
        match key {
            Key::Enter => Reaction::go("In the air: landing...", StandingState),
            Key::Up => Reaction::stay("In the air: already airborne, cannot jump again!"),
            Key::Down => Reaction::stay("In the air: cannot duck mid-air!"),
        }
    }

    fn update(&self) -> Option<&'static str> {
        Some("--- Character is gliding... gravity active. ---")
    }
}

impl PlayerState for DuckingState {
    fn name(&self) -> &'static str {
        "DuckingState"
    }

    fn handle_input(&self, key: Key) -> Reaction {
        match key {
            Key::Up => Reaction::go("Ducking: standing up.", StandingState),
            _ => Reaction::stay("Ducking: waiting in cover. Safe."),
        }
    }
}

// ============================================================================
// Example: Context
// ============================================================================

struct Character {
    state: Box<dyn PlayerState>,
}

impl Character {
    fn new() -> Self {
        Self {
            state: Box::new(StandingState),
        }
    }

    fn state_name(&self) -> &'static str {
        self.state.name()
    }

    fn handle_input(&mut self, key: Key) {
        let reaction = self.state.handle_input(key);
        println!("{}", reaction.message);
        if let Some(next) = reaction.next {
            self.set_state(next);
        }
    }

    fn set_state(&mut self, next: Box<dyn PlayerState>) {
        println!("\n[System] State changed: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn update(&self) -> Option<&'static str> {
        let line = self.state.update();
        if let Some(line) = line {
            println!("{}", line);
        }
        line
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("State Pattern (Character Controller FSM)");
    println!("Controls: [UP: jump/stand] [DOWN: duck] [ENTER: land]\n");

    let mut hero = Character::new();

    // Standing -> ducking
    hero.handle_input(Key::Down);
    hero.update();

    // Ducking: up means stand, not jump
    hero.handle_input(Key::Up);
    hero.update();

    hero.handle_input(Key::Up);
    hero.update();

    // Already airborne
    hero.handle_input(Key::Up);

    hero.handle_input(Key::Enter);

    console::pause();
}
