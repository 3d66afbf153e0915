// Pattern 13: Memento - Save/Load and Undo
// The player hands out immutable snapshots of its state; the save manager
// stacks them without ever looking inside.

use chrono::{DateTime, Local};
use oop_design_patterns::console;
use oop_design_patterns::PatternError;

/// Snapshot of the player's state. Fields are private and read-only.
#[derive(Debug, Clone)]
struct GameStateMemento {
    health: i32,
    level: u32,
    weapon: String,
    saved_at: DateTime<Local>,
}

impl GameStateMemento {
    fn new(health: i32, level: u32, weapon: &str) -> Self {
        Self {
            health,
            level,
            weapon: weapon.to_string(),
            saved_at: Local::now(),
        }
    }

    fn saved_at(&self) -> String {
        self.saved_at.format("%H:%M").to_string()
    }
}

// ============================================================================
// Example: Originator
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Player {
    health: i32,
    level: u32,
    weapon: String,
}

impl Player {
    fn new() -> Self {
        Self {
            health: 100,
            level: 1,
            weapon: "Wooden Sword".to_string(),
        }
    }

    fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
        println!("[Game] Player took damage: -{} HP. (Now: {})", damage, self.health);
    }

    /// Levelling up refills health and upgrades the weapon.
    fn level_up(&mut self) {
        self.level += 1;
        self.health = 100;
        self.weapon = "Steel Sword".to_string();
        println!(
            "[Game] CONGRATULATIONS! Level up. (Lvl: {}, Weapon: {})",
            self.level, self.weapon
        );
    }

    fn status(&self) -> String {
        format!(
            "   -> STATUS: HP: {} | Lvl: {} | Weapon: {}",
            self.health, self.level, self.weapon
        )
    }

    fn save_state(&self) -> GameStateMemento {
        let memento = GameStateMemento::new(self.health, self.level, &self.weapon);
        println!("[System] Saving game... (Time: {})", memento.saved_at());
        memento
    }

    fn restore_state(&mut self, memento: GameStateMemento) {
        self.health = memento.health;
        self.level = memento.level;
        self.weapon = memento.weapon;
        println!("[System] Game loaded! (Back to {})", memento.saved_at.format("%H:%M"));
        println!("{}", self.status());
    }
}

// ============================================================================
// Example: Caretaker
// ============================================================================

#[derive(Default)]
struct SaveManager {
    history: Vec<GameStateMemento>,
}

impl SaveManager {
    fn save_game(&mut self, player: &Player) {
        self.history.push(player.save_state());
    }

    fn undo(&mut self, player: &mut Player) -> Result<(), PatternError> {
        let snapshot = self.history.pop().ok_or_else(|| {
            tracing::warn!("undo requested with an empty save history");
            PatternError::NothingToUndo
        })?;
        println!("[Manager] 'Undo' requested...");
        player.restore_state(snapshot);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Memento Pattern (Save/Load & Undo)");

    let mut hero = Player::new();
    let mut manager = SaveManager::default();

    println!(">>> Game started");
    println!("{}", hero.status());
    manager.save_game(&hero);

    println!("\n--- The adventure continues ---");
    hero.take_damage(20);
    hero.take_damage(30);
    manager.save_game(&hero);

    println!("\n--- Boss fight ---");
    hero.level_up();
    hero.take_damage(90);
    println!("{}", hero.status());

    println!("\n>>> OH NO! The player is about to die. Undo the last mistake.");
    let undos = [
        "",
        "\n>>> Undo once more (back to the very beginning).",
        "\n>>> And once more.",
    ];
    for intro in undos {
        if !intro.is_empty() {
            println!("{}", intro);
        }
        if let Err(err) = manager.undo(&mut hero) {
            println!("[Manager] {}: no saves left!", err);
        }
    }

    console::pause();
}
