// Pattern 16: Observer - Game Event System
// `PlayerStats` broadcasts typed events to whoever is attached. UI,
// achievements and audio react independently; detached observers hear nothing.

use oop_design_patterns::console;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEvent {
    PlayerDamaged { health: i32 },
    GoldGained { gold: u32 },
    PlayerDied,
}

trait GameObserver {
    fn name(&self) -> &'static str;
    fn on_notify(&mut self, event: GameEvent);
}

type SharedObserver = Arc<Mutex<dyn GameObserver + Send>>;

// ============================================================================
// Example: Subject
// ============================================================================

struct PlayerStats {
    name: String,
    health: i32,
    gold: u32,
    observers: Vec<SharedObserver>,
}

impl PlayerStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            health: 100,
            gold: 0,
            observers: Vec::new(),
        }
    }

    fn attach(&mut self, observer: SharedObserver) {
        let name = lock(&observer).name();
        println!("[System] New observer attached: {}", name);
        self.observers.push(observer);
    }

    fn detach(&mut self, observer: &SharedObserver) {
        let before = self.observers.len();
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
        if self.observers.len() != before {
            println!("[System] Observer detached: {}", lock(observer).name());
        }
    }

    fn notify_observers(&self, event: GameEvent) {
        for observer in &self.observers {
            lock(observer).on_notify(event);
        }
    }

    fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
        println!("\n> {} took damage! (New HP: {})", self.name, self.health);
        self.notify_observers(GameEvent::PlayerDamaged { health: self.health });
        if self.health <= 0 {
            self.notify_observers(GameEvent::PlayerDied);
        }
    }

    fn collect_gold(&mut self, amount: u32) {
        self.gold += amount;
        println!("\n> {} found {} gold! (Total: {})", self.name, amount, self.gold);
        self.notify_observers(GameEvent::GoldGained { gold: self.gold });
    }
}

fn lock(observer: &SharedObserver) -> std::sync::MutexGuard<'_, dyn GameObserver + Send + 'static> {
    observer.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Example: Observers
// ============================================================================

#[derive(Default)]
struct UiManager {
    log: Vec<String>,
}

impl GameObserver for UiManager {
    fn name(&self) -> &'static str {
        "UiManager"
    }

    fn on_notify(&mut self, event: GameEvent) {
        let line = match event {
            GameEvent::PlayerDamaged { health } => format!("[UI] Health bar updated: {}%", health),
            GameEvent::GoldGained { gold } => format!("[UI] Gold counter updated: {}", gold),
            GameEvent::PlayerDied => "[UI] Opening the 'GAME OVER' screen...".to_string(),
        };
        println!("{}", line);
        self.log.push(line);
    }
}

#[derive(Default)]
struct AchievementSystem {
    treasure_hunter_unlocked: bool,
    unlocked: Vec<String>,
}

impl GameObserver for AchievementSystem {
    fn name(&self) -> &'static str {
        "AchievementSystem"
    }

    fn on_notify(&mut self, event: GameEvent) {
        if let GameEvent::GoldGained { gold } = event {
            if gold >= 100 && !self.treasure_hunter_unlocked {
                println!("[ACHIEVEMENT] Congratulations! 'Treasure Hunter' badge unlocked!");
                self.treasure_hunter_unlocked = true;
                self.unlocked.push("Treasure Hunter".to_string());
            }
        }
    }
}

#[derive(Default)]
struct AudioManager {
    played: Vec<&'static str>,
}

impl GameObserver for AudioManager {
    fn name(&self) -> &'static str {
        "AudioManager"
    }

    fn on_notify(&mut self, event: GameEvent) {
        let sound = match event {
            GameEvent::PlayerDamaged { .. } => "'Ugh! Ah!' (hurt sound)",
            GameEvent::GoldGained { .. } => "'Ching!' (coin sound)",
            GameEvent::PlayerDied => return,
        };
        println!("[AUDIO] {}", sound);
        self.played.push(sound);
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Observer Pattern (Event System)");

    let mut player = PlayerStats::new("Ertugrul");
    let ui: SharedObserver = Arc::new(Mutex::new(UiManager::default()));
    let achievements: SharedObserver = Arc::new(Mutex::new(AchievementSystem::default()));
    let audio: SharedObserver = Arc::new(Mutex::new(AudioManager::default()));

    player.attach(ui.clone());
    player.attach(achievements);
    player.attach(audio);
    println!("{}", console::divider(38));

    player.collect_gold(50);
    player.collect_gold(60);
    player.take_damage(20);

    println!("\n[System] The UI system goes offline...");
    player.detach(&ui);
    player.take_damage(80);

    console::pause();
}
