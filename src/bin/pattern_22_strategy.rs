// Pattern 22: Strategy - Swappable Boss AI
// The boss delegates its turn to whichever behaviour is plugged in. Swapping
// the strategy changes tactics without touching `BossEnemy`.

use oop_design_patterns::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BossStats {
    health: i32,
    speed: u32,
}

trait BossStrategy {
    fn name(&self) -> &'static str;
    /// Runs one turn, may change the boss's stats, returns the narration.
    fn execute_behavior(&self, stats: &mut BossStats) -> Vec<String>;
}

// ============================================================================
// Example: Strategies
// ============================================================================

struct AggressiveMeleeStrategy;

impl BossStrategy for AggressiveMeleeStrategy {
    fn name(&self) -> &'static str {
        "Aggressive"
    }

    fn execute_behavior(&self, stats: &mut BossStats) -> Vec<String> {
        vec![
            format!("[Aggressive] The boss roars and charges the player (speed: {}).", stats.speed * 2),
            "--> 'Sledgehammer Blow' landed! (Damage: 50)".to_string(),
        ]
    }
}

struct DefensiveMagicStrategy;

impl BossStrategy for DefensiveMagicStrategy {
    fn name(&self) -> &'static str {
        "DefensiveMagic"
    }

    fn execute_behavior(&self, stats: &mut BossStats) -> Vec<String> {
        let mut lines = vec![
            "[Defensive] The boss backs away to open distance.".to_string(),
            "--> Threw a 'Fireball'! (Damage: 20)".to_string(),
        ];
        if stats.health < 100 {
            stats.health += 10;
            lines.push("--> Cast a healing spell on itself (+10 HP).".to_string());
        }
        lines
    }
}

struct BerserkStrategy;

impl BossStrategy for BerserkStrategy {
    fn name(&self) -> &'static str {
        "Berserk"
    }

    fn execute_behavior(&self, stats: &mut BossStats) -> Vec<String> {
        stats.health -= 5;
        vec![
            "[BERSERK] Lasers blaze from the boss's eyes!".to_string(),
            "--> Attacking everything at random! (Area damage: 100)".to_string(),
            "--> Burning its own life (-5 HP).".to_string(),
        ]
    }
}

// ============================================================================
// Example: Context
// ============================================================================

struct BossEnemy {
    name: String,
    stats: BossStats,
    strategy: Option<Box<dyn BossStrategy>>,
}

impl BossEnemy {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stats: BossStats {
                health: 100,
                speed: 10,
            },
            strategy: Some(Box::new(AggressiveMeleeStrategy)),
        }
    }

    fn set_strategy(&mut self, strategy: Option<Box<dyn BossStrategy>>) {
        println!("\n*** {} changes tactics! ***", self.name);
        self.strategy = strategy;
    }

    fn update(&mut self) -> Vec<String> {
        println!("\n--- Boss status: HP {} ---", self.stats.health);
        let lines = match &self.strategy {
            Some(strategy) => {
                tracing::debug!(strategy = strategy.name(), "boss turn");
                strategy.execute_behavior(&mut self.stats)
            }
            None => vec!["The boss stares blankly.".to_string()],
        };
        for line in &lines {
            println!("{}", line);
        }
        lines
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    console::init_logging();
    console::header("Strategy Pattern (Boss AI)");

    let mut boss = BossEnemy::new("Ancient Dragon");
    boss.update();

    boss.stats.health = 60;
    boss.set_strategy(Some(Box::new(DefensiveMagicStrategy)));
    boss.update();

    boss.stats.health = 20;
    boss.set_strategy(Some(Box::new(BerserkStrategy)));
    boss.update();
    // Berserk eats its own health too.
    boss.update();

    console::pause();
}
