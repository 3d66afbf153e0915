// Pattern 2: Adapter - Fitting a Foreign Enemy into the Level
// `SuperRobot` speaks in hammers and battery percentages; `RobotAdapter`
// translates it to the `Enemy` interface the level manager already uses.

use oop_design_patterns::console;

// ============================================================================
// Example: Target interface and a native implementation
// ============================================================================

trait Enemy {
    fn attack(&mut self) -> String;
    fn take_damage(&mut self, damage: i32) -> String;
}

struct Zombie;

impl Enemy for Zombie {
    fn attack(&mut self) -> String {
        "Zombie: tries to bite!".to_string()
    }

    fn take_damage(&mut self, damage: i32) -> String {
        format!("Zombie: took {} damage. 'Aaargh!'", damage)
    }
}

// ============================================================================
// Example: Adaptee with an incompatible interface
// ============================================================================

#[derive(Debug)]
struct SuperRobot {
    battery_level: f64,
}

impl SuperRobot {
    fn new() -> Self {
        Self { battery_level: 100.0 }
    }

    fn smash_with_hammer(&self) -> String {
        "Super Robot: shakes the ground with its giant hammer!".to_string()
    }

    fn deduct_energy(&mut self, amount: f64) -> String {
        self.battery_level -= amount;
        format!(
            "Super Robot: energy dropped to {}%. System warning!",
            self.battery_level
        )
    }

    fn recharge(&mut self) -> String {
        "Super Robot: recharging...".to_string()
    }
}

// ============================================================================
// Example: Adapter
// ============================================================================

struct RobotAdapter {
    robot: SuperRobot,
}

impl RobotAdapter {
    fn new(robot: SuperRobot) -> Self {
        Self { robot }
    }

    /// Adaptee-only capability, reachable through the concrete adapter.
    fn recharge(&mut self) -> String {
        self.robot.recharge()
    }
}

impl Enemy for RobotAdapter {
    fn attack(&mut self) -> String {
        self.robot.smash_with_hammer()
    }

    fn take_damage(&mut self, damage: i32) -> String {
        // Armored: half the damage becomes energy loss
        let energy_loss = f64::from(damage) / 2.0;
        self.robot.deduct_energy(energy_loss)
    }
}

// ============================================================================
// Example: Client
// ============================================================================

struct LevelManager;

impl LevelManager {
    fn process_enemies(&self, enemies: &mut [Box<dyn Enemy>]) -> Vec<String> {
        let mut log = Vec::new();
        for enemy in enemies.iter_mut() {
            log.push(enemy.attack());
            log.push(enemy.take_damage(20));
            log.push("---".to_string());
        }
        log
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_halves_damage() {
        let mut adapter = RobotAdapter::new(SuperRobot::new());
        adapter.take_damage(20);
        assert_eq!(adapter.robot.battery_level, 90.0);
        adapter.take_damage(5);
        assert_eq!(adapter.robot.battery_level, 87.5);
    }

    #[test]
    fn test_level_processes_mixed_enemies() {
        let mut enemies: Vec<Box<dyn Enemy>> =
            vec![Box::new(Zombie), Box::new(RobotAdapter::new(SuperRobot::new()))];
        let log = LevelManager.process_enemies(&mut enemies);
        assert_eq!(log.len(), 6);
        assert_eq!(log[1], "Zombie: took 20 damage. 'Aaargh!'");
        assert!(log[3].contains("hammer"));
        assert!(log[4].contains("90%"));
        assert_eq!(log[5], "---");
    }

    #[test]
    fn test_recharge_through_adapter() {
        let mut adapter = RobotAdapter::new(SuperRobot::new());
        assert!(adapter.recharge().contains("recharging"));
    }
}

fn main() {
    console::init_logging();
    console::header("Adapter Pattern Demo");

    let mut enemies: Vec<Box<dyn Enemy>> = vec![
        Box::new(Zombie),
        Box::new(RobotAdapter::new(SuperRobot::new())),
    ];
    for line in LevelManager.process_enemies(&mut enemies) {
        println!("{}", line);
    }

    let mut spare = RobotAdapter::new(SuperRobot::new());
    println!("{}", spare.recharge());

    console::pause();
}
