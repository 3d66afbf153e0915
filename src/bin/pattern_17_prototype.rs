// Pattern 17: Prototype - Cloning Instead of Reloading
// Building a monster from scratch loads its assets; cloning a configured
// prototype reuses them and deep-copies the mutable parts.

use oop_design_patterns::console;
use std::sync::atomic::{AtomicUsize, Ordering};

static ASSET_LOADS: AtomicUsize = AtomicUsize::new(0);

trait MonsterPrototype {
    fn clone_monster(&self) -> Self
    where
        Self: Sized;
    fn stats(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
struct Zombie {
    name: String,
    health: i32,
    speed: u32,
    inventory: Vec<String>,
    /// Which asset load this monster's textures and sounds came from.
    asset_id: usize,
}

impl Zombie {
    fn new(name: &str, health: i32, speed: u32) -> Self {
        println!("[LOADING] Loading textures and sounds for {}... (expensive)", name);
        let asset_id = ASSET_LOADS.fetch_add(1, Ordering::SeqCst) + 1;
        Self {
            name: name.to_string(),
            health,
            speed,
            inventory: Vec::new(),
            asset_id,
        }
    }
}

impl MonsterPrototype for Zombie {
    /// Deep copy: the inventory is a fresh Vec, assets are shared by id.
    fn clone_monster(&self) -> Self {
        let mut copy = self.clone();
        copy.name.push_str(" (Clone)");
        copy
    }

    fn stats(&self) -> String {
        let items = if self.inventory.is_empty() {
            "Empty".to_string()
        } else {
            self.inventory.join(", ")
        };
        format!(
            "Monster: {} | HP: {} | Speed: {} | Inventory: [{}]",
            self.name, self.health, self.speed, items
        )
    }
}

// ============================================================================
// Example: Spawner
// ============================================================================

struct MonsterSpawner<P: MonsterPrototype> {
    prototype: P,
}

impl<P: MonsterPrototype> MonsterSpawner<P> {
    fn new(prototype: P) -> Self {
        Self { prototype }
    }

    fn spawn_monster(&self) -> P {
        self.prototype.clone_monster()
    }

    fn prototype(&self) -> &P {
        &self.prototype
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn boss_prototype() -> Zombie {
        let mut boss = Zombie::new("Boss Zombie", 100, 5);
        boss.inventory.push("Rotten Flesh".to_string());
        boss
    }

    #[test]
    fn test_clone_appends_suffix_and_shares_assets() {
        let spawner = MonsterSpawner::new(boss_prototype());
        let clone = spawner.spawn_monster();
        assert_eq!(clone.name, "Boss Zombie (Clone)");
        assert_eq!(clone.asset_id, spawner.prototype().asset_id);
    }

    #[test]
    fn test_clone_mutation_does_not_touch_original() {
        let spawner = MonsterSpawner::new(boss_prototype());
        let mut first = spawner.spawn_monster();
        first.health = 50;
        first.inventory.push("Brain".to_string());
        let mut second = spawner.spawn_monster();
        second.speed = 10;

        let original = spawner.prototype();
        assert_eq!(original.inventory, vec!["Rotten Flesh"]);
        assert_eq!(original.health, 100);
        assert_eq!(first.inventory, vec!["Rotten Flesh", "Brain"]);
        assert_eq!(second.inventory, vec!["Rotten Flesh"]);
        assert_eq!((second.health, second.speed), (100, 10));
    }

    #[test]
    fn test_fresh_construction_loads_again() {
        let a = Zombie::new("A", 1, 1);
        let b = Zombie::new("B", 1, 1);
        assert_ne!(a.asset_id, b.asset_id);
    }

    #[test]
    fn test_empty_inventory_stats() {
        let zombie = Zombie::new("Walker", 30, 2);
        assert!(zombie.stats().ends_with("Inventory: [Empty]"));
    }
}

fn main() {
    console::init_logging();
    console::header("Prototype Pattern (Instantiate from a Prefab)");

    println!(">>> Starting the game, preparing the prototype...");
    let mut original = Zombie::new("Boss Zombie", 100, 5);
    original.inventory.push("Rotten Flesh".to_string());
    println!("\n>>> Original state:");
    println!("{}", original.stats());

    let spawner = MonsterSpawner::new(original);
    console::rule(48);

    println!(">>> A zombie wave is coming (cloning started)...");
    let mut zombie1 = spawner.spawn_monster();
    zombie1.health = 50;
    zombie1.inventory.push("Brain".to_string());
    let mut zombie2 = spawner.spawn_monster();
    zombie2.speed = 10;

    println!("\n>>> Final state:");
    println!("Original: {}", spawner.prototype().stats());
    println!("Clone 1:  {}", zombie1.stats());
    println!("Clone 2:  {}", zombie2.stats());
    println!(
        "\nAsset loads: {} (clones reuse load #{})",
        ASSET_LOADS.load(Ordering::SeqCst),
        zombie1.asset_id
    );

    console::pause();
}
