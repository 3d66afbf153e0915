// Pattern 7: Composite - RTS Army Hierarchy
// A soldier and a squad share one interface, so orders and firepower queries
// flow through nested squads without the caller telling them apart.

use oop_design_patterns::console;

trait MilitaryUnit {
    fn name(&self) -> &str;
    fn move_to(&self, x: i32, y: i32) -> Vec<String>;
    fn firepower(&self) -> u32;
    /// Tree rendering, one line per node, indented with dashes.
    fn hierarchy(&self, indent: usize) -> Vec<String>;
}

// ============================================================================
// Example: Leaf
// ============================================================================

struct Soldier {
    name: String,
    damage: u32,
}

impl Soldier {
    fn new(name: &str, damage: u32) -> Self {
        Self {
            name: name.to_string(),
            damage,
        }
    }
}

impl MilitaryUnit for Soldier {
    fn name(&self) -> &str {
        &self.name
    }

    fn move_to(&self, x: i32, y: i32) -> Vec<String> {
        vec![format!("  Soldier {}: marching to ({},{}).", self.name, x, y)]
    }

    fn firepower(&self) -> u32 {
        self.damage
    }

    fn hierarchy(&self, indent: usize) -> Vec<String> {
        vec![format!(
            "{} Soldier: {} (Power: {})",
            "-".repeat(indent),
            self.name,
            self.damage
        )]
    }
}

// ============================================================================
// Example: Composite
// ============================================================================

struct Squad {
    name: String,
    units: Vec<Box<dyn MilitaryUnit>>,
}

impl Squad {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            units: Vec::new(),
        }
    }

    fn add_unit(&mut self, unit: impl MilitaryUnit + 'static) {
        self.units.push(Box::new(unit));
    }

    /// Detaches the first direct child with this name.
    fn remove_unit(&mut self, name: &str) -> Option<Box<dyn MilitaryUnit>> {
        let index = self.units.iter().position(|unit| unit.name() == name)?;
        Some(self.units.remove(index))
    }
}

impl MilitaryUnit for Squad {
    fn name(&self) -> &str {
        &self.name
    }

    fn move_to(&self, x: i32, y: i32) -> Vec<String> {
        let mut lines = vec![format!("[{}] squad moving out...", self.name)];
        lines.extend(self.units.iter().flat_map(|unit| unit.move_to(x, y)));
        lines
    }

    fn firepower(&self) -> u32 {
        self.units.iter().map(|unit| unit.firepower()).sum()
    }

    fn hierarchy(&self, indent: usize) -> Vec<String> {
        let mut lines = vec![format!(
            "{} [{}] (Total Power: {})",
            "-".repeat(indent),
            self.name,
            self.firepower()
        )];
        lines.extend(self.units.iter().flat_map(|unit| unit.hierarchy(indent + 2)));
        lines
    }
}

fn main_army() -> Squad {
    let mut alpha = Squad::new("Alpha Team");
    alpha.add_unit(Soldier::new("Rifleman A", 10));
    alpha.add_unit(Soldier::new("Rifleman B", 10));

    let mut recon = Squad::new("Recon Team");
    recon.add_unit(Soldier::new("Sniper", 50));

    let mut army = Squad::new("Main Army");
    army.add_unit(alpha);
    army.add_unit(recon);
    army.add_unit(Soldier::new("General", 5));
    army
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_firepower() {
        assert_eq!(main_army().firepower(), 75);
    }

    #[test]
    fn test_hierarchy_indentation() {
        let lines = main_army().hierarchy(0);
        assert_eq!(lines[0], " [Main Army] (Total Power: 75)");
        assert_eq!(lines[1], "-- [Alpha Team] (Total Power: 20)");
        assert_eq!(lines[2], "---- Soldier: Rifleman A (Power: 10)");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_move_reaches_every_soldier() {
        let lines = main_army().move_to(100, 200);
        let marching = lines.iter().filter(|l| l.contains("marching to (100,200)")).count();
        assert_eq!(marching, 4);
    }

    #[test]
    fn test_remove_unit() {
        let mut army = main_army();
        let removed = army.remove_unit("Recon Team");
        assert_eq!(removed.map(|u| u.firepower()), Some(50));
        assert_eq!(army.firepower(), 25);
        assert!(army.remove_unit("Recon Team").is_none());
    }

    proptest! {
        #[test]
        fn test_squad_firepower_is_sum(powers in prop::collection::vec(0u32..1000, 0..30)) {
            let mut squad = Squad::new("Test");
            for (i, power) in powers.iter().enumerate() {
                squad.add_unit(Soldier::new(&format!("S{}", i), *power));
            }
            let mut outer = Squad::new("Outer");
            outer.add_unit(squad);
            prop_assert_eq!(outer.firepower(), powers.iter().sum::<u32>());
        }
    }
}

fn main() {
    console::init_logging();
    console::header("Composite Pattern (RTS Army System)");

    let mut army = main_army();
    println!(">>> Army hierarchy:");
    army.hierarchy(0).iter().for_each(|line| println!("{}", line));

    console::rule(32);
    println!(">>> Order: whole army, forward march!");
    army.move_to(100, 200).iter().for_each(|line| println!("{}", line));

    console::rule(32);
    println!(">>> Total army firepower: {}", army.firepower());

    if let Some(general) = army.remove_unit("General") {
        println!(">>> {} leaves the field; firepower now {}", general.name(), army.firepower());
    }

    console::pause();
}
