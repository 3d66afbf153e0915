// Pattern 24: Visitor - Power-Ups by Double Dispatch
// Units accept a visitor and call back the method for their own concrete
// type. New power-ups are new visitors; the unit types never change.

use oop_design_patterns::console;

trait GameUnit {
    fn name(&self) -> &str;
    fn accept(&mut self, visitor: &dyn PowerUpVisitor) -> String;
}

trait PowerUpVisitor {
    fn visit_soldier(&self, soldier: &mut Soldier) -> String;
    fn visit_tank(&self, tank: &mut Tank) -> String;
}

// ============================================================================
// Example: Elements
// ============================================================================

#[derive(Debug, PartialEq)]
struct Soldier {
    name: String,
    health: i32,
    stamina: i32,
}

impl Soldier {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            health: 100,
            stamina: 100,
        }
    }
}

impl GameUnit for Soldier {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&mut self, visitor: &dyn PowerUpVisitor) -> String {
        visitor.visit_soldier(self)
    }
}

#[derive(Debug, PartialEq)]
struct Tank {
    name: String,
    health: i32,
    fuel: i32,
}

impl Tank {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            health: 500,
            fuel: 100,
        }
    }
}

impl GameUnit for Tank {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&mut self, visitor: &dyn PowerUpVisitor) -> String {
        visitor.visit_tank(self)
    }
}

// ============================================================================
// Example: Visitors
// ============================================================================

struct RepairKitVisitor;

impl PowerUpVisitor for RepairKitVisitor {
    fn visit_soldier(&self, soldier: &mut Soldier) -> String {
        soldier.health += 10;
        soldier.stamina = 100;
        format!("[RepairKit] Soldier {} patched up. (+10 HP, full stamina)", soldier.name)
    }

    fn visit_tank(&self, tank: &mut Tank) -> String {
        tank.health += 50;
        format!("[RepairKit] Tank {} welded. (+50 HP)", tank.name)
    }
}

struct SuperFuelVisitor;

impl PowerUpVisitor for SuperFuelVisitor {
    fn visit_soldier(&self, soldier: &mut Soldier) -> String {
        format!("[SuperFuel] Soldier {} cannot use this! (no effect)", soldier.name)
    }

    fn visit_tank(&self, tank: &mut Tank) -> String {
        tank.fuel += 50;
        format!("[SuperFuel] Tank {} filled up on nitro! (+50 fuel)", tank.name)
    }
}

struct ShieldVisitor;

impl PowerUpVisitor for ShieldVisitor {
    fn visit_soldier(&self, soldier: &mut Soldier) -> String {
        format!("[Shield] Soldier {} put on a nano-shield.", soldier.name)
    }

    fn visit_tank(&self, tank: &mut Tank) -> String {
        format!("[Shield] Tank {} activated reactive armour.", tank.name)
    }
}

fn apply_to_all(units: &mut [Box<dyn GameUnit>], visitor: &dyn PowerUpVisitor) -> Vec<String> {
    units.iter_mut().map(|unit| unit.accept(visitor)).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_kit_per_type() {
        let mut soldier = Soldier::new("Pvt. Ryan");
        soldier.health = 40;
        soldier.stamina = 10;
        soldier.accept(&RepairKitVisitor);
        assert_eq!((soldier.health, soldier.stamina), (50, 100));

        let mut tank = Tank::new("Big Joe");
        tank.accept(&RepairKitVisitor);
        assert_eq!((tank.health, tank.fuel), (550, 100));
    }

    #[test]
    fn test_super_fuel_only_helps_tanks() {
        let mut soldier = Soldier::new("Pvt. Ryan");
        let message = soldier.accept(&SuperFuelVisitor);
        assert!(message.contains("no effect"));
        assert_eq!(soldier, Soldier::new("Pvt. Ryan"));

        let mut tank = Tank::new("Big Joe");
        tank.accept(&SuperFuelVisitor);
        assert_eq!(tank.fuel, 150);
    }

    #[test]
    fn test_shield_changes_nothing() {
        let mut tank = Tank::new("Big Joe");
        let message = tank.accept(&ShieldVisitor);
        assert!(message.contains("reactive armour"));
        assert_eq!(tank, Tank::new("Big Joe"));
    }

    #[test]
    fn test_dispatch_through_trait_objects() {
        let mut units: Vec<Box<dyn GameUnit>> = vec![Box::new(Soldier::new("A")), Box::new(Tank::new("B"))];
        let lines = apply_to_all(&mut units, &RepairKitVisitor);
        assert!(lines[0].starts_with("[RepairKit] Soldier A"));
        assert!(lines[1].starts_with("[RepairKit] Tank B"));
    }
}

fn main() {
    console::init_logging();
    console::header("Visitor Pattern (Power-Up System)");

    let mut units: Vec<Box<dyn GameUnit>> = vec![
        Box::new(Soldier::new("Pvt. Ryan")),
        Box::new(Tank::new("Big Joe")),
        Box::new(Soldier::new("Sgt. Fury")),
    ];
    let names: Vec<&str> = units.iter().map(|u| u.name()).collect();
    println!("Units on the field: {}\n", names.join(", "));

    let scenarios: [(&str, &dyn PowerUpVisitor); 3] = [
        ("Scenario 1: repair kits rain from the sky!", &RepairKitVisitor),
        ("Scenario 2: a fuel tanker exploded (everyone gets fuel)", &SuperFuelVisitor),
        ("Scenario 3: new feature added (shield)", &ShieldVisitor),
    ];
    for (i, (title, visitor)) in scenarios.iter().enumerate() {
        if i > 0 {
            println!("\n{}\n", console::divider(40));
        }
        println!(">>> {}", title);
        for line in apply_to_all(&mut units, *visitor) {
            println!("{}", line);
        }
    }

    console::pause();
}
