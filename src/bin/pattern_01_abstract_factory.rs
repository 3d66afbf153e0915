// Pattern 1: Abstract Factory - Themed Equipment Families
// A hero never names concrete equipment types; the injected theme factory
// decides which family (medieval or sci-fi) it is equipped from.

use oop_design_patterns::console;

// ============================================================================
// Example: Product Families
// ============================================================================

trait Weapon {
    fn attack(&self) -> String;
}

trait Armor {
    fn defend(&self) -> String;
}

struct Sword;
impl Weapon for Sword {
    fn attack(&self) -> String {
        "Sword: lands a sharp blow on the enemy!".to_string()
    }
}

struct PlateArmor;
impl Armor for PlateArmor {
    fn defend(&self) -> String {
        "Plate Armor: blocks arrows and sword strikes.".to_string()
    }
}

struct LaserGun;
impl Weapon for LaserGun {
    fn attack(&self) -> String {
        "Laser Gun: 'Pew pew!' fires a plasma bolt.".to_string()
    }
}

struct NanoSuit;
impl Armor for NanoSuit {
    fn defend(&self) -> String {
        "Nano Suit: energy shield engaged.".to_string()
    }
}

// ============================================================================
// Example: Theme Factories
// ============================================================================

trait GameThemeFactory {
    fn create_weapon(&self) -> Box<dyn Weapon>;
    fn create_armor(&self) -> Box<dyn Armor>;
}

struct MedievalFactory;
impl GameThemeFactory for MedievalFactory {
    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(Sword)
    }
    fn create_armor(&self) -> Box<dyn Armor> {
        Box::new(PlateArmor)
    }
}

struct SciFiFactory;
impl GameThemeFactory for SciFiFactory {
    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(LaserGun)
    }
    fn create_armor(&self) -> Box<dyn Armor> {
        Box::new(NanoSuit)
    }
}

// ============================================================================
// Example: Client
// ============================================================================

struct Hero {
    weapon: Box<dyn Weapon>,
    armor: Box<dyn Armor>,
}

impl Hero {
    fn new(factory: &dyn GameThemeFactory) -> Self {
        Self {
            weapon: factory.create_weapon(),
            armor: factory.create_armor(),
        }
    }

    /// Attack first, then defend.
    fn run_action(&self) -> [String; 2] {
        [self.weapon.attack(), self.armor.defend()]
    }
}

fn play_theme(title: &str, factory: &dyn GameThemeFactory) {
    println!("[Game Mode: {}]", title);
    for line in Hero::new(factory).run_action() {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medieval_family() {
        let knight = Hero::new(&MedievalFactory);
        let [attack, defend] = knight.run_action();
        assert!(attack.starts_with("Sword"));
        assert!(defend.starts_with("Plate Armor"));
    }

    #[test]
    fn test_scifi_family() {
        let marine = Hero::new(&SciFiFactory);
        let [attack, defend] = marine.run_action();
        assert!(attack.starts_with("Laser Gun"));
        assert!(defend.starts_with("Nano Suit"));
    }

    #[test]
    fn test_factories_never_mix_families() {
        let factories: Vec<Box<dyn GameThemeFactory>> = vec![Box::new(MedievalFactory), Box::new(SciFiFactory)];
        let lines: Vec<[String; 2]> = factories.iter().map(|f| Hero::new(f.as_ref()).run_action()).collect();
        assert_ne!(lines[0], lines[1]);
    }
}

fn main() {
    console::init_logging();
    console::header("Abstract Factory Pattern Demo");

    play_theme("Medieval", &MedievalFactory);
    println!();
    play_theme("Sci-Fi", &SciFiFactory);

    console::pause();
}
