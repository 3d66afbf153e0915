// Pattern 4: Builder - Step-by-step Hero Construction
// Builders know how to produce each part; the director knows the recipes.
// Parts a recipe skips simply stay unset.

use itertools::Itertools;
use oop_design_patterns::console;
use std::fmt;

// ============================================================================
// Example: Product
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
struct Hero {
    hero_type: Option<String>,
    weapon: Option<String>,
    armor: Option<String>,
    skills: Vec<String>,
}

impl Hero {
    fn add_skill(&mut self, skill: &str) {
        self.skills.push(skill.to_string());
    }
}

fn or_none(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or("none")
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let skills = if self.skills.is_empty() {
            "none".to_string()
        } else {
            self.skills.iter().join(", ")
        };
        writeln!(f, "--- {} Character Summary ---", or_none(&self.hero_type))?;
        writeln!(f, "Weapon: {}", or_none(&self.weapon))?;
        writeln!(f, "Armor : {}", or_none(&self.armor))?;
        writeln!(f, "Skills: {}", skills)?;
        write!(f, "{}", console::divider(33))
    }
}

// ============================================================================
// Example: Builder interface and concrete builders
// ============================================================================

trait HeroBuilder {
    /// Starts a fresh product.
    fn reset(&mut self);
    fn set_hero_type(&mut self);
    fn build_weapon(&mut self);
    fn build_armor(&mut self);
    fn build_skills(&mut self);
    /// Hands over the product and resets the builder for the next one.
    fn get_hero(&mut self) -> Hero;
}

#[derive(Default)]
struct WarriorBuilder {
    hero: Hero,
}

impl HeroBuilder for WarriorBuilder {
    fn reset(&mut self) {
        self.hero = Hero::default();
    }

    fn set_hero_type(&mut self) {
        self.hero.hero_type = Some("Warrior".to_string());
    }

    fn build_weapon(&mut self) {
        self.hero.weapon = Some("Great Two-Handed Axe".to_string());
    }

    fn build_armor(&mut self) {
        self.hero.armor = Some("Heavy Plate Armor".to_string());
    }

    fn build_skills(&mut self) {
        self.hero.add_skill("Rage Burst");
        self.hero.add_skill("Whirlwind");
    }

    fn get_hero(&mut self) -> Hero {
        std::mem::take(&mut self.hero)
    }
}

#[derive(Default)]
struct MageBuilder {
    hero: Hero,
}

impl HeroBuilder for MageBuilder {
    fn reset(&mut self) {
        self.hero = Hero::default();
    }

    fn set_hero_type(&mut self) {
        self.hero.hero_type = Some("Mage".to_string());
    }

    fn build_weapon(&mut self) {
        self.hero.weapon = Some("Ancient Staff".to_string());
    }

    fn build_armor(&mut self) {
        self.hero.armor = Some("Silk Robe".to_string());
    }

    fn build_skills(&mut self) {
        self.hero.add_skill("Fireball");
        self.hero.add_skill("Ice Wall");
        self.hero.add_skill("Teleport");
    }

    fn get_hero(&mut self) -> Hero {
        std::mem::take(&mut self.hero)
    }
}

// ============================================================================
// Example: Director
// ============================================================================

struct CharacterCreator {
    builder: Box<dyn HeroBuilder>,
}

impl CharacterCreator {
    fn new(builder: Box<dyn HeroBuilder>) -> Self {
        Self { builder }
    }

    /// Swaps in another builder and returns the previous one.
    fn change_builder(&mut self, builder: Box<dyn HeroBuilder>) -> Box<dyn HeroBuilder> {
        std::mem::replace(&mut self.builder, builder)
    }

    fn create_full_character(&mut self) {
        println!("Director: starting character construction...");
        self.builder.set_hero_type();
        self.builder.build_weapon();
        self.builder.build_armor();
        self.builder.build_skills();
        println!("Director: character construction finished.");
    }

    fn create_basic_character(&mut self) {
        println!("Director: starting basic character construction...");
        self.builder.set_hero_type();
        self.builder.build_weapon();
    }

    fn take_hero(&mut self) -> Hero {
        self.builder.get_hero()
    }
}

/// Manual build without a director: a mage with skills but no gear.
fn custom_mage(builder: &mut dyn HeroBuilder) -> Hero {
    builder.reset();
    builder.set_hero_type();
    builder.build_skills();
    builder.get_hero()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_warrior() {
        let mut director = CharacterCreator::new(Box::new(WarriorBuilder::default()));
        director.create_full_character();
        let hero = director.take_hero();
        assert_eq!(hero.hero_type.as_deref(), Some("Warrior"));
        assert_eq!(hero.weapon.as_deref(), Some("Great Two-Handed Axe"));
        assert_eq!(hero.armor.as_deref(), Some("Heavy Plate Armor"));
        assert_eq!(hero.skills, vec!["Rage Burst", "Whirlwind"]);
    }

    #[test]
    fn test_basic_mage_after_switch() {
        let mut director = CharacterCreator::new(Box::new(WarriorBuilder::default()));
        director.change_builder(Box::new(MageBuilder::default()));
        director.create_basic_character();
        let hero = director.take_hero();
        assert_eq!(hero.weapon.as_deref(), Some("Ancient Staff"));
        assert_eq!(hero.armor, None);
        assert!(hero.skills.is_empty());
        assert!(hero.to_string().contains("Armor : none"));
    }

    #[test]
    fn test_get_hero_resets_builder() {
        let mut builder = MageBuilder::default();
        builder.set_hero_type();
        builder.build_skills();
        let _ = builder.get_hero();
        assert_eq!(builder.get_hero(), Hero::default());
    }

    #[test]
    fn test_custom_build_skips_gear() {
        let mut builder = MageBuilder::default();
        builder.build_weapon();
        let hero = custom_mage(&mut builder);
        assert_eq!(hero.weapon, None);
        assert_eq!(hero.skills.len(), 3);
    }

    #[test]
    fn test_change_builder_returns_previous() {
        let mut director = CharacterCreator::new(Box::new(WarriorBuilder::default()));
        let mut previous = director.change_builder(Box::new(MageBuilder::default()));
        previous.set_hero_type();
        assert_eq!(previous.get_hero().hero_type.as_deref(), Some("Warrior"));
    }
}

fn main() {
    console::init_logging();
    console::header("Builder Pattern Demo");

    let mut director = CharacterCreator::new(Box::new(WarriorBuilder::default()));
    director.create_full_character();
    println!("\n{}\n", director.take_hero());

    director.change_builder(Box::new(MageBuilder::default()));
    director.create_basic_character();
    println!("\n{}\n", director.take_hero());

    println!("--- Custom (Manual) Build ---");
    let mut mage_builder = MageBuilder::default();
    println!("\n{}", custom_mage(&mut mage_builder));

    console::pause();
}
