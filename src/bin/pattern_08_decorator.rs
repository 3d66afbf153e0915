// Pattern 8: Decorator - Weapon Enchantments
// Each enchantment wraps a weapon and changes its damage and description,
// so enchantments stack in any order at runtime.

use oop_design_patterns::console;

trait Weapon {
    fn description(&self) -> String;
    fn damage(&self) -> f64;
}

struct BasicSword;

impl Weapon for BasicSword {
    fn description(&self) -> String {
        "Iron Sword".to_string()
    }

    fn damage(&self) -> f64 {
        10.0
    }
}

// ============================================================================
// Example: Decorators
// ============================================================================

struct FireEnchantment {
    inner: Box<dyn Weapon>,
}

impl Weapon for FireEnchantment {
    fn description(&self) -> String {
        format!("Flaming {}", self.inner.description())
    }

    fn damage(&self) -> f64 {
        self.inner.damage() + 5.0
    }
}

struct IceEnchantment {
    inner: Box<dyn Weapon>,
}

impl Weapon for IceEnchantment {
    fn description(&self) -> String {
        format!("Frozen {}", self.inner.description())
    }

    fn damage(&self) -> f64 {
        self.inner.damage() + 3.0
    }
}

struct CriticalStrikeGem {
    inner: Box<dyn Weapon>,
}

impl Weapon for CriticalStrikeGem {
    fn description(&self) -> String {
        format!("Keen {}", self.inner.description())
    }

    fn damage(&self) -> f64 {
        self.inner.damage() * 1.2
    }
}

fn print_weapon_stats(weapon: &dyn Weapon) {
    println!("WEAPON: {}", weapon.description());
    println!("DAMAGE: {:.1}", weapon.damage());
}

fn fully_enchanted() -> Box<dyn Weapon> {
    let sword: Box<dyn Weapon> = Box::new(BasicSword);
    let sword = Box::new(FireEnchantment { inner: sword });
    let sword = Box::new(IceEnchantment { inner: sword });
    Box::new(CriticalStrikeGem { inner: sword })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_stack_damage() {
        assert!((fully_enchanted().damage() - 21.6).abs() < 1e-9);
    }

    #[test]
    fn test_description_nests_prefixes() {
        assert_eq!(fully_enchanted().description(), "Keen Frozen Flaming Iron Sword");
    }

    #[test]
    fn test_order_matters_for_multiplier() {
        let gem_first = FireEnchantment {
            inner: Box::new(CriticalStrikeGem { inner: Box::new(BasicSword) }),
        };
        assert!((gem_first.damage() - 17.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn test_flat_enchantments_add_up(fire in 0usize..5, ice in 0usize..5) {
            let mut weapon: Box<dyn Weapon> = Box::new(BasicSword);
            for _ in 0..fire {
                weapon = Box::new(FireEnchantment { inner: weapon });
            }
            for _ in 0..ice {
                weapon = Box::new(IceEnchantment { inner: weapon });
            }
            let expected = 10.0 + 5.0 * fire as f64 + 3.0 * ice as f64;
            prop_assert!((weapon.damage() - expected).abs() < 1e-9);
        }
    }
}

fn main() {
    console::init_logging();
    console::header("Decorator Pattern (RPG Weapon Enchanting)");

    let mut sword: Box<dyn Weapon> = Box::new(BasicSword);
    print_weapon_stats(sword.as_ref());

    println!("\n>>> The blacksmith embeds a flame stone...");
    sword = Box::new(FireEnchantment { inner: sword });
    print_weapon_stats(sword.as_ref());

    println!("\n>>> The blacksmith carves an ice rune...");
    sword = Box::new(IceEnchantment { inner: sword });
    print_weapon_stats(sword.as_ref());

    println!("\n>>> A legendary critical gem is found and socketed...");
    sword = Box::new(CriticalStrikeGem { inner: sword });
    print_weapon_stats(sword.as_ref());

    console::rule(32);
    println!("Expected damage: 21.6 | Computed: {:.1}", sword.damage());

    console::pause();
}
