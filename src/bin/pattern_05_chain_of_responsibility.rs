// Pattern 5: Chain of Responsibility - Damage Pipeline
// A hit travels MagicShield -> IronArmor -> CharacterBody. Each link
// handles what it can and forwards whatever damage is left.

use oop_design_patterns::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DamageKind {
    Physical,
    Magic,
}

/// Where a hit ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitOutcome {
    Absorbed,
    Blocked,
    Hit { damage: i32, remaining_health: i32 },
    /// Damage left over with no further link to take it.
    Unhandled { damage: i32 },
}

trait DamageHandler {
    fn handle_damage(&mut self, amount: i32, kind: DamageKind) -> HitOutcome;
}

type Link = Option<Box<dyn DamageHandler>>;

fn pass_on(next: &mut Link, amount: i32, kind: DamageKind) -> HitOutcome {
    match next {
        Some(handler) => handler.handle_damage(amount, kind),
        None => HitOutcome::Unhandled { damage: amount },
    }
}

// ============================================================================
// Example: Handlers
// ============================================================================

struct MagicShield {
    shield_points: i32,
    next: Link,
}

impl MagicShield {
    fn new() -> Self {
        Self {
            shield_points: 50,
            next: None,
        }
    }

    fn with_next(mut self, next: impl DamageHandler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl DamageHandler for MagicShield {
    fn handle_damage(&mut self, mut amount: i32, kind: DamageKind) -> HitOutcome {
        if kind == DamageKind::Magic {
            if self.shield_points > 0 {
                let absorbed = amount.min(self.shield_points);
                self.shield_points -= absorbed;
                amount -= absorbed;
                println!(
                    "[Magic Shield] Absorbed {} magic damage. (Shield left: {})",
                    absorbed, self.shield_points
                );
            } else {
                println!("[Magic Shield] Shield is broken! Damage passes through.");
            }
        }

        if amount > 0 {
            pass_on(&mut self.next, amount, kind)
        } else {
            HitOutcome::Absorbed
        }
    }
}

struct IronArmor {
    defense_power: i32,
    next: Link,
}

impl IronArmor {
    fn new() -> Self {
        Self {
            defense_power: 10,
            next: None,
        }
    }

    fn with_next(mut self, next: impl DamageHandler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl DamageHandler for IronArmor {
    fn handle_damage(&mut self, mut amount: i32, kind: DamageKind) -> HitOutcome {
        if kind == DamageKind::Physical {
            let reduced = (amount - self.defense_power).max(0);
            println!("[Iron Armor] Armor blocked {} damage.", amount - reduced);
            amount = reduced;
        }

        if amount > 0 {
            pass_on(&mut self.next, amount, kind)
        } else {
            println!("[Iron Armor] Attack fully blocked!");
            HitOutcome::Blocked
        }
    }
}

/// End of the chain: whatever reaches the body is taken as health loss.
struct CharacterBody {
    name: String,
    health: i32,
}

impl CharacterBody {
    fn new(name: &str, health: i32) -> Self {
        Self {
            name: name.to_string(),
            health,
        }
    }
}

impl DamageHandler for CharacterBody {
    fn handle_damage(&mut self, amount: i32, _kind: DamageKind) -> HitOutcome {
        self.health -= amount;
        println!(
            "[Body] {} took {} damage! (Health left: {})",
            self.name, amount, self.health
        );
        if self.health <= 0 {
            println!("*** {} has died! ***", self.name);
            tracing::debug!(name = %self.name, "character died");
        }
        HitOutcome::Hit {
            damage: amount,
            remaining_health: self.health,
        }
    }
}

fn knight_chain() -> MagicShield {
    MagicShield::new().with_next(IronArmor::new().with_next(CharacterBody::new("Knight Ertugrul", 100)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_physical_hit_reduced_by_armor() {
        let mut chain = knight_chain();
        assert_eq!(
            chain.handle_damage(50, DamageKind::Physical),
            HitOutcome::Hit { damage: 40, remaining_health: 60 }
        );
    }

    #[test]
    fn test_magic_hit_mostly_absorbed() {
        let mut chain = knight_chain();
        chain.handle_damage(50, DamageKind::Physical);
        assert_eq!(
            chain.handle_damage(60, DamageKind::Magic),
            HitOutcome::Hit { damage: 10, remaining_health: 50 }
        );
        assert_eq!(chain.shield_points, 0);
    }

    #[test]
    fn test_small_physical_hit_fully_blocked() {
        let mut chain = knight_chain();
        assert_eq!(chain.handle_damage(5, DamageKind::Physical), HitOutcome::Blocked);
    }

    #[test]
    fn test_small_magic_hit_absorbed() {
        let mut chain = knight_chain();
        assert_eq!(chain.handle_damage(30, DamageKind::Magic), HitOutcome::Absorbed);
        assert_eq!(chain.shield_points, 20);
    }

    #[test]
    fn test_broken_shield_lets_magic_through() {
        let mut chain = knight_chain();
        chain.handle_damage(50, DamageKind::Magic);
        assert_eq!(
            chain.handle_damage(25, DamageKind::Magic),
            HitOutcome::Hit { damage: 25, remaining_health: 75 }
        );
    }

    #[test]
    fn test_body_death() {
        let mut chain = knight_chain();
        let outcome = chain.handle_damage(200, DamageKind::Physical);
        assert_eq!(outcome, HitOutcome::Hit { damage: 190, remaining_health: -90 });
    }

    #[test]
    fn test_chain_without_body() {
        let mut shield = MagicShield::new();
        assert_eq!(
            shield.handle_damage(70, DamageKind::Magic),
            HitOutcome::Unhandled { damage: 20 }
        );
    }

    proptest! {
        #[test]
        fn test_physical_damage_conserved(amount in 1i32..500) {
            let mut chain = knight_chain();
            match chain.handle_damage(amount, DamageKind::Physical) {
                HitOutcome::Blocked => prop_assert!(amount <= 10),
                HitOutcome::Hit { damage, remaining_health } => {
                    prop_assert_eq!(damage, amount - 10);
                    prop_assert_eq!(remaining_health, 100 - damage);
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }

        #[test]
        fn test_magic_damage_conserved(amount in 1i32..500) {
            let mut chain = knight_chain();
            match chain.handle_damage(amount, DamageKind::Magic) {
                HitOutcome::Absorbed => prop_assert!(amount <= 50),
                HitOutcome::Hit { damage, .. } => prop_assert_eq!(damage, amount - 50),
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}

fn main() {
    console::init_logging();
    console::header("Chain of Responsibility (Damage System)");

    let mut chain = knight_chain();
    let attacks = [
        ("Enemy swings a sword (50 Physical)", 50, DamageKind::Physical),
        ("Enemy casts a fireball (60 Magic)", 60, DamageKind::Magic),
        ("Enemy throws a pebble (5 Physical)", 5, DamageKind::Physical),
        ("Enemy casts a frost bolt (15 Magic)", 15, DamageKind::Magic),
    ];

    for (i, (title, amount, kind)) in attacks.into_iter().enumerate() {
        if i > 0 {
            console::rule(40);
        }
        println!(">>> {} <<<", title);
        let outcome = chain.handle_damage(amount, kind);
        tracing::debug!(?outcome, "hit resolved");
    }

    console::pause();
}
