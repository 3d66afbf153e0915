// Pattern 11: Factory - Spawning Enemies by Type
// Callers ask the factory for an `EnemyType` and get back a trait object;
// they never construct `Orc` or `Ghost` themselves.

use oop_design_patterns::console;
use oop_design_patterns::PatternError;
use std::str::FromStr;

trait Enemy {
    fn attack(&self) -> String;
    fn move_step(&self) -> String;
}

struct Orc;

impl Enemy for Orc {
    fn attack(&self) -> String {
        "Orc: deals heavy damage with its axe!".to_string()
    }

    fn move_step(&self) -> String {
        "Orc: stomps forward with slow, noisy steps.".to_string()
    }
}

struct Ghost;

impl Enemy for Ghost {
    fn attack(&self) -> String {
        "Ghost: drains the soul for damage!".to_string()
    }

    fn move_step(&self) -> String {
        "Ghost: glides through the walls.".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnemyType {
    Orc,
    Ghost,
}

impl FromStr for EnemyType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orc" => Ok(EnemyType::Orc),
            "ghost" => Ok(EnemyType::Ghost),
            _ => Err(PatternError::UnknownEnemyType(s.to_string())),
        }
    }
}

// ============================================================================
// Example: Factory
// ============================================================================

struct EnemyFactory;

impl EnemyFactory {
    fn create(kind: EnemyType) -> Box<dyn Enemy> {
        match kind {
            EnemyType::Orc => Box::new(Orc),
            EnemyType::Ghost => Box::new(Ghost),
        }
    }

    fn create_by_name(name: &str) -> Result<Box<dyn Enemy>, PatternError> {
        Ok(Self::create(name.parse()?))
    }
}

fn run_wave(number: usize, name: &str) -> Result<(), PatternError> {
    println!("Wave {} begins: {} attack!", number, name);
    let enemy = EnemyFactory::create_by_name(name)?;
    println!("{}", enemy.move_step());
    println!("{}", enemy.attack());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_returns_matching_enemy() {
        assert!(EnemyFactory::create(EnemyType::Orc).attack().starts_with("Orc"));
        assert!(EnemyFactory::create(EnemyType::Ghost).move_step().starts_with("Ghost"));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Ghost".parse::<EnemyType>(), Ok(EnemyType::Ghost));
        assert_eq!(" ORC ".parse::<EnemyType>(), Ok(EnemyType::Orc));
    }

    #[test]
    fn test_unknown_type_is_error() {
        assert_eq!(
            "Dragon".parse::<EnemyType>(),
            Err(PatternError::UnknownEnemyType("Dragon".to_string()))
        );
        assert!(run_wave(3, "Dragon").is_err());
    }
}

fn main() {
    console::init_logging();
    console::header("Factory Pattern Game Scenario");

    for (i, name) in ["Orc", "Ghost", "Dragon"].iter().enumerate() {
        if let Err(err) = run_wave(i + 1, name) {
            console::failure(&format!("An error occurred: {}", err));
        }
        println!();
    }

    console::pause();
}
