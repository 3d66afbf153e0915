// Pattern 23: Template Method - Turn-Based Enemy AI
// `execute_turn` fixes the order of a turn. Implementors fill in movement
// and action, and may opt into the taunt hook.

use oop_design_patterns::console;

trait EnemyAi {
    fn name(&self) -> &'static str;
    fn move_to_target(&self) -> String;
    fn perform_action(&self) -> String;

    fn can_taunt(&self) -> bool {
        false
    }

    fn taunt_player(&self) -> Option<String> {
        None
    }

    /// The template. Not meant to be overridden.
    fn execute_turn(&self) -> Vec<String> {
        let mut turn = vec![
            format!("--- {} turn begins ---", self.name()),
            "System: character selected, highlight effect played.".to_string(),
            self.move_to_target(),
            self.perform_action(),
        ];
        if self.can_taunt() {
            turn.extend(self.taunt_player());
        }
        turn.push("System: turn over, action points reset.".to_string());
        turn
    }
}

// ============================================================================
// Example: Concrete AIs
// ============================================================================

struct OrcAi;

impl EnemyAi for OrcAi {
    fn name(&self) -> &'static str {
        "OrcAi"
    }

    fn move_to_target(&self) -> String {
        "Orc: stomps heavily right up to the player.".to_string()
    }

    fn perform_action(&self) -> String {
        "Orc: AXE STRIKE! (20 damage)".to_string()
    }

    fn can_taunt(&self) -> bool {
        true
    }

    fn taunt_player(&self) -> Option<String> {
        Some("Orc shouts: 'Weakling! Is that all you've got?'".to_string())
    }
}

struct HealerAi;

impl EnemyAi for HealerAi {
    fn name(&self) -> &'static str {
        "HealerAi"
    }

    fn move_to_target(&self) -> String {
        "Healer: glides away from the player to a safe spot.".to_string()
    }

    fn perform_action(&self) -> String {
        "Healer: Holy Light! Heals itself and its allies (+15 HP).".to_string()
    }
}

struct KamikazeGoblin;

impl EnemyAi for KamikazeGoblin {
    fn name(&self) -> &'static str {
        "KamikazeGoblin"
    }

    fn move_to_target(&self) -> String {
        "Goblin: runs around like crazy!".to_string()
    }

    fn perform_action(&self) -> String {
        "Goblin: BOOM! Blew itself up.".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_order_is_fixed() {
        let turn = HealerAi.execute_turn();
        assert_eq!(turn.len(), 5);
        assert!(turn[0].contains("HealerAi"));
        assert!(turn[1].starts_with("System: character selected"));
        assert!(turn[2].starts_with("Healer: glides"));
        assert!(turn[3].starts_with("Healer: Holy Light"));
        assert!(turn[4].starts_with("System: turn over"));
    }

    #[test]
    fn test_orc_taunts_before_ending() {
        let turn = OrcAi.execute_turn();
        assert_eq!(turn.len(), 6);
        assert!(turn[4].starts_with("Orc shouts"));
        assert!(turn[5].starts_with("System: turn over"));
    }

    #[test]
    fn test_default_hook_stays_quiet() {
        assert!(!KamikazeGoblin.can_taunt());
        assert!(KamikazeGoblin.taunt_player().is_none());
        assert_eq!(KamikazeGoblin.execute_turn().len(), 5);
    }
}

fn main() {
    console::init_logging();
    console::header("Template Method Pattern (Turn-Based AI)");

    let enemies: Vec<Box<dyn EnemyAi>> = vec![Box::new(OrcAi), Box::new(HealerAi), Box::new(KamikazeGoblin)];
    for enemy in &enemies {
        println!();
        for line in enemy.execute_turn() {
            println!("{}", line);
        }
    }

    console::pause();
}
