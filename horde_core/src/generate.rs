use tracing::{debug, warn};

use crate::card::Card;
use crate::config::HordeConfig;
use crate::dice::HordeDice;

/// Roll the cards for one wave.
///
/// Tokens keep joining while the roll beats `release_chance` and the horde
/// still has strength left. The wave's non-token zombie is appended last
/// whether or not the budget allows it.
pub fn roll_horde<D: HordeDice + ?Sized>(
    dice: &mut D,
    token_pool: &[Card],
    zombie: &[Card],
    played_cards: u32,
    config: &HordeConfig,
) -> Vec<Card> {
    let mut buffer: Vec<Card> = Vec::new();

    if token_pool.is_empty() {
        warn!("token pool is empty, releasing only the wave's zombie");
    } else {
        let mut roll = dice.roll_percent();
        while roll < config.release_chance
            && played_cards as usize + buffer.len() < config.max_cards as usize
        {
            let idx = dice.pick(token_pool.len());
            buffer.push(token_pool[idx].clone());
            roll = dice.roll_percent();
        }
    }

    let tokens = buffer.len();
    buffer.extend(zombie.iter().cloned());
    debug!(tokens, zombies = buffer.len() - tokens, "rolled wave");
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn named(name: &str) -> Card {
        Card {
            name: name.to_string(),
            ..Card::default()
        }
    }

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_two_tokens_then_zombie() {
        let pool = vec![named("Token A"), named("Token B")];
        let zombie = vec![named("Zombie 1")];
        let mut dice = ScriptedDice::new([10, 10, 70]).with_picks([1, 0]);

        let buffer = roll_horde(&mut dice, &pool, &zombie, 0, &HordeConfig::default());

        assert_eq!(names(&buffer), vec!["Token B", "Token A", "Zombie 1"]);
        assert_eq!(dice.rolls_used(), 3);
    }

    #[test]
    fn test_threshold_roll_stops_the_wave() {
        let pool = vec![named("Token A")];
        let mut dice = ScriptedDice::new([60]);

        let buffer = roll_horde(&mut dice, &pool, &[], 0, &HordeConfig::default());

        assert!(buffer.is_empty());
    }

    #[test]
    fn test_full_budget_skips_tokens_but_keeps_zombie() {
        let pool = vec![named("Token A")];
        let zombie = vec![named("Zombie 1")];
        let mut dice = ScriptedDice::new([0, 0, 0]);

        let buffer = roll_horde(&mut dice, &pool, &zombie, 100, &HordeConfig::default());

        assert_eq!(names(&buffer), vec!["Zombie 1"]);
    }

    #[test]
    fn test_budget_caps_tokens_then_zombie_overflows() {
        let pool = vec![named("Token A")];
        let zombie = vec![named("Zombie 1")];
        let mut dice = ScriptedDice::new(vec![0; 50]);

        let buffer = roll_horde(&mut dice, &pool, &zombie, 97, &HordeConfig::default());

        assert_eq!(names(&buffer), vec!["Token A", "Token A", "Token A", "Zombie 1"]);
    }

    #[test]
    fn test_empty_pool_is_guarded() {
        let zombie = vec![named("Zombie 1")];
        let mut dice = ScriptedDice::new([0, 0, 0]);

        let buffer = roll_horde(&mut dice, &[], &zombie, 0, &HordeConfig::default());

        assert_eq!(names(&buffer), vec!["Zombie 1"]);
        assert_eq!(dice.rolls_used(), 0);
    }

    proptest! {
        #[test]
        fn prop_loop_is_bounded_by_budget(played in 0u32..120, seed in any::<u64>()) {
            use rand::{rngs::StdRng, SeedableRng};

            let pool = vec![named("Token A"), named("Token B")];
            let config = HordeConfig { release_chance: 100, ..HordeConfig::default() };
            let mut rng = StdRng::seed_from_u64(seed);

            let buffer = roll_horde(&mut rng, &pool, &[], played, &config);

            prop_assert_eq!(buffer.len() as u32, 100u32.saturating_sub(played));
        }
    }
}
