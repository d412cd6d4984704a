use rand::Rng;

/// Source of randomness for horde releases
pub trait HordeDice {
    /// Uniform roll in `0..100`
    fn roll_percent(&mut self) -> u32;
    /// Uniform index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> HordeDice for R {
    fn roll_percent(&mut self) -> u32 {
        self.gen_range(0..100)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Dice that replay fixed rolls, for deterministic releases.
///
/// Rolls past the end of the script come back as 99, which always ends a
/// wave. Picks cycle through `picks`, or return 0 when none were given.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: Vec<u32>,
    picks: Vec<usize>,
    next_roll: usize,
    next_pick: usize,
}

impl ScriptedDice {
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        Self {
            rolls: rolls.into(),
            ..Self::default()
        }
    }

    pub fn with_picks(mut self, picks: impl Into<Vec<usize>>) -> Self {
        self.picks = picks.into();
        self
    }

    pub fn rolls_used(&self) -> usize {
        self.next_roll
    }
}

impl HordeDice for ScriptedDice {
    fn roll_percent(&mut self) -> u32 {
        let roll = self.rolls.get(self.next_roll).copied().unwrap_or(99);
        self.next_roll += 1;
        roll
    }

    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        pick % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.roll_percent() < 100);
            assert!(rng.pick(3) < 3);
        }
    }

    #[test]
    fn test_scripted_dice_runs_out_high() {
        let mut dice = ScriptedDice::new([5, 10]);
        assert_eq!(dice.roll_percent(), 5);
        assert_eq!(dice.roll_percent(), 10);
        assert_eq!(dice.roll_percent(), 99);
        assert_eq!(dice.rolls_used(), 3);
    }

    #[test]
    fn test_scripted_picks_wrap() {
        let mut dice = ScriptedDice::default().with_picks([1, 4]);
        assert_eq!(dice.pick(2), 1);
        assert_eq!(dice.pick(2), 0);
        assert_eq!(dice.pick(2), 1);
    }
}
