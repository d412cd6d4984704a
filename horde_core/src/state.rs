use std::collections::BTreeMap;

use tracing::info;

use crate::card::Card;
use crate::config::HordeConfig;
use crate::dice::HordeDice;
use crate::generate::roll_horde;
use crate::ids::IdGenerator;

/// Something the player did to the horde
#[derive(Debug, Clone, PartialEq)]
pub enum HordeAction {
    /// Add a rolled wave to the horde
    Release { buffer: Vec<Card> },
    /// Spend one point of horde strength without adding a card
    Weaken,
    /// Take one card off the table; strength already spent stays spent
    Remove(String),
}

/// Everything that changes while the horde is on the table
#[derive(Debug, Clone, PartialEq)]
pub struct HordeState {
    pub wave: u32,
    pub played_cards: u32,
    pub max_cards: u32,
    /// Display id -> card; ordered so the grid renders in id order
    pub horde: BTreeMap<String, Card>,
}

impl Default for HordeState {
    fn default() -> Self {
        Self::new(HordeConfig::default().max_cards)
    }
}

impl HordeState {
    pub fn new(max_cards: u32) -> Self {
        Self {
            wave: 0,
            played_cards: 0,
            max_cards,
            horde: BTreeMap::new(),
        }
    }

    /// Strength left to spend. Goes negative when a wave's zombie overflows the budget.
    pub fn remaining_strength(&self) -> i64 {
        self.max_cards as i64 - self.played_cards as i64
    }

    pub fn can_weaken(&self) -> bool {
        self.remaining_strength() > 0
    }

    /// Whether a release is allowed given the fetchers' loading flags
    pub fn can_release(&self, tokens_loading: bool, zombie_loading: bool) -> bool {
        !tokens_loading && !zombie_loading && self.remaining_strength() > 0
    }

    pub fn len(&self) -> usize {
        self.horde.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horde.is_empty()
    }

    /// Horde entries in display order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Card)> {
        self.horde.iter().map(|(id, card)| (id.as_str(), card))
    }

    pub fn reduce<I: IdGenerator + ?Sized>(mut self, action: HordeAction, ids: &mut I) -> Self {
        match action {
            HordeAction::Release { buffer } => {
                self.played_cards += buffer.len() as u32;
                for card in buffer {
                    self.horde.insert(ids.next_id(), card);
                }
                self.wave += 1;
                info!(
                    wave = self.wave,
                    played = self.played_cards,
                    "horde released"
                );
            }
            HordeAction::Weaken => {
                self.played_cards += 1;
                info!(played = self.played_cards, "horde weakened");
            }
            HordeAction::Remove(id) => {
                if let Some(card) = self.horde.remove(&id) {
                    info!(%id, card = %card, "removed from horde");
                }
            }
        }
        self
    }

    /// Roll a wave from the current pool and zombie, then apply it.
    /// Returns the new state and how many cards joined.
    pub fn release_horde<D, I>(
        self,
        dice: &mut D,
        ids: &mut I,
        token_pool: &[Card],
        zombie: &[Card],
        config: &HordeConfig,
    ) -> (Self, usize)
    where
        D: HordeDice + ?Sized,
        I: IdGenerator + ?Sized,
    {
        let buffer = roll_horde(dice, token_pool, zombie, self.played_cards, config);
        let added = buffer.len();
        (self.reduce(HordeAction::Release { buffer }, ids), added)
    }
}
