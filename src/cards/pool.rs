use std::{collections::HashMap, fmt::Debug};

use super::{Card, Rarity, RarityGroup};

/// Tally of a card list by rarity and by whether the card is only found in
/// the sixth slot. This is all the odds calculations need to know about a
/// booster, so card lists are reduced to one of these before any maths.
#[derive(Clone, Default)]
pub struct CardPool {
    tiers: HashMap<(Rarity, bool), usize>,
    promos: usize,
}

impl CardPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Self {
        let mut pool = Self::new();
        for card in cards {
            pool.add(card);
        }
        pool
    }

    #[cfg(test)]
    pub fn sample(counts: &[(Rarity, usize)]) -> Self {
        let mut pool = Self::new();
        for &(rarity, n) in counts {
            for card in Card::samples(rarity, n) {
                pool.add(&card);
            }
        }
        pool
    }

    pub fn add(&mut self, card: &Card) {
        match card.rarity {
            Some(rarity) => *self.tiers.entry((rarity, card.six_pack_only)).or_default() += 1,
            None => self.promos += 1, // Promos can't be pulled from packs.
        }
    }

    pub fn count(&self, rarity: Rarity, six_pack_only: bool) -> usize {
        self.tiers
            .get(&(rarity, six_pack_only))
            .copied()
            .unwrap_or(0)
    }

    /// Cards a god pack can contain. Sixth slot exclusives never appear in
    /// god packs.
    pub fn god_pack_eligible(&self) -> usize {
        self.tiers
            .iter()
            .filter(|((rarity, six_pack_only), _)| {
                !six_pack_only && RarityGroup::GodPack.contains(*rarity)
            })
            .map(|(_, n)| n)
            .sum()
    }

    pub fn has_six_pack_only(&self) -> bool {
        self.tiers.iter().any(|((_, six), n)| *six && *n > 0)
    }

    pub fn has_shiny(&self) -> bool {
        self.tiers.iter().any(|((rarity, _), n)| rarity.is_shiny() && *n > 0)
    }

    /// Number of cards that have a rarity.
    pub fn size(&self) -> usize {
        self.tiers.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl Debug for CardPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let six_pack_only: usize = self
            .tiers
            .iter()
            .filter(|((_, six), _)| *six)
            .map(|(_, n)| n)
            .sum();
        write!(
            f,
            "CardPool {{ cards: {}, god_pack_eligible: {}, six_pack_only: {}, promos: {} }}",
            self.size(),
            self.god_pack_eligible(),
            six_pack_only,
            self.promos
        )
    }
}
