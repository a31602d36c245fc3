use crate::cards::{CardPool, Rarity};

pub mod aggregate;
pub mod single;
mod slots;

pub use slots::{SlotDistribution, SlotStrategy};

/// Cards in a standard pack.
pub const CARDS_PER_PACK: usize = 5;
/// Cards in a four-slot guaranteed rare pack.
pub const GUARANTEED_RARE_CARDS_PER_PACK: usize = 4;
/// Leading slots of a standard pack that always hold a one diamond card.
pub const GUARANTEED_DIAMOND_SLOTS: usize = 3;

/// Published chances of each kind of pack, and of the sixth slot rarities.
/// The standard and god weights sum to one, as do the three six pack booster
/// weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackWeights {
    pub standard: f64,
    pub god: f64,

    // Boosters that contain six pack only cards.
    pub six_pack_standard: f64,
    pub six_pack_god: f64,
    pub six_pack_bonus: f64,

    pub sixth_slot_star: f64,
    pub sixth_slot_diamond: f64,
}

impl Default for PackWeights {
    fn default() -> Self {
        PackWeights {
            standard: 0.9995,
            god: 0.0005,
            six_pack_standard: 0.9162,
            six_pack_god: 0.0005,
            six_pack_bonus: 0.0833,
            sixth_slot_star: 0.129,
            sixth_slot_diamond: 0.871,
        }
    }
}

/// The kinds of pack a booster can be opened as. Exactly one is drawn per
/// opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    Standard,
    God,
    SixPack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackProbabilityMode {
    StandardNoShiny,
    /// Shiny tiers in slots four and five, god packs but no sixth card.
    StandardShiny,
    StandardShinySixPack,
    /// Four slot pack whose last card is always four diamond.
    GuaranteedRare,
}

impl PackProbabilityMode {
    pub fn strategy(self) -> SlotStrategy {
        match self {
            PackProbabilityMode::StandardNoShiny => SlotStrategy::StandardNoShiny,
            PackProbabilityMode::StandardShiny | PackProbabilityMode::StandardShinySixPack => {
                SlotStrategy::StandardShiny
            }
            PackProbabilityMode::GuaranteedRare => SlotStrategy::GuaranteedRare,
        }
    }

    pub fn cards_per_pack(self) -> usize {
        match self {
            PackProbabilityMode::StandardNoShiny
            | PackProbabilityMode::StandardShiny
            | PackProbabilityMode::StandardShinySixPack => CARDS_PER_PACK,
            PackProbabilityMode::GuaranteedRare => GUARANTEED_RARE_CARDS_PER_PACK,
        }
    }

    /// Leading slots that are handled as repeated one diamond draws rather
    /// than through the slot table.
    pub fn guaranteed_diamond_slots(self) -> usize {
        match self {
            PackProbabilityMode::StandardNoShiny
            | PackProbabilityMode::StandardShiny
            | PackProbabilityMode::StandardShinySixPack => GUARANTEED_DIAMOND_SLOTS,
            PackProbabilityMode::GuaranteedRare => 0,
        }
    }

    /// Pack kinds this mode can produce and the chance of each.
    pub fn branches(self, weights: &PackWeights) -> Vec<(Branch, f64)> {
        match self {
            PackProbabilityMode::StandardNoShiny
            | PackProbabilityMode::StandardShiny
            | PackProbabilityMode::GuaranteedRare => vec![
                (Branch::Standard, weights.standard),
                (Branch::God, weights.god),
            ],
            PackProbabilityMode::StandardShinySixPack => vec![
                (Branch::Standard, weights.six_pack_standard),
                (Branch::God, weights.six_pack_god),
                (Branch::SixPack, weights.six_pack_bonus),
            ],
        }
    }

    /// Rarity split of the bonus sixth card, drawn only from six pack only
    /// cards. Only two tiers ever appear there; a booster with six pack only
    /// cards of any other tier can't pull them.
    pub fn sixth_slot(self, weights: &PackWeights) -> Option<[(Rarity, f64); 2]> {
        match self {
            PackProbabilityMode::StandardShinySixPack => Some([
                (Rarity::OneStar, weights.sixth_slot_star),
                (Rarity::FourDiamond, weights.sixth_slot_diamond),
            ]),
            PackProbabilityMode::StandardNoShiny
            | PackProbabilityMode::StandardShiny
            | PackProbabilityMode::GuaranteedRare => None,
        }
    }
}

/// What a caller knows about a booster, reduced to the mode used for its odds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoosterConfig {
    pub has_shiny_rarity: bool,
    pub has_six_packs: bool,
    pub guaranteed_rare_layout: bool,
}

impl BoosterConfig {
    /// Derive the shiny and six pack flags from the booster's cards. The pack
    /// layout can't be told from the cards so it is passed in.
    pub fn scan(cards: &[crate::cards::Card], guaranteed_rare_layout: bool) -> Self {
        let pool = CardPool::from_cards(cards);
        Self {
            has_shiny_rarity: pool.has_shiny(),
            has_six_packs: pool.has_six_pack_only(),
            guaranteed_rare_layout,
        }
    }

    pub fn mode(&self) -> PackProbabilityMode {
        if self.guaranteed_rare_layout {
            if self.has_six_packs {
                tracing::warn!("Guaranteed rare packs have no sixth slot, ignoring six pack cards.");
            }
            return PackProbabilityMode::GuaranteedRare;
        }

        match (self.has_shiny_rarity, self.has_six_packs) {
            (false, false) => PackProbabilityMode::StandardNoShiny,
            (false, true) => {
                tracing::warn!("Six pack cards in a booster without shinies, ignoring them.");
                PackProbabilityMode::StandardNoShiny
            }
            (true, false) => PackProbabilityMode::StandardShiny,
            (true, true) => PackProbabilityMode::StandardShinySixPack,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchProbability {
    pub branch: Branch,
    /// Chance that an opened pack is of this kind.
    pub weight: f64,
    /// Chance of a new card given a pack of this kind.
    pub probability: f64,
}

impl BranchProbability {
    pub fn weighted(&self) -> f64 {
        self.weight * self.probability
    }
}

/// `numerator / denominator`, or zero when there is nothing to divide by.
pub(crate) fn share(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn miss(hit: f64) -> f64 {
    (1.0 - hit).clamp(0.0, 1.0)
}

/// Per-draw hit chances that every branch is built from. `regular` and
/// `bonus` give, for a rarity, the chance that a single draw of that rarity
/// from the regular slots (or the sixth slot) is a hit. `god` is the chance
/// that a single god pack card is a hit.
pub(crate) struct DrawHits<R, B> {
    pub regular: R,
    pub god: f64,
    pub bonus: B,
}

impl<R: Fn(Rarity) -> f64, B: Fn(Rarity) -> f64> DrawHits<R, B> {
    /// Chance that none of the slots of a standard pack of this mode is a hit.
    fn no_hit_in_standard_slots(&self, mode: PackProbabilityMode) -> f64 {
        let guaranteed = mode.guaranteed_diamond_slots();
        let leading = miss((self.regular)(Rarity::OneDiamond)).powi(guaranteed as i32);

        mode.strategy().slots()[guaranteed..]
            .iter()
            .map(|slot| miss(slot.iter().map(|&(r, w)| w * (self.regular)(r)).sum()))
            .product::<f64>()
            * leading
    }

    fn sixth_slot_hit(&self, mode: PackProbabilityMode, weights: &PackWeights) -> f64 {
        mode.sixth_slot(weights)
            .map(|split| split.iter().map(|&(r, w)| w * (self.bonus)(r)).sum::<f64>())
            .unwrap_or(0.0)
    }

    pub fn branches(
        &self,
        mode: PackProbabilityMode,
        weights: &PackWeights,
    ) -> Vec<BranchProbability> {
        let no_hit_standard = self.no_hit_in_standard_slots(mode);

        mode.branches(weights)
            .into_iter()
            .map(|(branch, weight)| {
                let probability = match branch {
                    Branch::Standard => 1.0 - no_hit_standard,
                    Branch::God => 1.0 - miss(self.god).powi(mode.cards_per_pack() as i32),
                    Branch::SixPack => {
                        1.0 - no_hit_standard * miss(self.sixth_slot_hit(mode, weights))
                    }
                };
                BranchProbability {
                    branch,
                    weight,
                    probability,
                }
            })
            .collect()
    }
}
