use crate::cards::Rarity::{self, *};

/// Chance of each rarity for one slot of a pack. Weights sum to one.
pub type SlotDistribution = &'static [(Rarity, f64)];

const ONE_DIAMOND: SlotDistribution = &[(OneDiamond, 1.0)];

// Crown cards can only be pulled from god packs in boosters without shinies.
const NO_SHINY: &[SlotDistribution] = &[
    ONE_DIAMOND,
    ONE_DIAMOND,
    ONE_DIAMOND,
    &[
        (TwoDiamond, 0.9004),
        (ThreeDiamond, 0.05),
        (FourDiamond, 0.01666),
        (OneStar, 0.02572),
        (TwoStar, 0.005),
        (ThreeStar, 0.00222),
    ],
    &[
        (TwoDiamond, 0.6016),
        (ThreeDiamond, 0.2),
        (FourDiamond, 0.06664),
        (OneStar, 0.10288),
        (TwoStar, 0.02),
        (ThreeStar, 0.00888),
    ],
];

const SHINY: &[SlotDistribution] = &[
    ONE_DIAMOND,
    ONE_DIAMOND,
    ONE_DIAMOND,
    &[
        (TwoDiamond, 0.89),
        (ThreeDiamond, 0.04953),
        (FourDiamond, 0.01666),
        (OneStar, 0.02572),
        (TwoStar, 0.005),
        (ThreeStar, 0.00222),
        (OneShiny, 0.00714),
        (TwoShiny, 0.00333),
        (Crown, 0.0004),
    ],
    &[
        (TwoDiamond, 0.56),
        (ThreeDiamond, 0.1981),
        (FourDiamond, 0.06664),
        (OneStar, 0.10288),
        (TwoStar, 0.02),
        (ThreeStar, 0.00888),
        (OneShiny, 0.02857),
        (TwoShiny, 0.01333),
        (Crown, 0.0016),
    ],
];

const GUARANTEED_RARE: &[SlotDistribution] = &[
    ONE_DIAMOND,
    &[(OneDiamond, 0.7), (TwoDiamond, 0.3)],
    &[
        (TwoDiamond, 0.35),
        (ThreeDiamond, 0.15),
        (OneDiamondFoil, 0.2),
        (TwoDiamondFoil, 0.12),
        (ThreeDiamondFoil, 0.06),
        (FourDiamondFoil, 0.02),
        (OneStar, 0.06),
        (TwoStar, 0.02),
        (ThreeStar, 0.005),
        (OneShiny, 0.01),
        (TwoShiny, 0.004),
        (Crown, 0.001),
    ],
    &[(FourDiamond, 1.0)],
];

/// Per-slot rarity tables of a standard (non god) pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStrategy {
    StandardNoShiny,
    StandardShiny,
    GuaranteedRare,
}

impl SlotStrategy {
    pub fn slots(self) -> &'static [SlotDistribution] {
        match self {
            SlotStrategy::StandardNoShiny => NO_SHINY,
            SlotStrategy::StandardShiny => SHINY,
            SlotStrategy::GuaranteedRare => GUARANTEED_RARE,
        }
    }

    /// Distribution of the zero indexed `slot`, if the pack has that many.
    pub fn slot(self, slot: usize) -> Option<SlotDistribution> {
        self.slots().get(slot).copied()
    }

    pub fn weight(self, slot: usize, rarity: Rarity) -> f64 {
        self.slot(slot)
            .and_then(|d| d.iter().find(|(r, _)| *r == rarity))
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod test {
    use crate::cards::Rarity;

    use super::SlotStrategy;

    const STRATEGIES: [SlotStrategy; 3] = [
        SlotStrategy::StandardNoShiny,
        SlotStrategy::StandardShiny,
        SlotStrategy::GuaranteedRare,
    ];

    #[test]
    fn test_slots_sum_to_one() {
        for strategy in STRATEGIES {
            for (i, slot) in strategy.slots().iter().enumerate() {
                let total: f64 = slot.iter().map(|(_, w)| w).sum();
                assert!(
                    (total - 1.0).abs() < 1e-9,
                    "{strategy:?} slot {i} sums to {total}"
                );
                assert!(slot.iter().all(|(_, w)| *w > 0.0 && *w <= 1.0));
            }
        }
    }

    #[test]
    fn test_slot_counts() {
        assert_eq!(SlotStrategy::StandardNoShiny.slots().len(), 5);
        assert_eq!(SlotStrategy::StandardShiny.slots().len(), 5);
        assert_eq!(SlotStrategy::GuaranteedRare.slots().len(), 4);
        assert!(SlotStrategy::GuaranteedRare.slot(4).is_none());
    }

    #[test]
    fn test_no_shiny_or_crown_without_shinies() {
        for slot in SlotStrategy::StandardNoShiny.slots() {
            assert!(slot
                .iter()
                .all(|(r, _)| !r.is_shiny() && *r != Rarity::Crown));
        }
        assert!(SlotStrategy::StandardShiny.weight(4, Rarity::Crown) > 0.0);
    }

    #[test]
    fn test_guaranteed_slots() {
        for strategy in [SlotStrategy::StandardNoShiny, SlotStrategy::StandardShiny] {
            for i in 0..3 {
                assert_eq!(strategy.weight(i, Rarity::OneDiamond), 1.0);
                assert_eq!(strategy.slot(i).map(|d| d.len()), Some(1));
            }
        }
        assert_eq!(SlotStrategy::GuaranteedRare.weight(0, Rarity::OneDiamond), 1.0);
        assert_eq!(SlotStrategy::GuaranteedRare.weight(3, Rarity::FourDiamond), 1.0);
        assert_eq!(SlotStrategy::GuaranteedRare.weight(3, Rarity::OneDiamond), 0.0);
        assert!(SlotStrategy::GuaranteedRare.weight(2, Rarity::ThreeDiamondFoil) > 0.0);
    }
}
