use crate::cards::{Card, CardPool, Rarity, RarityGroup};

use super::{share, DrawHits, PackProbabilityMode, PackWeights};

pub use super::BranchProbability;

/// Chance that one pack from the booster holds at least one missing card of
/// any rarity.
pub fn whole_booster_probability(
    booster: &[Card],
    missing: &[Card],
    mode: PackProbabilityMode,
    weights: &PackWeights,
) -> f64 {
    filtered_probability(RarityGroup::All, booster, missing, mode, weights)
}

pub fn diamond_only_probability(
    booster: &[Card],
    missing: &[Card],
    mode: PackProbabilityMode,
    weights: &PackWeights,
) -> f64 {
    filtered_probability(RarityGroup::Diamond, booster, missing, mode, weights)
}

pub fn tradable_only_probability(
    booster: &[Card],
    missing: &[Card],
    mode: PackProbabilityMode,
    weights: &PackWeights,
) -> f64 {
    filtered_probability(RarityGroup::Tradable, booster, missing, mode, weights)
}

/// Chance that one pack holds at least one missing card from `group`. Packs
/// are of exactly one kind, so the branches are summed by weight.
pub fn filtered_probability(
    group: RarityGroup,
    booster: &[Card],
    missing: &[Card],
    mode: PackProbabilityMode,
    weights: &PackWeights,
) -> f64 {
    branch_breakdown(group, booster, missing, mode, weights)
        .iter()
        .map(BranchProbability::weighted)
        .sum::<f64>()
        .min(1.0)
}

/// Per pack kind chance of a new card from `group`. Empty when either list
/// has nothing in `group`.
pub fn branch_breakdown(
    group: RarityGroup,
    booster: &[Card],
    missing: &[Card],
    mode: PackProbabilityMode,
    weights: &PackWeights,
) -> Vec<BranchProbability> {
    let all = CardPool::from_cards(booster.iter().filter(|c| group.admits(c)));
    let missing = CardPool::from_cards(missing.iter().filter(|c| group.admits(c)));
    if all.is_empty() || missing.is_empty() {
        tracing::debug!("No {group:?} cards to pull: booster {all:?}, missing {missing:?}");
        return Vec::new();
    }

    let missing_share =
        |rarity: Rarity, six: bool| share(missing.count(rarity, six), all.count(rarity, six));
    let hits = DrawHits {
        regular: |rarity: Rarity| missing_share(rarity, false),
        god: share(missing.god_pack_eligible(), all.god_pack_eligible()),
        bonus: |rarity: Rarity| missing_share(rarity, true),
    };

    let branches = hits.branches(mode, weights);
    tracing::debug!(
        "{group:?} odds for {mode:?}, booster {all:?}, missing {missing:?}: {branches:?}"
    );
    branches
}
