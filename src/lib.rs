//! Odds of pulling a card you don't own yet from a booster pack.
//!
//! `cards` holds the rarity taxonomy and card value objects, `odds` turns a
//! booster's card list (or per-rarity counts) into the probability that one
//! opened pack contains at least one new card.

pub mod cards;
pub mod odds;

pub use cards::{Card, CardPool, Rarity, RarityGroup};
pub use odds::{
    aggregate::{
        branch_breakdown, diamond_only_probability, filtered_probability,
        tradable_only_probability, whole_booster_probability, BranchProbability,
    },
    single::{single_card_probability, CountSource},
    BoosterConfig, Branch, PackProbabilityMode, PackWeights,
};

pub type Res<T> = Result<T, String>;

pub fn err<T, S: ToString>(message: S) -> Res<T> {
    Err(message.to_string())
}
