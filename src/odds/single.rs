use futures_util::future::try_join;

use crate::{
    cards::{Card, CardPool, Rarity, RarityGroup},
    Res,
};

use super::{share, DrawHits, PackProbabilityMode, PackWeights};

/// Card counts for one booster, usually answered by whatever database holds
/// the booster's card list.
#[allow(async_fn_in_trait)]
pub trait CountSource {
    /// Cards in the booster of `rarity` with the given six pack only flag.
    async fn count_by_rarity(&self, rarity: Rarity, six_pack_only: bool) -> Res<usize>;

    /// Cards that can appear in a god pack, six pack only cards excluded.
    async fn count_god_pack_eligible(&self) -> Res<usize>;
}

impl CountSource for CardPool {
    async fn count_by_rarity(&self, rarity: Rarity, six_pack_only: bool) -> Res<usize> {
        Ok(self.count(rarity, six_pack_only))
    }

    async fn count_god_pack_eligible(&self) -> Res<usize> {
        Ok(self.god_pack_eligible())
    }
}

/// Chance that one pack from the booster contains `target`. Cards of the
/// same rarity and six pack flag are assumed equally likely. Errors only come
/// from `counts`.
pub async fn single_card_probability<S: CountSource>(
    target: &Card,
    counts: &S,
    mode: PackProbabilityMode,
    weights: &PackWeights,
) -> Res<f64> {
    let Some(rarity) = target.rarity else {
        return Ok(0.0);
    };
    let six_pack_only = target.six_pack_only;

    let (same_tier, god_pool) = try_join(
        counts.count_by_rarity(rarity, six_pack_only),
        counts.count_god_pack_eligible(),
    )
    .await?;

    let own_share = share(1, same_tier);
    let hits = DrawHits {
        regular: |r: Rarity| {
            if r == rarity && !six_pack_only {
                own_share
            } else {
                0.0
            }
        },
        god: if RarityGroup::GodPack.contains(rarity) && !six_pack_only {
            share(1, god_pool)
        } else {
            0.0
        },
        bonus: |r: Rarity| {
            if r == rarity && six_pack_only {
                own_share
            } else {
                0.0
            }
        },
    };

    let branches = hits.branches(mode, weights);
    tracing::debug!(
        "Odds of {} ({rarity}, {same_tier} alike, {god_pool} god pack cards) for {mode:?}: {branches:?}",
        target.name()
    );
    Ok(branches
        .iter()
        .map(|b| b.weighted())
        .sum::<f64>()
        .min(1.0))
}
