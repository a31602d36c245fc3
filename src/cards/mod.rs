use std::fmt::Display;

pub mod import;
mod pool;

pub use pool::CardPool;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
    OneDiamond,
    TwoDiamond,
    ThreeDiamond,
    FourDiamond,
    OneStar,
    TwoStar,
    ThreeStar,
    OneShiny,
    TwoShiny,
    Crown,

    // Foil printings only appear in the four-slot guaranteed rare packs.
    OneDiamondFoil,
    TwoDiamondFoil,
    ThreeDiamondFoil,
    FourDiamondFoil,
}

impl Rarity {
    pub const ALL: [Rarity; 14] = [
        Rarity::OneDiamond,
        Rarity::TwoDiamond,
        Rarity::ThreeDiamond,
        Rarity::FourDiamond,
        Rarity::OneStar,
        Rarity::TwoStar,
        Rarity::ThreeStar,
        Rarity::OneShiny,
        Rarity::TwoShiny,
        Rarity::Crown,
        Rarity::OneDiamondFoil,
        Rarity::TwoDiamondFoil,
        Rarity::ThreeDiamondFoil,
        Rarity::FourDiamondFoil,
    ];

    /// Symbol printed in the corner of the card.
    pub fn symbol(self) -> &'static str {
        match self {
            Rarity::OneDiamond => "◊",
            Rarity::TwoDiamond => "◊◊",
            Rarity::ThreeDiamond => "◊◊◊",
            Rarity::FourDiamond => "◊◊◊◊",
            Rarity::OneStar => "☆",
            Rarity::TwoStar => "☆☆",
            Rarity::ThreeStar => "☆☆☆",
            Rarity::OneShiny => "✵",
            Rarity::TwoShiny => "✵✵",
            Rarity::Crown => "♛",
            Rarity::OneDiamondFoil => "◊ foil",
            Rarity::TwoDiamondFoil => "◊◊ foil",
            Rarity::ThreeDiamondFoil => "◊◊◊ foil",
            Rarity::FourDiamondFoil => "◊◊◊◊ foil",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Rarity> {
        let symbol = symbol.trim();
        Rarity::ALL.into_iter().find(|r| r.symbol() == symbol)
    }

    pub fn is_shiny(self) -> bool {
        match self {
            Rarity::OneShiny | Rarity::TwoShiny => true,
            Rarity::OneDiamond
            | Rarity::TwoDiamond
            | Rarity::ThreeDiamond
            | Rarity::FourDiamond
            | Rarity::OneStar
            | Rarity::TwoStar
            | Rarity::ThreeStar
            | Rarity::Crown
            | Rarity::OneDiamondFoil
            | Rarity::TwoDiamondFoil
            | Rarity::ThreeDiamondFoil
            | Rarity::FourDiamondFoil => false,
        }
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

// Rarities are written as their printed symbol.
impl serde::Serialize for Rarity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> serde::Deserialize<'de> for Rarity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = <String as serde::Deserialize>::deserialize(deserializer)?;
        Rarity::from_symbol(&symbol)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown rarity symbol: {symbol}")))
    }
}

/// Named subsets of rarities that collection statistics are reported for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RarityGroup {
    All,
    /// Every diamond tier, foil printings included.
    Diamond,
    /// Diamond tiers plus the lowest star tier.
    Tradable,
    /// Tiers that can appear in a god pack.
    GodPack,
}

impl RarityGroup {
    pub fn contains(self, rarity: Rarity) -> bool {
        let diamond = match rarity {
            Rarity::OneDiamond
            | Rarity::TwoDiamond
            | Rarity::ThreeDiamond
            | Rarity::FourDiamond
            | Rarity::OneDiamondFoil
            | Rarity::TwoDiamondFoil
            | Rarity::ThreeDiamondFoil
            | Rarity::FourDiamondFoil => true,
            Rarity::OneStar
            | Rarity::TwoStar
            | Rarity::ThreeStar
            | Rarity::OneShiny
            | Rarity::TwoShiny
            | Rarity::Crown => false,
        };

        match self {
            RarityGroup::All => true,
            RarityGroup::Diamond => diamond,
            RarityGroup::Tradable => diamond || rarity == Rarity::OneStar,
            RarityGroup::GodPack => !diamond,
        }
    }

    /// Cards without a rarity (promos) are never part of any group.
    pub fn admits(self, card: &Card) -> bool {
        card.rarity.is_some_and(|rarity| self.contains(rarity))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Card {
    name: String,
    set: String,
    pub rarity: Option<Rarity>,
    /// Only obtainable from the bonus sixth slot of a six card pack.
    pub six_pack_only: bool,
}

impl Card {
    pub fn new(name: String, set: String, rarity: Option<Rarity>, six_pack_only: bool) -> Self {
        Self {
            name,
            set,
            rarity,
            six_pack_only,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&self) -> &str {
        &self.set
    }

    #[cfg(test)]
    pub fn sample(rarity: Rarity) -> Self {
        static ID: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(1);

        let id = ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Self {
            name: format!("Card {id}"),
            set: "TST".to_string(),
            rarity: Some(rarity),
            six_pack_only: false,
        }
    }

    #[cfg(test)]
    pub fn sample_six_pack_only(rarity: Rarity) -> Self {
        Self {
            six_pack_only: true,
            ..Self::sample(rarity)
        }
    }

    #[cfg(test)]
    pub fn samples(rarity: Rarity, n: usize) -> Vec<Self> {
        (0..n).map(|_| Self::sample(rarity)).collect()
    }
}
