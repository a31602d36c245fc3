use bytes::Buf;

use crate::{
    cards::{Card, Rarity},
    Res,
};

#[derive(serde::Deserialize, Debug)]
struct ListedCard {
    name: String,

    /// Set code.
    set: String,

    /// Rarity symbol as printed on the card, e.g. "◊◊" or "♛". Null for promos.
    rarity: Option<Rarity>,

    #[serde(default)]
    six_pack_only: bool,
}

impl ListedCard {
    fn to_card(self) -> Card {
        Card::new(self.name, self.set, self.rarity, self.six_pack_only)
    }
}

/// Decode a JSON array of cards belonging to one booster.
pub fn decode_cards(bytes: bytes::Bytes) -> Res<Vec<Card>> {
    let listed: Vec<ListedCard> =
        serde_json::de::from_reader(bytes.reader()).map_err(|e| e.to_string())?;
    tracing::debug!("Decoded {} listed cards, converting.", listed.len());
    Ok(listed.into_iter().map(ListedCard::to_card).collect())
}

#[cfg(test)]
mod test {
    use crate::cards::Rarity;

    use super::decode_cards;

    #[test]
    fn test_decode_cards() {
        let json = r#"[
            {"name": "Bulbasaur", "set": "A1", "rarity": "◊"},
            {"name": "Mewtwo ex", "set": "A1", "rarity": "☆☆"},
            {"name": "Pikachu", "set": "P-A", "rarity": null},
            {"name": "Eevee", "set": "A3b", "rarity": "☆", "six_pack_only": true}
        ]"#;

        let cards = decode_cards(bytes::Bytes::from(json)).unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].name(), "Bulbasaur");
        assert_eq!(cards[0].rarity, Some(Rarity::OneDiamond));
        assert_eq!(cards[1].rarity, Some(Rarity::TwoStar));
        assert_eq!(cards[2].rarity, None);
        assert!(!cards[2].six_pack_only);
        assert_eq!(cards[3].set(), "A3b");
        assert!(cards[3].six_pack_only);
    }

    #[test]
    fn test_unknown_rarity() {
        let json = r#"[{"name": "Charizard", "set": "A1", "rarity": "mythic"}]"#;
        let e = decode_cards(bytes::Bytes::from(json)).unwrap_err();
        assert!(e.contains("unknown rarity symbol: mythic"), "{e}");
    }

    #[test]
    fn test_malformed_json() {
        assert!(decode_cards(bytes::Bytes::from("{not json")).is_err());
    }
}
