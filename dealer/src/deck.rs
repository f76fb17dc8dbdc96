use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use trunfo::Card;

/// The built-in deck of 33 cars.
const CARS_JSON: &str = include_str!("../decks/cars.json");

pub fn builtin_deck() -> anyhow::Result<Vec<Card>> {
    parse_deck(CARS_JSON)
}

/// Loads a deck from a JSON array of `{"name": ..., "attributes": {...}}` objects.
pub fn load_deck(path: &Path) -> anyhow::Result<Vec<Card>> {
    let file = File::open(path)
        .with_context(|| format!("Could not open deck file '{}'", path.display()))?;
    let deck: Vec<Card> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse deck file '{}'", path.display()))?;
    check_deck(&deck)?;
    Ok(deck)
}

pub fn parse_deck(json: &str) -> anyhow::Result<Vec<Card>> {
    let deck: Vec<Card> = serde_json::from_str(json)?;
    check_deck(&deck)?;
    Ok(deck)
}

/// Cards are only comparable if they all have the same attributes.
fn check_deck(deck: &[Card]) -> anyhow::Result<()> {
    let Some(first) = deck.first() else {
        anyhow::bail!("The deck has no cards");
    };
    if first.attributes().is_empty() {
        anyhow::bail!("Card '{}' has no attributes", first.name());
    }
    for card in &deck[1..] {
        if !card.attributes().keys().eq(first.attributes().keys()) {
            anyhow::bail!(
                "Card '{}' has the attributes {:?}, but '{}' has {:?}",
                card.name(),
                card.attributes().keys().collect::<Vec<_>>(),
                first.name(),
                first.attributes().keys().collect::<Vec<_>>()
            );
        }
    }
    Ok(())
}
