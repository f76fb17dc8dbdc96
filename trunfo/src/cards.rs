use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A trading card: a name and a set of numeric attributes.
///
/// Cards are immutable once created. They are never cloned by the engine,
/// only moved between hands, so every card in a game exists exactly once.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    name: String,
    attributes: BTreeMap<String, f64>,
}

impl Card {
    pub fn new<I, K>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes, ordered by name.
    pub fn attributes(&self) -> &BTreeMap<String, f64> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }

    /// Maps free-form user input to one of this card's attribute names.
    ///
    /// Surrounding whitespace is ignored. An exact match wins, otherwise the
    /// first attribute that matches ignoring case is returned.
    pub fn resolve_attribute(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if let Some((key, _)) = self.attributes.get_key_value(input) {
            return Some(key);
        }
        self.attributes
            .keys()
            .find(|key| key.to_lowercase() == input.to_lowercase())
            .map(String::as_str)
    }
}

/// Orders attribute values. This is a total order, so NaN and infinities
/// compare deterministically instead of poisoning a round.
///
/// `-0.0` and `0.0` are equal.
pub fn compare_values(a: f64, b: f64) -> Ordering {
    // Adding zero turns -0.0 into 0.0 and leaves every other value alone.
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {{", self.name)?;
        for (idx, (key, value)) in self.attributes.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Shorthand for creating cards.
///
/// ```
/// # use trunfo::card;
/// let card = card!("Carro A", velocidade: 220, peso: 1200);
/// assert_eq!(card.name(), "Carro A");
/// assert_eq!(card.attribute("peso"), Some(1200.0));
/// ```
#[macro_export]
macro_rules! card {
    ($name:expr $(, $attr:ident : $value:expr)* $(,)?) => {{
        let attributes: Vec<(&str, f64)> = vec![$((stringify!($attr), $value as f64)),*];
        $crate::Card::new($name, attributes)
    }};
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
