/// The error type for [`Hand`](crate::Hand) operations.
#[derive(Debug, PartialEq, Eq)]
pub enum HandError {
    Empty,
    IndexOutOfRange { index: usize, len: usize },
}

impl std::error::Error for HandError {}

impl std::fmt::Display for HandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandError::Empty => write!(f, "Tried to play a card from an empty hand"),
            HandError::IndexOutOfRange { index, len } => write!(
                f,
                "Tried to play the card at position {}, but the hand only has {} cards",
                index + 1,
                len
            ),
        }
    }
}

/// The error type for setting up and playing a game.
///
/// None of these are recoverable: they mean a broken configuration or a
/// broken invariant, never bad user input (which is re-prompted instead).
#[derive(Debug)]
pub enum GameError {
    NoPlayers,
    TooFewPlayers {
        found: usize,
    },
    EmptyDeck,
    GameOver,
    IllegalPlay {
        player: String,
        err: HandError,
    },
    MissingAttribute {
        card: String,
        attribute: String,
    },
    CardWithoutAttributes {
        card: String,
    },
    /// The input collaborator of an interactive seat failed, e.g. stdin was closed.
    Input(std::io::Error),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalPlay { err, .. } => Some(err),
            GameError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NoPlayers => write!(f, "Cannot deal cards to zero players"),
            GameError::TooFewPlayers { found } => {
                write!(f, "A game needs at least two players, but {} were given", found)
            }
            GameError::EmptyDeck => write!(f, "A game needs at least one card"),
            GameError::GameOver => write!(f, "Tried to play a round after the game ended"),
            GameError::IllegalPlay { player, err: _ } => {
                write!(f, "Illegal play by {}", player)
            }
            GameError::MissingAttribute { card, attribute } => {
                write!(f, "Card '{}' has no attribute '{}'", card, attribute)
            }
            GameError::CardWithoutAttributes { card } => {
                write!(f, "Card '{}' has no attributes to compare", card)
            }
            GameError::Input(_) => write!(f, "Could not read input for an interactive player"),
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Input(err)
    }
}
