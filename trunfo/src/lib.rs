pub use cards::*;
pub use distributor::*;
pub use errors::*;
pub use game::*;
pub use hand::*;
pub use interactive::*;
pub use player::*;
pub use round::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod distributor;
mod errors;
mod game;
mod hand;
mod interactive;
mod player;
mod round;
mod visualization;
