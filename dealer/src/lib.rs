mod console;
mod deck;
mod game;
mod recording;
pub use console::*;
pub use deck::*;
pub use game::*;
pub use recording::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub recorder: Option<recording::Recorder>,
    pub game: trunfo::GameConfig,
}
