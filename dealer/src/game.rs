use tracing::debug;
use trunfo::{render_round, Card, Game, GameResult, Interactive, Player, RoundOutcome, Standings};

use crate::{Config, ConsolePrompter};

/// Who sits at the table. The human seat, if any, is always the first one.
#[derive(Clone, Debug)]
pub struct Seats {
    pub human: Option<String>,
    pub num_bots: usize,
}

impl Seats {
    pub fn names(&self) -> Vec<String> {
        self.human
            .iter()
            .cloned()
            .chain((1..=self.num_bots).map(|i| format!("IA {}", i)))
            .collect()
    }

    pub fn has_human(&self) -> bool {
        self.human.is_some()
    }

    /// Creates fresh players with empty hands, talking to the terminal for the human seat.
    pub fn players(&self) -> Vec<Player> {
        self.names()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                if idx == 0 && self.has_human() {
                    Player::new(name, Interactive::new(ConsolePrompter::stdio()))
                } else {
                    Player::greedy(name)
                }
            })
            .collect()
    }
}

/// Plays one game to the end.
///
/// Rounds are printed to stdout when `show_rounds` is set, otherwise only logged.
pub fn play_game(
    config: &mut Config,
    players: Vec<Player>,
    deck: Vec<Card>,
    show_rounds: bool,
) -> anyhow::Result<Standings> {
    let names: Vec<String> = players.iter().map(|p| p.name.clone()).collect();
    let mut game = Game::new(players, deck, config.game, &mut config.rng)?;

    let recorder = &mut config.recorder;
    let standings = game.play_to_end(|outcome: &RoundOutcome| {
        if show_rounds {
            println!("\n{}", render_round(outcome));
        } else {
            debug!("{}", render_round(outcome));
        }
        if let Some(rec) = recorder.as_mut() {
            rec.store_round(outcome);
        }
    })?;

    if let Some(rec) = &mut config.recorder {
        let path = rec.write_game_recording(names, &standings)?;
        debug!(path = %path.display(), "Recorded game");
    }
    Ok(standings)
}

/// Results over several games.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: Vec<usize>,
    pub draws: usize,
}

impl MatchScore {
    pub fn new(num_players: usize) -> Self {
        Self {
            wins: vec![0; num_players],
            draws: 0,
        }
    }

    pub fn record(&mut self, standings: &Standings) {
        match standings.result {
            GameResult::WonByPlayer { player_idx } => self.wins[player_idx] += 1,
            GameResult::Draw { .. } => self.draws += 1,
        }
    }

    pub fn num_games(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.draws
    }

    pub fn render(&self, names: &[String]) -> String {
        let num_games = self.num_games().max(1) as f32;
        let mut result = String::from("End result:");
        for (name, wins) in names.iter().zip(&self.wins) {
            result += &format!(
                "\n- {} wins by {} ({:5.1}%)",
                wins,
                name,
                *wins as f32 / num_games * 100.0
            );
        }
        result += &format!(
            "\n- {} draws ({:5.1}%)",
            self.draws,
            self.draws as f32 / num_games * 100.0
        );
        result
    }
}
