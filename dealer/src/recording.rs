use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use trunfo::{RoundOutcome, Standings};

/// Writes every game's rounds and result as a JSON file into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    rounds: Vec<RoundOutcome>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            rounds: Vec::new(),
        })
    }

    pub fn store_round(&mut self, outcome: &RoundOutcome) {
        self.rounds.push(outcome.clone());
    }

    /// Writes `game_000001.json`, `game_000002.json`, ... and forgets the stored rounds.
    pub fn write_game_recording(
        &mut self,
        players: Vec<String>,
        standings: &Standings,
    ) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let recording = GameRecording {
            players,
            rounds: std::mem::take(&mut self.rounds),
            standings,
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Serialize)]
pub struct GameRecording<'a> {
    players: Vec<String>,
    rounds: Vec<RoundOutcome>,
    standings: &'a Standings,
}

#[cfg(test)]
mod tests {
    use trunfo::{GameResult, Play, Resolution, Standing};

    use super::*;

    #[test]
    fn missing_directory_is_rejected() {
        let dir = std::env::temp_dir().join("dealer-recorder-does-not-exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_numbered_files() {
        let dir = std::env::temp_dir().join(format!("dealer-recorder-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = Recorder::new(dir.clone()).unwrap();

        recorder.store_round(&RoundOutcome {
            round_number: 1,
            chooser_idx: 0,
            attribute: String::from("peso"),
            plays: vec![Play {
                player_idx: 0,
                player: String::from("IA 1"),
                card: String::from("Carro A"),
                value: 1200.0,
            }],
            winners: vec![0],
            resolution: Resolution::Won {
                player_idx: 0,
                cards_won: 1,
            },
        });
        let standings = Standings {
            ranking: vec![Standing {
                player_idx: 0,
                name: String::from("IA 1"),
                cards: 1,
            }],
            result: GameResult::WonByPlayer { player_idx: 0 },
            rounds_played: 1,
            end_reason: None,
            cards_out_of_play: 0,
        };
        let first = recorder
            .write_game_recording(vec![String::from("IA 1")], &standings)
            .unwrap();
        let second = recorder
            .write_game_recording(vec![String::from("IA 1")], &standings)
            .unwrap();
        assert!(first.ends_with("game_000001.json"));
        assert!(second.ends_with("game_000002.json"));

        let json: serde_json::Value =
            serde_json::from_reader(File::open(&first).unwrap()).unwrap();
        assert_eq!(json["rounds"][0]["attribute"], "peso");
        assert_eq!(json["rounds"][0]["resolution"]["type"], "Won");
        let json: serde_json::Value =
            serde_json::from_reader(File::open(&second).unwrap()).unwrap();
        assert_eq!(json["rounds"].as_array().unwrap().len(), 0);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
