use crate::{render_hand, Card, GameError, Hand, Strategy};

/// The input/output collaborator of an interactive seat.
///
/// The engine never touches stdin/stdout itself; a terminal, a test script or
/// anything else can sit behind this.
pub trait Prompter {
    /// Shows some text to the person at the seat.
    fn show(&mut self, message: &str) -> std::io::Result<()>;

    /// Asks a question and returns the answer line.
    ///
    /// Should fail with [`std::io::ErrorKind::UnexpectedEof`] when no more
    /// answers will come, otherwise the seat keeps asking forever.
    fn ask(&mut self, question: &str) -> std::io::Result<String>;
}

/// A seat played by a person through a [`Prompter`].
///
/// The person picks which card of their hand to play (by its 1-based number)
/// and, when it's their turn to choose, the attribute to compare. Invalid
/// answers are re-asked.
pub struct Interactive<P> {
    prompter: P,
}

impl<P: Prompter> Interactive<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    pub fn into_inner(self) -> P {
        self.prompter
    }
}

impl<P: Prompter> Strategy for Interactive<P> {
    fn select_card(&mut self, hand: &Hand) -> Result<usize, GameError> {
        self.prompter.show(&render_hand(hand))?;
        loop {
            let answer = self
                .prompter
                .ask("Choose the card to play (type its number): ")?;
            match answer.trim().parse::<usize>() {
                Ok(number) if (1..=hand.len()).contains(&number) => return Ok(number - 1),
                Ok(_) => self.prompter.show(&format!(
                    "Invalid number. Please choose a number between 1 and {}",
                    hand.len()
                ))?,
                Err(_) => self.prompter.show("Invalid input. Please type a number.")?,
            }
        }
    }

    fn choose_attribute(&mut self, card: &Card) -> Result<String, GameError> {
        self.prompter
            .show(&format!("Attributes of the played card: {}", card))?;
        loop {
            let answer = self.prompter.ask("Choose an attribute to compare: ")?;
            if let Some(attribute) = card.resolve_attribute(&answer) {
                return Ok(String::from(attribute));
            }
            let valid: Vec<&str> = card.attributes().keys().map(String::as_str).collect();
            self.prompter.show(&format!(
                "Invalid attribute. Please choose one of: {}",
                valid.join(", ")
            ))?;
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::card;

    /// Answers questions from a fixed script and remembers what was shown.
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        pub answers: VecDeque<String>,
        pub shown: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| String::from(*s)).collect(),
                shown: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn show(&mut self, message: &str) -> std::io::Result<()> {
            self.shown.push(String::from(message));
            Ok(())
        }

        fn ask(&mut self, _question: &str) -> std::io::Result<String> {
            self.answers
                .pop_front()
                .ok_or_else(|| std::io::ErrorKind::UnexpectedEof.into())
        }
    }

    #[test]
    fn reprompts_until_valid_card_number() {
        let hand = Hand::from_iter([card!("A", x: 1), card!("B", x: 2), card!("C", x: 3)]);
        let mut seat = Interactive::new(ScriptedPrompter::new(&["two", "0", "4", " 2 "]));
        assert_eq!(seat.select_card(&hand).unwrap(), 1);
        let prompter = seat.into_inner();
        assert!(prompter.shown[0].contains("1. A"));
        assert_eq!(prompter.shown.len(), 4);
        assert!(prompter.answers.is_empty());
    }

    #[test]
    fn reprompts_until_valid_attribute() {
        let card = card!("Carro A", velocidade: 220, peso: 1200);
        let mut seat = Interactive::new(ScriptedPrompter::new(&["altura", "", "PESO"]));
        assert_eq!(seat.choose_attribute(&card).unwrap(), "peso");
        let prompter = seat.into_inner();
        assert_eq!(
            prompter.shown.last().unwrap(),
            "Invalid attribute. Please choose one of: peso, velocidade"
        );
    }

    #[test]
    fn closed_input_is_fatal() {
        let card = card!("Carro A", velocidade: 220);
        let mut seat = Interactive::new(ScriptedPrompter::new(&["nope"]));
        assert!(matches!(
            seat.choose_attribute(&card),
            Err(GameError::Input(err)) if err.kind() == std::io::ErrorKind::UnexpectedEof
        ));
    }
}
