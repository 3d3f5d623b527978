use crate::message::*;
use crate::round::{Round, RoundGenerator};
use crate::validator::{AnswerValidator, Verdict};
use log::*;
use rand::Rng;

pub const CORRECT: &str = "Goed zo!";
pub const INCORRECT: &str = "Helaas, dat is niet correct. Probeer het opnieuw.";
pub const EMPTY_ANSWER: &str = "Voer eerst een antwoord in";
pub const SERVICE_ERROR: &str = "Er is een fout opgetreden bij het controleren van het antwoord.";

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Phase {
    /// No round posed yet, or the player left
    Idle,
    AwaitingAnswer,
    Correct,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
}

impl Feedback {
    fn new(correct: bool, message: &str) -> Self {
        Feedback {
            correct,
            message: message.to_string(),
        }
    }

    fn to_message(&self) -> ToPlayerMessage {
        ToPlayerMessage::Feedback {
            correct: self.correct,
            message: self.message.clone(),
        }
    }
}

/// Everything one browser session knows about its game
///
/// The record is handed to [`SessionState::handle`] for every message and a
/// new record is returned. Nothing else holds game state.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SessionState {
    pub phase: Phase,
    pub round: Option<Round>,
    /// Last feedback, stays visible until the next action
    pub feedback: Option<Feedback>,
    pub hint: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            phase: Phase::Idle,
            round: None,
            feedback: None,
            hint: None,
        }
    }

    /// React to a message sent from the player
    ///
    /// Returns the next state and the messages to send back.
    pub fn handle<R: Rng + ?Sized>(
        mut self,
        message: FromPlayerMessage,
        generator: &RoundGenerator,
        rng: &mut R,
        validator: &AnswerValidator,
    ) -> (Self, Vec<ToPlayerMessage>) {
        let mut out = vec![];

        match message {
            // First view, or a reconnecting page asking for the current question
            FromPlayerMessage::Initialize { .. } => {
                if self.phase == Phase::Idle || self.round.is_none() {
                    self.start_round(generator, rng);
                    out.extend(self.round.as_ref().map(pose));
                } else {
                    out.extend(self.round.as_ref().map(pose));
                    out.extend(self.feedback.as_ref().map(Feedback::to_message));
                }
            }

            FromPlayerMessage::Submit { answer } => {
                if self.phase != Phase::AwaitingAnswer {
                    debug!("Ignoring answer outside of a running round");
                    return (self, out);
                }
                let round = match self.round.clone() {
                    Some(round) => round,
                    None => return (self, out),
                };

                let answer = answer.trim();
                let feedback = if answer.is_empty() {
                    Feedback::new(false, EMPTY_ANSWER)
                } else {
                    match validator.judge_round(answer, &round) {
                        Verdict::Accepted => {
                            self.phase = Phase::Correct;
                            Feedback::new(true, CORRECT)
                        }
                        Verdict::Rejected => Feedback::new(false, INCORRECT),
                        Verdict::Unavailable(_) => Feedback::new(false, SERVICE_ERROR),
                    }
                };

                out.push(feedback.to_message());
                self.feedback = Some(feedback);
            }

            FromPlayerMessage::Hint => {
                if self.phase != Phase::AwaitingAnswer {
                    return (self, out);
                }
                let text = match self.round.as_ref().map(|round| validator.hint(round)) {
                    Some(text) => text,
                    None => return (self, out),
                };

                out.push(ToPlayerMessage::Hint { text: text.clone() });
                self.hint = Some(text);
            }

            // Only offered once the round is won or a hint was used
            FromPlayerMessage::NewRound => {
                if self.phase == Phase::Correct
                    || (self.phase == Phase::AwaitingAnswer && self.hint.is_some())
                {
                    self.start_round(generator, rng);
                    out.extend(self.round.as_ref().map(pose));
                }
            }

            FromPlayerMessage::Disconnect => {
                self = SessionState::new();
            }
        }

        (self, out)
    }

    fn start_round<R: Rng + ?Sized>(&mut self, generator: &RoundGenerator, rng: &mut R) {
        let round = generator.new_round(rng);
        info!("New round: {}", round.question());

        self.phase = Phase::AwaitingAnswer;
        self.round = Some(round);
        self.feedback = None;
        self.hint = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

fn pose(round: &Round) -> ToPlayerMessage {
    ToPlayerMessage::PoseQuestion {
        question: round.question().to_string(),
        letter: round.letter(),
        category: round.category().to_string(),
    }
}
