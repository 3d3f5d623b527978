use crate::chat::{ChatClient, ChatError};
use crate::round::Round;
use log::*;

/// Shown instead of a hint when the service cannot be reached
pub const HINT_UNAVAILABLE: &str = "Sorry, kon geen hint ophalen.";

pub fn validation_prompt(word: &str, category: &str, letter: &str) -> String {
    format!(
        "Klopt het woord '{}' met de gegeven letter en categorie? {} dat begint met de letter {}. Beantwoord met ja of nee",
        word, category, letter
    )
}

pub fn hint_prompt(round: &Round) -> String {
    format!(
        "Geef een hint voor {} dat begint met de letter {}. Maak het niet te makkelijk, geef geen direct antwoord.",
        round.category(),
        round.letter()
    )
}

/// Only a reply starting with "ja" accepts, anything else rejects
pub fn parse_verdict(reply: &str) -> bool {
    reply.trim().to_lowercase().starts_with("ja")
}

/// Outcome of one validation attempt
#[derive(Debug)]
pub enum Verdict {
    Accepted,
    Rejected,
    /// The service failed, which counts as a rejection
    Unavailable(ChatError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Asks the language model whether a word fits a round
pub struct AnswerValidator {
    client: Box<dyn ChatClient>,
}

impl AnswerValidator {
    pub fn new(client: Box<dyn ChatClient>) -> Self {
        AnswerValidator { client }
    }

    /// Ask the service, keeping a service failure apart from a rejection
    pub fn check(&self, word: &str, category: &str, letter: &str) -> Result<bool, ChatError> {
        let reply = self
            .client
            .complete(&validation_prompt(word, category, letter))?;
        let verdict = parse_verdict(&reply);

        info!(
            "'{}' for \"{} dat begint met de letter {}\": {}",
            word,
            category,
            letter,
            if verdict { "accepted" } else { "rejected" }
        );

        Ok(verdict)
    }

    /// Never fails, a service error is logged and becomes [`Verdict::Unavailable`]
    pub fn judge(&self, word: &str, category: &str, letter: &str) -> Verdict {
        match self.check(word, category, letter) {
            Ok(true) => Verdict::Accepted,
            Ok(false) => Verdict::Rejected,
            Err(e) => {
                error!("Error checking answer: {}", e);
                Verdict::Unavailable(e)
            }
        }
    }

    pub fn judge_round(&self, word: &str, round: &Round) -> Verdict {
        self.judge(word, round.category(), &round.letter().to_string())
    }

    /// Fail-closed verdict, an unreachable service counts as a rejection
    pub fn validate(&self, word: &str, category: &str, letter: &str) -> bool {
        self.judge(word, category, letter).is_accepted()
    }

    pub fn hint(&self, round: &Round) -> String {
        match self.client.complete(&hint_prompt(round)) {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                warn!("Error getting hint: {}", e);
                HINT_UNAVAILABLE.to_string()
            }
        }
    }
}
