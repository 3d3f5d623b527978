use crate::round::{Round, RoundGenerator};
use crate::session::{Phase, CORRECT, INCORRECT};
use crate::validator::{AnswerValidator, Verdict};
use log::*;
use rand::Rng;
use std::io::{self, BufRead, Write};

pub const ANSWER_PROMPT: &str = "Jouw antwoord: ";
pub const AGAIN_PROMPT: &str = "Wil je nog een keer spelen? (j/n): ";
pub const AGAIN_INVALID: &str = "Antwoord met 'j' of 'n'.";
pub const GOODBYE: &str = "Bedankt voor het spelen!";

/// The blocking terminal game
///
/// Reads lines from `input` and writes everything to `output`, so a game can
/// be driven by any reader and writer.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Write `text` and read one line, `None` once the input is closed
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn ask_api_key(&mut self) -> io::Result<Option<String>> {
        writeln!(self.output, "Warning: OPENROUTER_API_KEY not found in environment.")?;
        let key = self.prompt("Enter your OpenRouter API key: ")?;

        Ok(key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()))
    }

    /// Ask for answers until one is accepted
    ///
    /// Returns [`Phase::Correct`] on success and [`Phase::Idle`] when the
    /// input ends first. The round stays the same between attempts.
    pub fn play_round(&mut self, round: &Round, validator: &AnswerValidator) -> io::Result<Phase> {
        writeln!(self.output, "\nVraag: {}", round.question())?;

        loop {
            let answer = match self.prompt(ANSWER_PROMPT)? {
                Some(answer) => answer,
                None => return Ok(Phase::Idle),
            };

            match validator.judge_round(&answer, round) {
                Verdict::Accepted => {
                    writeln!(self.output, "{}", CORRECT)?;
                    return Ok(Phase::Correct);
                }
                Verdict::Rejected => writeln!(self.output, "{}", INCORRECT)?,
                Verdict::Unavailable(e) => {
                    writeln!(self.output, "Fout bij het controleren van het antwoord: {}", e)?;
                    writeln!(self.output, "{}", INCORRECT)?;
                }
            }
        }
    }

    /// `true` for another round, `false` to stop
    pub fn play_again(&mut self) -> io::Result<bool> {
        loop {
            let again = match self.prompt(AGAIN_PROMPT)? {
                Some(again) => again.trim().to_lowercase(),
                None => return Ok(false),
            };

            if again.starts_with('j') {
                return Ok(true);
            }
            if again.starts_with('n') {
                writeln!(self.output, "{}", GOODBYE)?;
                return Ok(false);
            }

            writeln!(self.output, "{}", AGAIN_INVALID)?;
        }
    }

    /// The game main loop
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        generator: &RoundGenerator,
        rng: &mut R,
        validator: &AnswerValidator,
    ) -> io::Result<()> {
        loop {
            let round = generator.new_round(rng);
            info!("New round: {}", round.question());

            if self.play_round(&round, validator)? == Phase::Idle {
                return Ok(());
            }

            if !self.play_again()? {
                return Ok(());
            }
        }
    }
}
