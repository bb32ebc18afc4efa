use tbs::Result;

use std::fmt::Display;
use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input closed")]
    Closed,
}

/// Line-oriented question and answer over any reader and writer
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        return Self { input, output };
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> Result {
        writeln!(self.output, "{message}")?;

        return Ok(());
    }

    /// Returns the trimmed answer. Fails with `PromptError::Closed` once input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = vec![];

        if self.input.read_until(b'\n', &mut line)? == 0 {
            Err(PromptError::Closed)?
        }

        // undecodable bytes become U+FFFD and fail validation like any other bad answer
        return Ok(String::from_utf8_lossy(&line).trim().to_string());
    }

    pub fn ask_required(&mut self, question: &str) -> Result<String> {
        loop {
            let answer = self.ask(question)?;

            if !answer.is_empty() {
                return Ok(answer);
            }

            self.say("@@@ A value is required. @@@")?;
        }
    }

    /// Asks again until `parse` accepts the answer
    pub fn ask_parsed<T>(&mut self, question: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            let answer = self.ask(question)?;

            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("Rejected answer {answer:?}: {e}");
                    self.say(format!("@@@ Invalid input: {e} @@@"))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), vec![])
    }

    fn output_of(prompt: Prompt<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn ask_trims_answer() {
        let mut prompt = build_prompt("  111 \n");

        assert_eq!(prompt.ask("Tax id: ").unwrap(), "111");
        assert_eq!(output_of(prompt), "Tax id: ");
    }

    #[test]
    fn ask_accepts_invalid_utf8() {
        let mut prompt = Prompt::new(&[0xff, 0xfe, b'\n', b'7', b'\n'][..], vec![]);

        assert_eq!(prompt.ask("Amount: ").unwrap(), "\u{fffd}\u{fffd}");
        assert_eq!(prompt.ask("Amount: ").unwrap(), "7");
    }

    #[test]
    fn ask_fails_when_input_closed() {
        let mut prompt = build_prompt("");

        let err = prompt.ask("Tax id: ").unwrap_err();
        assert!(err.is::<PromptError>());
    }

    #[test]
    fn ask_required_repeats_on_empty_answer() {
        let mut prompt = build_prompt("\n   \nMaria\n");

        assert_eq!(prompt.ask_required("Name: ").unwrap(), "Maria");
        assert_eq!(output_of(prompt).matches("A value is required").count(), 2);
    }

    #[test]
    fn ask_parsed_repeats_on_invalid_answer() {
        let mut prompt = build_prompt("abc\n12\n");

        let value = prompt
            .ask_parsed("Number: ", |answer| Ok(answer.parse::<u32>()?))
            .unwrap();

        assert_eq!(value, 12);
        assert_eq!(output_of(prompt).matches("Invalid input").count(), 1);
    }
}
