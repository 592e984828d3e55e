use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::models::Workspace;
use crate::domain::period::PeriodSelector;

/// Source of the three values a run needs from the user.
pub trait InputProvider {
    fn token(&mut self) -> Result<String, String>;
    fn select_workspace(&mut self, workspaces: &[Workspace]) -> Result<Workspace, String>;
    fn select_period(&mut self) -> Result<PeriodSelector, String>;
}

pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
    // Read the token through rpassword instead of `reader`
    hidden_token: bool,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout(),
            hidden_token: true,
        }
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            hidden_token: false,
        }
    }

    fn read_line(&mut self) -> Result<String, String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| format!("Cannot read input: {e}"))?;
        if read == 0 {
            return Err("Input closed before an answer was given".to_string());
        }
        Ok(line.trim().to_string())
    }

    /// Numbered menu. Accepts the number or the exact label.
    fn choose(&mut self, message: &str, choices: &[String]) -> Result<usize, String> {
        if choices.is_empty() {
            return Err(format!("{message} (no choices available)"));
        }

        loop {
            self.print(&format!("{message}\n"))?;
            for (index, choice) in choices.iter().enumerate() {
                self.print(&format!("  {}) {}\n", index + 1, choice))?;
            }
            self.print("> ")?;

            let answer = self.read_line()?;
            if let Ok(number) = answer.parse::<usize>() {
                if (1..=choices.len()).contains(&number) {
                    return Ok(number - 1);
                }
            }
            if let Some(index) = choices
                .iter()
                .position(|choice| choice.eq_ignore_ascii_case(&answer))
            {
                return Ok(index);
            }
            self.print(&format!("Invalid choice: {answer}\n"))?;
        }
    }

    fn print(&mut self, text: &str) -> Result<(), String> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| format!("Cannot write prompt: {e}"))
    }
}

impl<R: BufRead, W: Write> InputProvider for TerminalPrompt<R, W> {
    fn token(&mut self) -> Result<String, String> {
        const MESSAGE: &str = "Enter your Toggl API Token: ";
        let token = if self.hidden_token {
            rpassword::prompt_password(MESSAGE).map_err(|e| format!("Cannot read token: {e}"))?
        } else {
            self.print(MESSAGE)?;
            self.read_line()?
        };

        let token = token.trim().to_string();
        if token.is_empty() {
            return Err("The API token cannot be empty.".to_string());
        }
        Ok(token)
    }

    fn select_workspace(&mut self, workspaces: &[Workspace]) -> Result<Workspace, String> {
        let labels: Vec<String> = workspaces.iter().map(Workspace::label).collect();
        let index = self.choose("Select the Workspace:", &labels)?;
        Ok(workspaces[index].clone())
    }

    fn select_period(&mut self) -> Result<PeriodSelector, String> {
        let labels: Vec<String> = PeriodSelector::CHOICES
            .iter()
            .map(|period| period.label().to_string())
            .collect();
        let index = self.choose("Select the period of the report", &labels)?;
        Ok(PeriodSelector::CHOICES[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> TerminalPrompt<&[u8], Vec<u8>> {
        TerminalPrompt::new(input.as_bytes(), Vec::new())
    }

    fn workspaces() -> Vec<Workspace> {
        vec![
            Workspace {
                id: 1,
                name: "Acme".to_string(),
            },
            Workspace {
                id: 2,
                name: "Side".to_string(),
            },
        ]
    }

    #[test]
    fn selects_period_by_number() {
        let mut input = prompt("2\n");
        assert_eq!(input.select_period(), Ok(PeriodSelector::ThisWeek));
        let shown = String::from_utf8(input.writer).expect("prompt output is utf8");
        assert!(shown.contains("1) Last week"));
        assert!(shown.contains("2) This week"));
    }

    #[test]
    fn reprompts_on_invalid_choice() {
        let mut input = prompt("9\nside (2)\n");
        let selected = input
            .select_workspace(&workspaces())
            .expect("second answer should be accepted");
        assert_eq!(selected.id, 2);
        let shown = String::from_utf8(input.writer).expect("prompt output is utf8");
        assert!(shown.contains("Invalid choice: 9"));
    }

    #[test]
    fn closed_input_is_an_error() {
        assert!(prompt("").select_period().is_err());
        assert!(prompt("").select_workspace(&[]).is_err());
    }

    #[test]
    fn reads_visible_token_in_tests() {
        assert_eq!(prompt("  secret \n").token(), Ok("secret".to_string()));
        assert!(prompt("\n").token().is_err());
    }
}
