//! crossterm implementation of [`Prompt`]

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, queue};

use crate::prompt::keys::{ListAction, TextAction, list_action, text_action};
use crate::prompt::multi_select::{MultiSelect, Step};
use crate::prompt::{Prompt, PromptError};

/// Restores cooked mode when dropped, including on early return
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Prompts rendered inline on stdout
pub struct TerminalPrompt {
    out: Stdout,
    /// Lines drawn by the previous frame of the active prompt
    drawn: u16,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            drawn: 0,
        }
    }

    fn read_key(&self) -> io::Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                _ => {}
            }
        }
    }

    /// Replaces the previous frame with `lines`
    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        if self.drawn > 0 {
            queue!(self.out, cursor::MoveToPreviousLine(self.drawn))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        for line in lines {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()?;
        self.drawn = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        Ok(())
    }

    /// Collapses the prompt into a single answered line
    fn finish(&mut self, message: &str, answer: &str) -> io::Result<()> {
        let line = format!("{} {} {}", "?".green(), message.bold(), answer.cyan());
        self.draw(&[line])?;
        self.drawn = 0;
        Ok(())
    }

    fn question(message: &str, rest: &str) -> String {
        format!("{} {} {}", "?".green(), message.bold(), rest)
    }

    fn read_line(
        &mut self,
        message: &str,
        hint: &str,
        mut accept: impl FnMut(&str) -> bool,
    ) -> Result<String, PromptError> {
        let _raw = RawMode::enable()?;
        let mut input = String::new();

        loop {
            let line = Self::question(message, &format!("{}{}", hint.dark_grey(), input));
            self.draw(&[line])?;

            match text_action(&self.read_key()?) {
                Some(TextAction::Insert(c)) => input.push(c),
                Some(TextAction::Backspace) => {
                    input.pop();
                }
                Some(TextAction::Submit) if accept(&input) => return Ok(input),
                Some(TextAction::Submit) | None => {}
                Some(TextAction::Cancel) => {
                    self.drawn = 0;
                    return Err(PromptError::Cancelled);
                }
            }
        }
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        let answer = self.read_line(message, "", |input| !input.trim().is_empty())?;
        let answer = answer.trim().to_string();
        self.finish(message, &answer)?;
        Ok(answer)
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError> {
        let _raw = RawMode::enable()?;
        let mut cursor = 0usize;

        loop {
            let mut lines = vec![Self::question(
                message,
                &"(Press ↑/↓ or j/k to move and Enter to select)"
                    .dark_grey()
                    .to_string(),
            )];
            lines.extend(choices.iter().enumerate().map(|(i, choice)| {
                if i == cursor {
                    format!("{} {}", "❯".green(), choice.as_str().green())
                } else {
                    format!("  {}", choice)
                }
            }));
            self.draw(&lines)?;

            match list_action(&self.read_key()?) {
                Some(ListAction::Up) => cursor = cursor.saturating_sub(1),
                Some(ListAction::Down) if cursor + 1 < choices.len() => cursor += 1,
                Some(ListAction::Confirm) if cursor < choices.len() => {
                    self.finish(message, &choices[cursor])?;
                    return Ok(cursor);
                }
                Some(ListAction::Cancel) => {
                    self.drawn = 0;
                    return Err(PromptError::Cancelled);
                }
                _ => {}
            }
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        mut list: MultiSelect,
    ) -> Result<Vec<usize>, PromptError> {
        let _raw = RawMode::enable()?;
        let mut show_help = true;

        loop {
            let mut lines = vec![Self::question(
                message,
                &if show_help {
                    "(Press ↑/↓ or j/k to move, Space or l to select and Enter to finish)"
                        .dark_grey()
                        .to_string()
                } else {
                    String::new()
                },
            )];
            for i in list.visible_range() {
                let marker = if list.is_selected(i) {
                    "◉".green().to_string()
                } else {
                    "◯".to_string()
                };
                let pointer = if i == list.cursor() { "❯" } else { " " };
                lines.push(format!("{} {} {}", pointer.green(), marker, list.choices()[i]));
            }
            if list.choices().len() > list.visible_range().len() {
                lines.push("(Move up or down to reveal more choices)".dark_grey().to_string());
            }
            self.draw(&lines)?;

            let Some(action) = list_action(&self.read_key()?) else {
                continue;
            };
            show_help = false;

            match list.handle(action) {
                Step::Pending => {}
                Step::Confirmed(indices) => {
                    let answer = indices
                        .iter()
                        .map(|&i| list.choices()[i].as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.finish(message, &answer)?;
                    return Ok(indices);
                }
                Step::Cancelled => {
                    self.drawn = 0;
                    return Err(PromptError::Cancelled);
                }
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "(Y/n) " } else { "(y/N) " };
        let answer = self.read_line(message, hint, |input| {
            matches!(
                input.trim().to_ascii_lowercase().as_str(),
                "" | "y" | "yes" | "n" | "no"
            )
        })?;

        let yes = match answer.trim().to_ascii_lowercase().as_str() {
            "" => default,
            value => value.starts_with('y'),
        };
        self.finish(message, if yes { "Yes" } else { "No" })?;
        Ok(yes)
    }
}

/// Renders `text` as an OSC 8 hyperlink to `url` when stdout is a terminal,
/// plain `text` otherwise
pub fn link_to(text: &str, url: &str) -> String {
    render_link(text, url, io::stdout().is_terminal())
}

fn render_link(text: &str, url: &str, hyperlinks: bool) -> String {
    if hyperlinks {
        format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
    } else {
        text.to_string()
    }
}
