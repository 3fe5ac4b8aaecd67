//! Blocking prompt abstraction used by every screen.
//!
//! # Responsibility
//! - Give screens a synchronous "answer or cancel" contract.
//! - Keep terminal widgets out of screen logic so screens stay testable.
//!
//! # Invariants
//! - `None` always means the user cancelled; screens never mutate state on
//!   a cancelled prompt.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PromptResult<T> = Result<T, PromptError>;

/// Terminal interaction failure.
#[derive(Debug)]
pub struct PromptError(dialoguer::Error);

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "terminal prompt failed: {}", self.0)
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(value: dialoguer::Error) -> Self {
        Self(value)
    }
}

/// Modal interaction primitives.
pub trait Prompt {
    /// Free-text entry pre-filled with `initial`.
    fn input(&mut self, label: &str, initial: &str) -> PromptResult<Option<String>>;

    /// Pick one of `choices` or type any other value.
    fn choose_or_type(
        &mut self,
        label: &str,
        choices: &[String],
        initial: &str,
    ) -> PromptResult<Option<String>>;

    /// Yes/no question; anything but an explicit yes is `false`.
    fn confirm(&mut self, question: &str) -> PromptResult<bool>;

    /// Pick one entry of a non-empty list by position.
    fn select(&mut self, title: &str, items: &[String]) -> PromptResult<Option<usize>>;

    fn message(&mut self, text: &str);
}

const TYPE_OTHER: &str = "(type another value)";

/// `Prompt` over the interactive terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn input(&mut self, label: &str, initial: &str) -> PromptResult<Option<String>> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn choose_or_type(
        &mut self,
        label: &str,
        choices: &[String],
        initial: &str,
    ) -> PromptResult<Option<String>> {
        let mut items: Vec<&str> = choices.iter().map(String::as_str).collect();
        items.push(TYPE_OTHER);
        let default = choices
            .iter()
            .position(|choice| choice == initial)
            .unwrap_or(choices.len());

        let picked = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(&items)
            .default(default)
            .interact_opt()?;
        match picked {
            None => Ok(None),
            Some(index) if index < choices.len() => Ok(Some(choices[index].clone())),
            Some(_) => self.input(label, initial),
        }
    }

    fn confirm(&mut self, question: &str) -> PromptResult<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(false)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }

    fn select(&mut self, title: &str, items: &[String]) -> PromptResult<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt()?)
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}
