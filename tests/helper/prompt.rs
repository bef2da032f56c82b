//! Prompt test utilities

use std::collections::VecDeque;

use gemdiff::prompt::keys::ListAction;
use gemdiff::prompt::multi_select::Step;
use gemdiff::prompt::{MultiSelect, Prompt, PromptError};

/// Scripted answer for the next prompt
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Choose(usize),
    Keys(Vec<ListAction>),
    Confirm(bool),
    Escape,
}

/// Prompt answering from a fixed script and recording what was shown
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub questions: Vec<String>,
    pub shown_versions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    fn next(&mut self, message: &str) -> Result<Answer, PromptError> {
        self.questions.push(message.to_string());
        match self.answers.pop_front() {
            Some(Answer::Escape) => Err(PromptError::Cancelled),
            Some(answer) => Ok(answer),
            None => panic!("no scripted answer for {message:?}"),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        match self.next(message)? {
            Answer::Text(text) => Ok(text.to_string()),
            other => panic!("expected text answer for {message:?}, got {other:?}"),
        }
    }

    fn select(&mut self, message: &str, _choices: &[String]) -> Result<usize, PromptError> {
        match self.next(message)? {
            Answer::Choose(index) => Ok(index),
            other => panic!("expected choice for {message:?}, got {other:?}"),
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        mut list: MultiSelect,
    ) -> Result<Vec<usize>, PromptError> {
        self.shown_versions = list.choices().to_vec();
        let Answer::Keys(actions) = self.next(message)? else {
            panic!("expected key script for {message:?}");
        };

        for action in actions {
            match list.handle(action) {
                Step::Pending => {}
                Step::Confirmed(indices) => return Ok(indices),
                Step::Cancelled => return Err(PromptError::Cancelled),
            }
        }
        panic!("key script for {message:?} ended without confirmation");
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected yes/no for {message:?}, got {other:?}"),
        }
    }
}
