use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, anyhow};
use inquire::InquireError;

use crate::ui::cli::drivers::PromptDriver;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Number(f64),
    Default,
    Confirm(bool),
    Cancel,
}

#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_f64(&self, title: &str, _help: &str, default: f64) -> Result<f64> {
        match self.next(title)? {
            Answer::Number(x) => Ok(x),
            Answer::Default => Ok(default),
            Answer::Cancel => Err(InquireError::OperationCanceled.into()),
            other => Err(anyhow!("expected a number for '{title}', script has {other:?}")),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Confirm(b) => Ok(b),
            Answer::Default => Ok(default),
            Answer::Cancel => Err(InquireError::OperationCanceled.into()),
            other => Err(anyhow!("expected yes/no for '{title}', script has {other:?}")),
        }
    }
}
