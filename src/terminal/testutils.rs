use anyhow::{anyhow, bail, Result};
use std::collections::VecDeque;

use super::Operator;

/// Operator that replays canned answers and records everything it was shown.
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    answers: VecDeque<String>,
    pub shown: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedOperator {
    pub fn new<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            answers: answers.into_iter().map(str::to_string).collect(),
            shown: vec![],
            prompts: vec![],
        }
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer left for prompt {:?}", prompt))
    }
}

impl Operator for ScriptedOperator {
    fn show(&mut self, line: &str) {
        self.shown.push(line.to_string());
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn prompt_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        match self.next_answer(prompt)?.as_str() {
            "" => Ok(default),
            "y" => Ok(true),
            "n" => Ok(false),
            other => bail!("Scripted yes/no answer must be 'y', 'n' or '', got {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_answers_in_order() {
        let mut operator = ScriptedOperator::new(["first", "y", "", "n"]);
        assert_eq!("first", operator.prompt("a").unwrap());
        assert!(operator.prompt_yes_no("b", false).unwrap());
        assert!(operator.prompt_yes_no("c", true).unwrap());
        assert!(!operator.prompt_yes_no("d", true).unwrap());
        assert_eq!(vec!["a", "b", "c", "d"], operator.prompts);
        assert_eq!(0, operator.remaining_answers());
    }

    #[test]
    fn fails_when_out_of_answers() {
        let mut operator = ScriptedOperator::new([]);
        assert_eq!(
            "No scripted answer left for prompt \"a\"",
            operator.prompt("a").unwrap_err().to_string()
        );
    }

    #[test]
    fn records_shown_lines() {
        let mut operator = ScriptedOperator::default();
        operator.show("hello");
        operator.show("world");
        assert_eq!(vec!["hello", "world"], operator.shown);
    }
}
