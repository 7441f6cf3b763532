use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// The person answering questions during a run.
pub trait Operator {
    fn show(&mut self, line: &str);

    fn prompt(&mut self, prompt: &str) -> Result<String>;

    fn prompt_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Operator sitting at the terminal, asked via dialoguer prompts.
#[derive(Default)]
pub struct TerminalOperator {
    theme: ColorfulTheme,
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operator for TerminalOperator {
    fn show(&mut self, line: &str) {
        println!("{}", line);
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?)
    }

    fn prompt_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
