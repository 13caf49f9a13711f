//! Interactive prompts that fall back to flags and defaults.

use std::fmt::Display;
use std::io::IsTerminal;

use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use eyre::{Context, Result};

/// Asks for values unless they were given as flags or prompting is off.
pub struct Prompter {
    interactive: bool,
    theme: ColorfulTheme,
}

impl Prompter {
    /// Prompting is off with `--yes` or when stdin is not a terminal.
    pub fn new(assume_yes: bool) -> Self {
        Self {
            interactive: !assume_yes && std::io::stdin().is_terminal(),
            theme: ColorfulTheme::default(),
        }
    }

    /// A free-text value.
    pub fn input(&self, prompt: &str, flag: Option<&str>, default: &str) -> Result<String> {
        if let Some(value) = flag {
            return Ok(value.to_string());
        }
        if !self.interactive {
            return Ok(default.to_string());
        }
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .wrap_err("Failed to read input")
    }

    /// A hidden value that may be left empty.
    pub fn secret(&self, prompt: &str, flag: Option<&str>) -> Result<String> {
        if let Some(value) = flag {
            return Ok(value.to_string());
        }
        if !self.interactive {
            return Ok(String::new());
        }
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .wrap_err("Failed to read input")
    }

    /// One of `items`.
    pub fn select<T>(&self, prompt: &str, flag: Option<T>, items: &[T], default: T) -> Result<T>
    where
        T: Copy + PartialEq + Display,
    {
        if let Some(value) = flag {
            return Ok(value);
        }
        if !self.interactive {
            return Ok(default);
        }
        let position = items.iter().position(|item| *item == default).unwrap_or(0);
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(position)
            .interact()
            .wrap_err("Failed to get selection")?;
        Ok(items[selection])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_win() {
        let prompter = Prompter::new(true);
        assert_eq!(prompter.input("x", Some("flag"), "default").unwrap(), "flag");
        assert_eq!(prompter.secret("x", Some("s")).unwrap(), "s");
        assert_eq!(prompter.select("x", Some(2), &[1, 2, 3], 1).unwrap(), 2);
    }

    #[test]
    fn test_defaults_without_prompting() {
        let prompter = Prompter::new(true);
        assert_eq!(prompter.input("x", None, "default").unwrap(), "default");
        assert_eq!(prompter.secret("x", None).unwrap(), "");
        assert_eq!(prompter.select("x", None, &[1, 2, 3], 3).unwrap(), 3);
    }
}
