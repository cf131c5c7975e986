use std::fmt::Display;

use anyhow::Result;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

/// Prompt for non-empty text, optionally prefilled.
pub fn prompt_text(prompt: &str, default: Option<String>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).validate_with(|s: &String| {
        if s.trim().is_empty() {
            Err("Can't be empty")
        } else {
            Ok(())
        }
    });

    if let Some(default) = default {
        input = input.default(default);
    }

    Ok(input.interact_text()?)
}

/// Prompt the user with retry on parse errors.
pub fn prompt_with_retry<T, E, F>(prompt: &str, default: Option<String>, parse: F) -> Result<T>
where
    E: Display,
    F: Fn(&str) -> Result<T, E>,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = &default {
            input = input.default(default.clone());
        }

        let value = input.interact_text()?;
        match parse(value.trim()) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
