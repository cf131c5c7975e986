use anyhow::Result;
use dday_core::date::parse_date;
use dday_core::session::Session;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::{prompt_text, prompt_with_retry};

pub fn run(session: &mut Session, name: Option<String>, date: Option<String>) -> Result<()> {
    let interactive = name.is_none() || date.is_none();

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => prompt_text("  Name", None)?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => d,
        None => prompt_with_retry("  Date (e.g. 2025-12-25)", None, |input| {
            parse_date(input).map(|_| input.to_string())
        })?,
    };

    let id = session.add_event(&name, &date)?;

    if interactive {
        println!();
    }
    if let Some(event) = session.collection().get(id) {
        println!("{} {}", "  Added:".green(), event.render());
    }

    Ok(())
}
