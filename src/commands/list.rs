use anyhow::Result;
use dday_core::collection::DisplayMode;
use dday_core::session::Session;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(session: &Session) -> Result<()> {
    let rows = session.rows();

    if rows.is_empty() {
        let notice = match session.mode() {
            DisplayMode::Current => "No upcoming events. Add one with: dday add <name> <date>",
            DisplayMode::Past => "No past events",
        };
        println!("{}", notice.dimmed());
        return Ok(());
    }

    for row in &rows {
        println!("{}", row.render());
    }

    Ok(())
}
