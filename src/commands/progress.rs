use anyhow::Result;
use dday_core::session::Session;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize, progress_bar};

const BAR_WIDTH: usize = 40;

pub fn run(session: &Session) -> Result<()> {
    let today = session.today();
    let progress = session.year_progress();

    println!("{}", format!("Today is {}", today.format("%A, %B %-d, %Y")).bold());
    println!();
    println!("{}", progress.render());
    println!("{}", progress_bar(progress.percent(), BAR_WIDTH).red());
    println!(
        "{}",
        format!("{}/{} days", progress.days_passed, progress.total_days).dimmed()
    );

    let remaining = match session.closest_dday() {
        Some((event, days)) => format!("{}: {} {} left", event.name, days, pluralize("day", days)),
        None => format!(
            "{} {} left in {}",
            progress.days_remaining,
            pluralize("day", i64::from(progress.days_remaining)),
            progress.year
        ),
    };
    println!("{}", remaining.cyan());

    Ok(())
}
