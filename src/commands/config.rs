use anyhow::Result;
use dday_core::config::DdayConfig;
use dday_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(config: &DdayConfig, store: &EventStore) -> Result<()> {
    let config_path = DdayConfig::config_path()?;

    println!("{} {}", "Config file:".dimmed(), config_path.display());
    println!("{} {}", "Data file:  ".dimmed(), store.path().display());
    println!("{} {}", "Format:     ".dimmed(), store.format());
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
