//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use swim_compare::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn unknown_key(key: &str) -> ! {
    eprintln!("✗ Unknown config key: '{key}'");
    eprintln!("  Valid keys: {}", Config::KEYS.join(", "));
    std::process::exit(1);
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => unknown_key(k),
        },
        None => {
            println!("\n=== Configuration ===\n");
            println!("  file: {}\n", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
}

/// Persist `config` or exit with an error
fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if config.get(key).is_none() {
        unknown_key(key);
    }
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if config.unset(key, defaults).is_err() {
        unknown_key(key);
    }
    save_or_exit(config);
    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset swimcompare config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("✗ Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
