use anyhow::Result;
use vestibule_client::{config, Config};

use crate::ConfigAction;

/// Inspect or create the configuration file.
pub fn run_config(endpoint: Option<String>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(endpoint),
        ConfigAction::Path => show_path(),
        ConfigAction::Example => show_example(),
        ConfigAction::Init => init_config(),
    }
}

/// Show the current effective configuration.
fn show_config(endpoint: Option<String>) -> Result<()> {
    let config = Config::load_with_endpoint(endpoint)?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  endpoint: {}", config.endpoint);
    println!("  timeout_secs: {}", config.timeout_secs);

    println!("\nPriority: CLI args > ENV vars (VESTIBULE_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize the config file with defaults.
fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure vestibule.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
