/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When CliConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};
use std::path::PathBuf;

use lipaykripto_cli::CliConfig;
use lipaykripto_sdk::DEFAULT_BASE_URL;

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to LiPayKripto CLI Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a client configuration.").dim()
    );

    let theme = ColorfulTheme::default();

    let client_id: String = Input::with_theme(&theme)
        .with_prompt("Client ID")
        .interact_text()?;

    let store_secret = Confirm::with_theme(&theme)
        .with_prompt("Store the client secret in the file? (otherwise set LIPAYKRIPTO_CLIENT_SECRET)")
        .default(false)
        .interact()?;

    // An empty secret is left out of the file.
    let client_secret = if store_secret {
        Password::with_theme(&theme)
            .with_prompt("Client Secret")
            .interact()?
    } else {
        String::new()
    };

    println!("\n{}", style("--- Connection ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL")
        .default(DEFAULT_BASE_URL.to_string())
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(30)
        .interact_text()?;

    let config = CliConfig {
        client_id,
        client_secret,
        base_url,
        timeout_secs,
        connect_timeout_secs: 10,
    };

    let yaml = config.to_yaml().context("failed to serialize config to YAML")?;

    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );
    if config.client_secret.is_empty() {
        println!(
            "{}",
            style("Export LIPAYKRIPTO_CLIENT_SECRET before running payment or withdraw.").yellow()
        );
    }

    Ok(())
}
