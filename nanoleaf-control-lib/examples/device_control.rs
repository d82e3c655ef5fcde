use anyhow::Result;
use clap::{Parser, Subcommand};

use nanoleaf_control_lib::control_interface::Nanoleaf;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    handle_cli(cli).await
}

/// Drives a single Nanoleaf controller from the command line.
#[derive(Parser)]
#[clap(name = "device_control", about = "Controls a Nanoleaf device")]
pub struct Cli {
    /// Host name or IP address of the controller
    #[clap(long)]
    host: String,

    /// Auth token from an earlier `pair`
    #[clap(long)]
    token: Option<String>,

    #[clap(subcommand)]
    action: DeviceAction,
}

#[derive(Subcommand)]
pub enum DeviceAction {
    /// Requests a new token. Hold the power button for 5-7 seconds first.
    Pair,
    /// Revokes the token.
    Unpair,
    /// Prints the device state.
    Info,
    /// Turns the panels on.
    On,
    /// Turns the panels off.
    Off,
    /// Sets the brightness (0-100).
    Brightness {
        value: i32,
        /// Fade time in seconds
        #[clap(long)]
        transition: Option<u64>,
    },
    /// Lists the saved effects.
    Effects,
    /// Selects a saved effect.
    Effect { name: String },
    /// Flashes the panels.
    Identify,
}

async fn handle_cli(cli: Cli) -> Result<()> {
    let mut nanoleaf = Nanoleaf::new(reqwest::Client::new(), cli.host);
    if let Some(token) = cli.token {
        nanoleaf = nanoleaf.with_auth_token(token);
    }

    match cli.action {
        DeviceAction::Pair => {
            let token = nanoleaf.authorize().await?;
            println!("Auth token: {}", token);
        }
        DeviceAction::Unpair => {
            nanoleaf.deauthorize().await?;
            println!("Token revoked.");
        }
        DeviceAction::Info => {
            let info = nanoleaf.get_info().await?;
            println!("The device state:\n{:#?}", info);
        }
        DeviceAction::On => nanoleaf.turn_on().await?,
        DeviceAction::Off => nanoleaf.turn_off().await?,
        DeviceAction::Brightness { value, transition } => {
            nanoleaf
                .set_brightness(value, transition.map(std::time::Duration::from_secs))
                .await?;
            println!("Brightness set to {}", value);
        }
        DeviceAction::Effects => {
            for effect in nanoleaf.effects_list().await? {
                println!("{}", effect);
            }
        }
        DeviceAction::Effect { name } => {
            nanoleaf.get_info().await?;
            nanoleaf.set_effect(&name).await?;
            println!("Selected effect {}", name);
        }
        DeviceAction::Identify => nanoleaf.identify().await?,
    }

    Ok(())
}
