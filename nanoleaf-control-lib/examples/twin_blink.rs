use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use nanoleaf_control_lib::control_interface::Nanoleaf;
use nanoleaf_control_lib::digital_twin::{DigitalTwin, SyncOptions};

/// Blinks the first two panels, then restores the previous effect.
#[derive(Parser)]
#[clap(name = "twin_blink")]
struct Args {
    #[clap(long)]
    host: String,

    #[clap(long)]
    token: String,

    /// How long the blink stays up, in milliseconds
    #[clap(long, default_value_t = 2000)]
    duration: u64,

    /// Brightness overlay (0-100)
    #[clap(long, default_value_t = 70)]
    brightness: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let nanoleaf = Nanoleaf::new(reqwest::Client::new(), args.host).with_auth_token(args.token);
    let mut twin = DigitalTwin::create(nanoleaf).await?;

    let (a, b) = match twin.ids() {
        [a, b, ..] => (*a, *b),
        _ => bail!("Need at least two panels."),
    };
    twin.set_hex(a, "#FF9900")?;
    twin.set_hex(b, "#0099FF")?;

    twin.apply_temp(
        SyncOptions {
            transition: Duration::from_millis(600),
            only: Some(vec![a, b]),
            brightness: Some(args.brightness),
            ..SyncOptions::default()
        },
        Duration::from_millis(args.duration),
    )
    .await?;
    println!("Blinked panels {} and {}, restored previous effect.", a, b);
    Ok(())
}
