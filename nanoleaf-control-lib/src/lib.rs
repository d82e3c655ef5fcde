//! # Nanoleaf Control Library
//!
//! `nanoleaf-control-lib` is a Rust library for controlling Nanoleaf light panels
//! through the HTTP/JSON API the controllers expose on the local network. It maps
//! each endpoint to a method call on a [`control_interface::Nanoleaf`] client, and
//! adds a [`digital_twin::DigitalTwin`] for painting individual panels.
//!
//! ## Features
//!
//! - Pairing (`authorize`) and token revocation (`deauthorize`)
//! - Device info, power, brightness, hue, saturation, colour temperature
//! - Effects: list, select, write custom and static scenes
//! - Panel layout, global orientation and the rhythm module
//! - Per-panel static colour scenes through the digital twin
//!
//! ## Example
//!
//! ```no_run
//! use nanoleaf_control_lib::control_interface::Nanoleaf;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = reqwest::Client::new();
//!     let mut nanoleaf = Nanoleaf::new(session, "192.168.1.50").with_auth_token("my-token");
//!
//!     let info = nanoleaf.get_info().await?;
//!     println!("{} is {}", info.name, if info.is_on { "on" } else { "off" });
//!
//!     nanoleaf.set_brightness(40, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Disclaimer
//!
//! This project is not affiliated with, authorized by, endorsed by, or in any way officially connected
//! with Nanoleaf or its affiliates.
//!
//! ## License
//!
//! This project is dual-licensed under the MIT License and the Apache License, Version 2.0.
//! You may choose to use either license, depending on your project needs.

// The `control_interface` module holds the device client: one method per
// endpoint, typed response models and the cached device state.
pub mod control_interface;

// The `digital_twin` module keeps a panel id -> colour map and writes it to
// the device as a static scene.
pub mod digital_twin;

// The `led` module contains the colour type shared by the client and the twin.
pub mod led;

// The `util` module provides the error type and the status code table.
pub mod util;
