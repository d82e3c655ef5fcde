//! Per-panel static colour control.
//!
//! A [`DigitalTwin`] mirrors the panels of one device and the colour assigned
//! to each of them. Colours are edited locally and only reach the device on
//! [`DigitalTwin::sync`], which replaces the active effect with a static scene
//! in a single request.
//!
//! ```no_run
//! use nanoleaf_control_lib::control_interface::Nanoleaf;
//! use nanoleaf_control_lib::digital_twin::DigitalTwin;
//! use nanoleaf_control_lib::led::rgb::RGB;
//! use std::time::Duration;
//!
//! # async fn run() -> nanoleaf_control_lib::util::error::Result<()> {
//! let nanoleaf = Nanoleaf::new(reqwest::Client::new(), "192.168.1.50").with_auth_token("token");
//! let mut twin = DigitalTwin::create(nanoleaf).await?;
//! twin.set_all_colors(RGB::new(0, 0, 40));
//! let first = twin.ids()[0];
//! twin.set_hex(first, "#FF9900")?;
//! twin.sync(Duration::from_millis(500)).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use log::{debug, warn};
use tokio::time::sleep;

use crate::control_interface::effects::{EffectCommand, EffectWrite};
use crate::control_interface::layout::Panel;
use crate::control_interface::Nanoleaf;
use crate::led::rgb::RGB;
use crate::util::error::{NanoleafError, Result};

pub mod anim;

use anim::{encode_static, transition_units, StaticFrame};

/// How a twin is pushed to the device.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOptions {
    pub transition: Duration,
    /// `Display` or `DisplayTemp`; `Add` is rejected.
    pub command: EffectCommand,
    /// Restrict the scene to these panels. Unknown ids are an error.
    pub only: Option<Vec<u32>>,
    /// Percentage applied on top of every colour, 0..=100.
    pub brightness: Option<u8>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions {
            transition: Duration::from_secs(1),
            command: EffectCommand::Display,
            only: None,
            brightness: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigitalTwin {
    client: Nanoleaf,
    // x, then y, then id
    ids: Vec<u32>,
    colors: HashMap<u32, RGB>,
}

impl DigitalTwin {
    /// Fetches the panel layout and builds a twin with every panel black.
    ///
    /// Falls back to the panels cached by an earlier `get_info()` when the
    /// layout endpoint reports none.
    pub async fn create(client: Nanoleaf) -> Result<Self> {
        let layout = client.panel_layout().await?;
        let panels = if layout.position_data.is_empty() {
            client.info().panels.clone()
        } else {
            layout.position_data
        };
        Self::from_panels(client, panels)
    }

    /// Builds a twin from an already known set of panels.
    pub fn from_panels(client: Nanoleaf, mut panels: Vec<Panel>) -> Result<Self> {
        if panels.is_empty() {
            return Err(NanoleafError::NoPanelLayout);
        }
        panels.sort_by_key(|panel| (panel.x, panel.y, panel.panel_id));
        let mut seen = HashSet::new();
        let ids: Vec<u32> = panels
            .iter()
            .map(|panel| panel.panel_id)
            .filter(|id| seen.insert(*id))
            .collect();
        let colors = ids.iter().map(|id| (*id, RGB::BLACK)).collect();
        debug!("Twin of {} tracks {} panels", client.host(), ids.len());
        Ok(DigitalTwin {
            client,
            ids,
            colors,
        })
    }

    /// Panel ids ordered by x, then y, then id.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn color(&self, panel_id: u32) -> Result<RGB> {
        self.colors
            .get(&panel_id)
            .copied()
            .ok_or(NanoleafError::UnknownPanel(panel_id))
    }

    pub fn colors(&self) -> &HashMap<u32, RGB> {
        &self.colors
    }

    pub fn client(&self) -> &Nanoleaf {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut Nanoleaf {
        &mut self.client
    }

    pub fn into_client(self) -> Nanoleaf {
        self.client
    }

    pub fn set_color(&mut self, panel_id: u32, rgb: RGB) -> Result<()> {
        match self.colors.get_mut(&panel_id) {
            Some(color) => {
                *color = rgb;
                Ok(())
            }
            None => Err(NanoleafError::UnknownPanel(panel_id)),
        }
    }

    /// Sets a panel from a `#RRGGBB` string.
    pub fn set_hex(&mut self, panel_id: u32, hex_color: &str) -> Result<()> {
        let rgb = hex_color.parse()?;
        self.set_color(panel_id, rgb)
    }

    pub fn set_all_colors(&mut self, rgb: RGB) {
        for color in self.colors.values_mut() {
            *color = rgb;
        }
    }

    /// The write that [`Self::sync_with`] would send for these options.
    pub fn effect_write(&self, options: &SyncOptions) -> Result<EffectWrite> {
        if options.command == EffectCommand::Add {
            return Err(NanoleafError::InvalidValue(
                "a twin can only be synced with display or displayTemp".to_string(),
            ));
        }
        let ids: Vec<u32> = match &options.only {
            None => self.ids.clone(),
            Some(only) => {
                if let Some(unknown) = only.iter().find(|id| !self.colors.contains_key(*id)) {
                    return Err(NanoleafError::UnknownPanel(*unknown));
                }
                let only: HashSet<u32> = only.iter().copied().collect();
                self.ids
                    .iter()
                    .copied()
                    .filter(|id| only.contains(id))
                    .collect()
            }
        };
        let transition = transition_units(options.transition);
        let frames = ids
            .into_iter()
            .map(|panel_id| {
                let color = self.color(panel_id)?;
                let color = match options.brightness {
                    Some(brightness) => color.scaled(brightness)?,
                    None => color,
                };
                Ok(StaticFrame {
                    panel_id,
                    color,
                    transition,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(EffectWrite::static_scene(
            options.command,
            encode_static(&frames),
        ))
    }

    /// Pushes every panel's colour as a static scene.
    pub async fn sync(&self, transition: Duration) -> Result<()> {
        self.sync_with(&SyncOptions {
            transition,
            ..SyncOptions::default()
        })
        .await
    }

    /// Pushes the twin with explicit options. On failure local colours are
    /// untouched but the device state is unknown.
    pub async fn sync_with(&self, options: &SyncOptions) -> Result<()> {
        let write = self.effect_write(options)?;
        self.client.write_effect(&write).await
    }

    /// Blinks the twin: shows it with `displayTemp` for `duration`, then
    /// selects the effect that was active before.
    ///
    /// Reading and restoring the previous effect are best-effort; only a
    /// failed twin write is returned as an error.
    pub async fn apply_temp(&self, options: SyncOptions, duration: Duration) -> Result<()> {
        let previous = match self.client.selected_effect().await {
            Ok(name) => Some(name),
            Err(e) => {
                warn!("Could not read the selected effect, it will not be restored: {}", e);
                None
            }
        };
        let options = SyncOptions {
            command: EffectCommand::DisplayTemp,
            ..options
        };
        let result = self.sync_with(&options).await;
        if result.is_ok() {
            sleep(duration).await;
        }
        if let Some(previous) = previous {
            if let Err(e) = self.client.select_effect(&previous).await {
                warn!("Failed to restore effect {:?}: {}", previous, e);
            }
        }
        result
    }
}
