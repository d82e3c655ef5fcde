use serde::Serialize;
use serde_json::json;

use crate::control_interface::Nanoleaf;
use crate::util::error::Result;

/// The `command` of an effect write.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EffectCommand {
    /// Save the effect on the device and select it.
    Add,
    /// Show the effect without saving it.
    Display,
    /// Show the effect until the next state change, then fall back.
    DisplayTemp,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AnimType {
    Static,
    Custom,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub hue: u16,
    pub saturation: u16,
    pub brightness: u16,
}

/// Body of the `write` object sent to `PUT effects`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectWrite {
    pub command: EffectCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub anim_type: AnimType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_type: Option<String>,
    pub anim_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<PaletteColor>>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

impl EffectWrite {
    /// A static scene: one fixed colour per panel, no animation.
    pub fn static_scene(command: EffectCommand, anim_data: String) -> Self {
        EffectWrite {
            command,
            anim_name: None,
            version: Some("1.0".to_string()),
            anim_type: AnimType::Static,
            color_type: None,
            anim_data,
            palette: Some(Vec::new()),
            looping: Some(false),
        }
    }
}

#[derive(Serialize)]
struct WriteRequest<'a> {
    write: &'a EffectWrite,
}

impl Nanoleaf {
    /// Names of every effect saved on the device.
    pub async fn effects_list(&self) -> Result<Vec<String>> {
        self.get_json("effects/effectsList").await
    }

    /// Name of the currently selected effect.
    pub async fn selected_effect(&self) -> Result<String> {
        self.get_json("effects/select").await
    }

    /// Selects a saved effect by name without touching the cached state.
    ///
    /// A name the device does not know comes back as
    /// [`crate::util::error::NanoleafError::InvalidValue`].
    pub async fn select_effect(&self, name: &str) -> Result<()> {
        self.put_json("effects", &json!({ "select": name })).await
    }

    /// Sends an effect write. For static scenes this replaces the active
    /// effect in one request.
    pub async fn write_effect(&self, write: &EffectWrite) -> Result<()> {
        self.put_json("effects", &WriteRequest { write }).await
    }

    /// Uploads (or replaces) a custom effect under `anim_name` and selects it.
    pub async fn write_custom_effect(
        &self,
        anim_name: &str,
        anim_data: &str,
        looping: bool,
        palette: Vec<PaletteColor>,
    ) -> Result<()> {
        let write = EffectWrite {
            command: EffectCommand::Add,
            anim_name: Some(anim_name.to_string()),
            version: None,
            anim_type: AnimType::Custom,
            color_type: Some("HSB".to_string()),
            anim_data: anim_data.to_string(),
            palette: Some(palette),
            looping: Some(looping),
        };
        self.write_effect(&write).await
    }

    /// Shows custom animation data without saving it.
    pub async fn display_temp(&self, anim_data: &str) -> Result<()> {
        let write = EffectWrite {
            command: EffectCommand::DisplayTemp,
            anim_name: None,
            version: None,
            anim_type: AnimType::Custom,
            color_type: Some("HSB".to_string()),
            anim_data: anim_data.to_string(),
            palette: None,
            looping: None,
        };
        self.write_effect(&write).await
    }
}
