use serde::Deserialize;

use crate::control_interface::layout::{Panel, PanelLayout};

/// A value the device reports together with its accepted range.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RangedValue {
    pub value: u16,
    pub min: u16,
    pub max: u16,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OnValue {
    pub value: bool,
}

/// The `state` object of the info response.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StateResponse {
    pub on: OnValue,
    pub brightness: RangedValue,
    pub hue: RangedValue,
    pub sat: RangedValue,
    pub ct: RangedValue,
    /// One of `hs`, `ct` or `effect`.
    pub color_mode: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsResponse {
    pub effects_list: Vec<String>,
    /// Name of the active effect. The device uses `*Solid*`, `*Static*` and
    /// `*Dynamic*` for colours and scenes that are not saved effects.
    pub select: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelLayoutResponse {
    pub global_orientation: RangedValue,
    pub layout: PanelLayout,
}

/// Full body of `GET /api/v1/<token>/`.
///
/// Keys the client does not use (`cloudHash`, `schedules`, `discovery`, ...)
/// are ignored, and missing keys fall back to their defaults.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoResponse {
    pub name: String,
    pub serial_no: String,
    pub manufacturer: String,
    pub firmware_version: String,
    pub hardware_version: String,
    pub model: String,
    pub effects: EffectsResponse,
    pub panel_layout: PanelLayoutResponse,
    pub state: StateResponse,
}

/// The state cached on a [`crate::control_interface::Nanoleaf`] client.
///
/// Overwritten by every successful `get_info()`, and updated field by field
/// by the state mutators with the value that was requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfo {
    pub name: String,
    pub serial_no: String,
    pub manufacturer: String,
    pub firmware_version: String,
    pub hardware_version: String,
    pub model: String,
    pub is_on: bool,
    pub brightness: RangedValue,
    pub hue: RangedValue,
    pub saturation: RangedValue,
    pub color_temperature: RangedValue,
    pub color_mode: String,
    pub effect: Option<String>,
    pub effects_list: Vec<String>,
    pub global_orientation: RangedValue,
    pub panels: Vec<Panel>,
}

impl From<InfoResponse> for DeviceInfo {
    fn from(info: InfoResponse) -> Self {
        DeviceInfo {
            name: info.name,
            serial_no: info.serial_no,
            manufacturer: info.manufacturer,
            firmware_version: info.firmware_version,
            hardware_version: info.hardware_version,
            model: info.model,
            is_on: info.state.on.value,
            brightness: info.state.brightness,
            hue: info.state.hue,
            saturation: info.state.sat,
            color_temperature: info.state.ct,
            color_mode: info.state.color_mode,
            effect: info.effects.select,
            effects_list: info.effects.effects_list,
            global_orientation: info.panel_layout.global_orientation,
            panels: info.panel_layout.layout.position_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_interface::layout::ShapeType;

    const INFO: &str = r#"{
        "name": "Shapes AC09",
        "serialNo": "S19124C8036",
        "manufacturer": "Nanoleaf",
        "firmwareVersion": "9.2.4",
        "hardwareVersion": "1.6-2",
        "model": "NL42",
        "cloudHash": {},
        "effects": {"effectsList": ["Forest", "Nemo"], "select": "Nemo"},
        "panelLayout": {
            "globalOrientation": {"value": 120, "max": 360, "min": 0},
            "layout": {
                "numPanels": 1,
                "sideLength": 134,
                "positionData": [{"panelId": 9281, "x": 0, "y": 0, "o": 60, "shapeType": 7}]
            }
        },
        "state": {
            "brightness": {"value": 44, "max": 100, "min": 0},
            "colorMode": "effect",
            "ct": {"value": 3400, "max": 6500, "min": 1200},
            "hue": {"value": 20, "max": 360, "min": 0},
            "on": {"value": true},
            "sat": {"value": 60, "max": 100, "min": 0}
        }
    }"#;

    #[test]
    fn test_info_flattens_into_device_info() {
        let info: InfoResponse = serde_json::from_str(INFO).unwrap();
        let device = DeviceInfo::from(info);
        assert_eq!(device.name, "Shapes AC09");
        assert_eq!(device.model, "NL42");
        assert!(device.is_on);
        assert_eq!(device.brightness.value, 44);
        assert_eq!(device.color_temperature.min, 1200);
        assert_eq!(device.effect.as_deref(), Some("Nemo"));
        assert_eq!(device.global_orientation.value, 120);
        assert_eq!(device.panels.len(), 1);
        assert_eq!(device.panels[0].shape_type, ShapeType::Hexagon);
    }

    #[test]
    fn test_missing_keys_default() {
        let info: InfoResponse = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        let device = DeviceInfo::from(info);
        assert_eq!(device.name, "Bare");
        assert!(!device.is_on);
        assert!(device.effect.is_none());
        assert!(device.panels.is_empty());
    }
}
