use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::control_interface::info::RangedValue;
use crate::control_interface::Nanoleaf;
use crate::util::error::Result;

/// Shape codes reported in `positionData`.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(from = "u16")]
pub enum ShapeType {
    #[default]
    Triangle,
    Rhythm,
    Square,
    ControlSquarePrimary,
    ControlSquarePassive,
    Hexagon,
    TriangleShapes,
    MiniTriangle,
    ShapesController,
    ElementsHexagon,
    ElementsHexagonCorner,
    LinesConnector,
    LightLines,
    LightLinesSingleZone,
    ControllerCap,
    PowerConnector,
    Other(u16),
}

impl From<u16> for ShapeType {
    fn from(code: u16) -> Self {
        match code {
            0 => ShapeType::Triangle,
            1 => ShapeType::Rhythm,
            2 => ShapeType::Square,
            3 => ShapeType::ControlSquarePrimary,
            4 => ShapeType::ControlSquarePassive,
            7 => ShapeType::Hexagon,
            8 => ShapeType::TriangleShapes,
            9 => ShapeType::MiniTriangle,
            12 => ShapeType::ShapesController,
            14 => ShapeType::ElementsHexagon,
            15 => ShapeType::ElementsHexagonCorner,
            16 => ShapeType::LinesConnector,
            17 => ShapeType::LightLines,
            18 => ShapeType::LightLinesSingleZone,
            19 => ShapeType::ControllerCap,
            20 => ShapeType::PowerConnector,
            other => ShapeType::Other(other),
        }
    }
}

/// A single panel as reported by the layout endpoint.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub panel_id: u32,
    pub x: i32,
    pub y: i32,
    /// Rotation in degrees.
    #[serde(default)]
    pub o: i32,
    #[serde(default)]
    pub shape_type: ShapeType,
}

/// Body of `GET panelLayout/layout`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelLayout {
    pub num_panels: usize,
    pub side_length: u32,
    pub position_data: Vec<Panel>,
}

// Firmware differs on whether the orientation comes back bare or with its range.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OrientationResponse {
    Bare(u16),
    Ranged(RangedValue),
}

impl Nanoleaf {
    /// Fetches the panel layout from the device.
    pub async fn panel_layout(&self) -> Result<PanelLayout> {
        self.get_json("panelLayout/layout").await
    }

    /// The rotation applied to the whole layout, in degrees.
    pub async fn global_orientation(&self) -> Result<u16> {
        let response: OrientationResponse =
            self.get_json("panelLayout/globalOrientation").await?;
        Ok(match response {
            OrientationResponse::Bare(value) => value,
            OrientationResponse::Ranged(ranged) => ranged.value,
        })
    }

    /// Rotates the layout. Angles outside 0..=360 are clamped, as the
    /// vendor apps do.
    pub async fn set_global_orientation(&mut self, angle: i32) -> Result<()> {
        let clamped = angle.clamp(0, 360) as u16;
        if i32::from(clamped) != angle {
            debug!("Clamped orientation {} to {}", angle, clamped);
        }
        self.put_json(
            "panelLayout",
            &json!({ "globalOrientation": { "value": clamped } }),
        )
        .await?;
        self.info.global_orientation.value = clamped;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let layout: PanelLayout = serde_json::from_str(
            r#"{"numPanels": 2, "sideLength": 150, "positionData": [
                {"panelId": 107, "x": 74, "y": 43, "o": 180, "shapeType": 0},
                {"panelId": 0, "x": 0, "y": 0, "o": 0, "shapeType": 12}
            ]}"#,
        )
        .unwrap();
        assert_eq!(layout.num_panels, 2);
        assert_eq!(layout.side_length, 150);
        assert_eq!(layout.position_data[0].panel_id, 107);
        assert_eq!(layout.position_data[0].o, 180);
        assert_eq!(
            layout.position_data[1].shape_type,
            ShapeType::ShapesController
        );
    }

    #[test]
    fn test_unknown_shape_is_kept() {
        let panel: Panel =
            serde_json::from_str(r#"{"panelId": 3, "x": 1, "y": 2, "shapeType": 99}"#).unwrap();
        assert_eq!(panel.shape_type, ShapeType::Other(99));
        assert_eq!(panel.o, 0);
    }

    #[test]
    fn test_orientation_shapes() {
        let bare: OrientationResponse = serde_json::from_str("90").unwrap();
        assert!(matches!(bare, OrientationResponse::Bare(90)));
        let ranged: OrientationResponse =
            serde_json::from_str(r#"{"value": 30, "min": 0, "max": 360}"#).unwrap();
        assert!(matches!(ranged, OrientationResponse::Ranged(r) if r.value == 30));
    }
}
