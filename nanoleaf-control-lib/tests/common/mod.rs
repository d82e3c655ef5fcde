#![allow(dead_code)]

use mockito::ServerGuard;
use nanoleaf_control_lib::control_interface::Nanoleaf;

pub const TOKEN: &str = "TESTTOKEN";

pub const INFO_FIXTURE: &str = r#"{
    "name": "Light Panels 52:09:5E",
    "serialNo": "S19124C8035",
    "manufacturer": "Nanoleaf",
    "firmwareVersion": "5.1.0",
    "hardwareVersion": "1.6-2",
    "model": "NL22",
    "cloudHash": {},
    "discovery": {},
    "effects": {
        "effectsList": ["Color Burst", "Flames", "Forest", "Nemo"],
        "select": "Flames"
    },
    "firmwareUpgrade": {},
    "panelLayout": {
        "globalOrientation": {"value": 15, "max": 360, "min": 0},
        "layout": {
            "numPanels": 2,
            "sideLength": 150,
            "positionData": [
                {"panelId": 107, "x": 74, "y": 43, "o": 180, "shapeType": 0},
                {"panelId": 214, "x": 149, "y": 86, "o": 0, "shapeType": 0}
            ]
        }
    },
    "rhythm": {"rhythmConnected": false},
    "schedules": {},
    "state": {
        "brightness": {"value": 63, "max": 100, "min": 0},
        "colorMode": "effect",
        "ct": {"value": 4000, "max": 6500, "min": 1200},
        "hue": {"value": 150, "max": 360, "min": 0},
        "on": {"value": true},
        "sat": {"value": 30, "max": 100, "min": 0}
    }
}"#;

pub const FOUR_PANEL_LAYOUT: &str = r#"{
    "numPanels": 4,
    "sideLength": 100,
    "positionData": [
        {"panelId": 40, "x": 200, "y": 0, "o": 0, "shapeType": 2},
        {"panelId": 10, "x": 0, "y": 0, "o": 0, "shapeType": 2},
        {"panelId": 30, "x": 100, "y": 100, "o": 0, "shapeType": 2},
        {"panelId": 20, "x": 100, "y": 0, "o": 0, "shapeType": 2}
    ]
}"#;

pub fn path(suffix: &str) -> String {
    format!("/api/v1/{}/{}", TOKEN, suffix)
}

/// A client pointed at the mock server, already holding a token.
pub fn nanoleaf(server: &ServerGuard) -> Nanoleaf {
    unauthorized_nanoleaf(server).with_auth_token(TOKEN)
}

pub fn unauthorized_nanoleaf(server: &ServerGuard) -> Nanoleaf {
    let address = server.socket_address();
    Nanoleaf::new(reqwest::Client::new(), address.ip().to_string()).with_port(address.port())
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
