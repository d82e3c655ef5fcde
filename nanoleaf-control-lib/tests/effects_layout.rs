mod common;

use mockito::{Matcher, Server};
use nanoleaf_control_lib::control_interface::effects::{EffectCommand, EffectWrite};
use nanoleaf_control_lib::control_interface::layout::ShapeType;
use nanoleaf_control_lib::control_interface::rhythm::RhythmMode;
use nanoleaf_control_lib::util::error::NanoleafError;
use rstest::rstest;
use serde_json::json;

use common::{nanoleaf, path, FOUR_PANEL_LAYOUT};

#[tokio::test]
async fn test_effects_list_and_selected() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", path("effects/effectsList").as_str())
        .with_status(200)
        .with_body(r#"["A", "B", "C"]"#)
        .create_async()
        .await;
    server
        .mock("GET", path("effects/select").as_str())
        .with_status(200)
        .with_body(r#""B""#)
        .create_async()
        .await;

    let nanoleaf = nanoleaf(&server);
    assert_eq!(nanoleaf.effects_list().await.unwrap(), vec!["A", "B", "C"]);
    assert_eq!(nanoleaf.selected_effect().await.unwrap(), "B");
}

#[tokio::test]
async fn test_write_custom_effect() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", path("effects").as_str())
        .match_body(Matcher::Json(json!({
            "write": {
                "command": "add",
                "animName": "Sunrise",
                "animType": "custom",
                "colorType": "HSB",
                "animData": "1 5 1 255 0 0 0 10",
                "palette": [],
                "loop": true
            }
        })))
        .with_status(204)
        .create_async()
        .await;

    nanoleaf(&server)
        .write_custom_effect("Sunrise", "1 5 1 255 0 0 0 10", true, Vec::new())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_display_temp_and_static_write() {
    let mut server = Server::new_async().await;
    let temp = server
        .mock("PUT", path("effects").as_str())
        .match_body(Matcher::PartialJson(json!({
            "write": { "command": "displayTemp", "animType": "custom", "animData": "0" }
        })))
        .with_status(204)
        .create_async()
        .await;
    let scene = server
        .mock("PUT", path("effects").as_str())
        .match_body(Matcher::PartialJson(json!({
            "write": { "command": "display", "animType": "static", "animData": "0" }
        })))
        .with_status(204)
        .create_async()
        .await;

    let nanoleaf = nanoleaf(&server);
    nanoleaf.display_temp("0").await.unwrap();
    nanoleaf
        .write_effect(&EffectWrite::static_scene(
            EffectCommand::Display,
            "0".to_string(),
        ))
        .await
        .unwrap();
    temp.assert_async().await;
    scene.assert_async().await;
}

#[tokio::test]
async fn test_panel_layout() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", path("panelLayout/layout").as_str())
        .with_status(200)
        .with_body(FOUR_PANEL_LAYOUT)
        .create_async()
        .await;

    let layout = nanoleaf(&server).panel_layout().await.unwrap();
    assert_eq!(layout.num_panels, 4);
    assert_eq!(layout.side_length, 100);
    assert_eq!(layout.position_data.len(), 4);
    assert!(layout
        .position_data
        .iter()
        .all(|p| p.shape_type == ShapeType::Square));
}

#[tokio::test]
async fn test_malformed_layout_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", path("panelLayout/layout").as_str())
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    assert!(matches!(
        nanoleaf(&server).panel_layout().await,
        Err(NanoleafError::Decode(_))
    ));
}

#[rstest]
#[case(r#"{"value": 45, "min": 0, "max": 360}"#)]
#[case("45")]
#[tokio::test]
async fn test_global_orientation(#[case] body: &str) {
    let mut server = Server::new_async().await;
    server
        .mock("GET", path("panelLayout/globalOrientation").as_str())
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    assert_eq!(nanoleaf(&server).global_orientation().await.unwrap(), 45);
}

#[rstest]
#[case(90, 90)]
#[case(-20, 0)]
#[case(400, 360)]
#[tokio::test]
async fn test_set_global_orientation_clamps(#[case] angle: i32, #[case] sent: u16) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", path("panelLayout").as_str())
        .match_body(Matcher::Json(
            json!({ "globalOrientation": { "value": sent } }),
        ))
        .with_status(204)
        .create_async()
        .await;

    let mut nanoleaf = nanoleaf(&server);
    nanoleaf.set_global_orientation(angle).await.unwrap();
    assert_eq!(nanoleaf.info().global_orientation.value, sent);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rhythm() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", path("rhythm").as_str())
        .with_status(200)
        .with_body(r#"{"rhythmConnected": true, "rhythmActive": true, "rhythmMode": 0}"#)
        .create_async()
        .await;
    let set_mode = server
        .mock("PUT", path("rhythm").as_str())
        .match_body(Matcher::Json(json!({ "rhythmMode": 1 })))
        .with_status(204)
        .create_async()
        .await;

    let nanoleaf = nanoleaf(&server);
    let rhythm = nanoleaf.rhythm().await.unwrap();
    assert!(rhythm.is_active());
    assert_eq!(rhythm.mode(), Some(RhythmMode::Microphone));

    nanoleaf.set_rhythm_mode(RhythmMode::Aux).await.unwrap();
    set_mode.assert_async().await;
}
