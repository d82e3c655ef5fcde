//! Encoding of the `animData` string used by static scenes.
//!
//! The layout is `N` followed by one record per panel:
//! `panelId numFrames R G B W T`, where a static scene always has a single
//! frame, `W` is unused (0) and `T` is the transition time in 100 ms units.

use std::time::Duration;

use crate::led::rgb::RGB;
use crate::util::error::{NanoleafError, Result};

/// One panel's entry in a static scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFrame {
    pub panel_id: u32,
    pub color: RGB,
    /// Transition in the device's 100 ms units.
    pub transition: u16,
}

/// Converts a duration into the device's 100 ms transition units, rounding
/// to the nearest step.
pub fn transition_units(transition: Duration) -> u16 {
    let units = (transition.as_millis() + 50) / 100;
    units.min(u128::from(u16::MAX)) as u16
}

pub fn encode_static(frames: &[StaticFrame]) -> String {
    let mut parts = Vec::with_capacity(1 + frames.len() * 7);
    parts.push(frames.len().to_string());
    for frame in frames {
        parts.push(frame.panel_id.to_string());
        parts.push("1".to_string());
        parts.push(frame.color.red.to_string());
        parts.push(frame.color.green.to_string());
        parts.push(frame.color.blue.to_string());
        parts.push("0".to_string());
        parts.push(frame.transition.to_string());
    }
    parts.join(" ")
}

/// Parses static `animData` back into frames. Records with more than one
/// frame are rejected since they are not static.
pub fn decode_static(anim_data: &str) -> Result<Vec<StaticFrame>> {
    let invalid = |reason: &str| NanoleafError::InvalidValue(format!("animData: {}", reason));
    let numbers = anim_data
        .split_whitespace()
        .map(|token| token.parse::<u32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid(&e.to_string()))?;
    let (count, records) = numbers.split_first().ok_or_else(|| invalid("empty"))?;
    if records.len() != *count as usize * 7 {
        return Err(invalid("record count does not match panel count"));
    }
    let component = |value: u32| u8::try_from(value).map_err(|_| invalid("colour out of range"));
    records
        .chunks_exact(7)
        .map(|record| {
            if record[1] != 1 {
                return Err(invalid("not a static scene"));
            }
            Ok(StaticFrame {
                panel_id: record[0],
                color: RGB::new(
                    component(record[2])?,
                    component(record[3])?,
                    component(record[4])?,
                ),
                transition: u16::try_from(record[6])
                    .map_err(|_| invalid("transition out of range"))?,
            })
        })
        .collect()
}
