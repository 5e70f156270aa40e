use crate::model::Position;
use serde::{Deserialize, Serialize};

/// Abstract input command produced by the UI layer from raw pointer events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    Select {
        piece: Option<u32>,
        #[serde(default)]
        pointer: Option<Position>,
    },
    Move {
        piece: u32,
        screen_x: f64,
        screen_y: f64,
    },
    ReleaseAndSnap {
        piece: u32,
        threshold: f64,
    },
    Rotate {
        piece: u32,
        turns: i64,
    },
    Pan {
        dx: f64,
        dy: f64,
    },
    Zoom {
        factor: f64,
        #[serde(default)]
        screen_x: Option<f64>,
        #[serde(default)]
        screen_y: Option<f64>,
    },
    SetView {
        x: f64,
        y: f64,
        zoom: f64,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Select { .. } => "select",
            Command::Move { .. } => "move",
            Command::ReleaseAndSnap { .. } => "releaseAndSnap",
            Command::Rotate { .. } => "rotate",
            Command::Pan { .. } => "pan",
            Command::Zoom { .. } => "zoom",
            Command::SetView { .. } => "setView",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandOutcome {
    Applied,
    Snapped,
    NotSnapped,
    Unchanged,
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_from_ui_json() {
        let c: Command = serde_json::from_str(r#"{"type":"zoom","factor":1.5}"#).unwrap();
        assert_eq!(c, Command::Zoom { factor: 1.5, screen_x: None, screen_y: None });
        let c: Command = serde_json::from_str(r#"{"type":"releaseAndSnap","piece":3,"threshold":5}"#).unwrap();
        assert_eq!(c.name(), "releaseAndSnap");
        let c: Command = serde_json::from_str(r#"{"type":"select","piece":null}"#).unwrap();
        assert_eq!(c, Command::Select { piece: None, pointer: None });
    }

    #[test]
    fn pointer_fields_are_camel_case() {
        let c: Command = serde_json::from_str(r#"{"type":"move","piece":2,"screenX":10,"screenY":20.5}"#).unwrap();
        assert_eq!(c, Command::Move { piece: 2, screen_x: 10.0, screen_y: 20.5 });
        let c: Command = serde_json::from_str(r#"{"type":"zoom","factor":2,"screenX":1,"screenY":2}"#).unwrap();
        assert_eq!(c, Command::Zoom { factor: 2.0, screen_x: Some(1.0), screen_y: Some(2.0) });
        let v = serde_json::to_value(Command::Move { piece: 1, screen_x: 3.0, screen_y: 4.0 }).unwrap();
        assert_eq!(v["screenX"], 3.0);
        assert!(v.get("screen_x").is_none());
    }
}
