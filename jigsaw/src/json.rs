use crate::model::{PieceView, PuzzleInfo};
use crate::puzzle::Puzzle;
use crate::viewport::Viewport;
use crate::Table;
use serde::Serialize;
use serde_json::{json, Value};

pub fn puzzle_to_json(p: &Puzzle) -> Value {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PuzzleSer<'a> {
        version: u32,
        #[serde(flatten)]
        info: PuzzleInfo,
        pieces: &'a [PieceView],
        snapped: u32,
        solved: bool,
    }
    let pieces = p.piece_views();
    let doc = PuzzleSer {
        version: 1,
        info: p.info(),
        pieces: &pieces,
        snapped: p.snapped_count(),
        solved: p.is_solved(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn table_to_json(t: &Table) -> Value {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct DragSer {
        piece: u32,
        grab_offset_x: f64,
        grab_offset_y: f64,
    }
    let drag = t.drag_session().map(|d| DragSer {
        piece: d.piece,
        grab_offset_x: d.grab_offset.x,
        grab_offset_y: d.grab_offset.y,
    });
    json!({
        "version": 1,
        "stateVersion": t.state_version(),
        "puzzle": puzzle_to_json(t.puzzle()),
        "viewport": viewport_to_json(t.viewport()),
        "selected": t.selected(),
        "drag": drag,
        "zOrder": t.z_order(),
    })
}

pub fn viewport_to_json(v: &Viewport) -> Value {
    serde_json::to_value(v).unwrap_or(Value::Null)
}
