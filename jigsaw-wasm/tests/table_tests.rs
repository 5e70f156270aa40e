use jigsaw_wasm::Table;
use js_sys::{Float64Array, Reflect, Uint32Array, Uint8Array};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

#[wasm_bindgen_test]
fn construct_and_inspect() {
    let t = Table::new("cat.jpg".into(), 1200.0, 800.0, 12, 7).expect("table");
    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 4);
    assert_eq!(t.piece_count(), 12);
    assert_eq!(t.grid_label(), "12 pieces (4x3)");
    assert!(!t.is_solved());

    let info = t.get_puzzle_info();
    assert_eq!(get(&info, "pieceWidth").as_f64(), Some(300.0));
    let pieces = js_sys::Array::from(&t.get_pieces());
    assert_eq!(pieces.length(), 12);
    let d = get(&pieces.get(0), "pathData").as_string().unwrap();
    assert!(d.starts_with("M 0 0"));
}

#[wasm_bindgen_test]
fn placements_are_typed_arrays() {
    let t = Table::new("cat.jpg".into(), 1200.0, 800.0, 12, 7).unwrap();
    let pd = t.get_placements();
    let ids = Uint32Array::new(&get(&pd, "ids"));
    let pos = Float64Array::new(&get(&pd, "positions"));
    let rot = Uint8Array::new(&get(&pd, "rotations"));
    assert_eq!(ids.length(), 12);
    assert_eq!(pos.length(), 24);
    assert_eq!(rot.length(), 12);
}

#[wasm_bindgen_test]
fn drag_and_snap_round() {
    let mut t = Table::new("cat.jpg".into(), 1200.0, 800.0, 12, 7).unwrap();
    t.resize(800.0, 600.0);
    let piece = get(&t.get_piece(5), "placement");
    let (px, py) = (get(&piece, "x").as_f64().unwrap(), get(&piece, "y").as_f64().unwrap());
    let origin = get(&t.get_piece(5), "imageOrigin");
    let (ox, oy) = (get(&origin, "x").as_f64().unwrap(), get(&origin, "y").as_f64().unwrap());
    assert!(t.grab(5, px, py));
    assert_eq!(t.selected(), Some(5));
    assert!(t.move_piece(5, ox + 1.0, oy));
    assert!(t.release(5));
    assert_eq!(t.snapped_count(), 1);
    assert_eq!(t.selected(), Some(5));
}

#[wasm_bindgen_test]
fn commands_apply_from_json() {
    let mut t = Table::new("cat.jpg".into(), 1200.0, 800.0, 12, 7).unwrap();
    let r = t.apply_command(r#"{"type":"setView","x":10,"y":20,"zoom":2}"#);
    assert_eq!(get(&r, "ok").as_bool(), Some(true));
    assert_eq!(get(&r, "value").as_string().as_deref(), Some("applied"));
    let vp = t.get_viewport();
    assert_eq!(get(&vp, "zoomLevel").as_f64(), Some(2.0));
    let r = t.apply_command(r#"{"type":"rotate","piece":1,"turns":1}"#);
    assert_eq!(get(&r, "value").as_string().as_deref(), Some("ignored"));
}

#[wasm_bindgen_test]
fn render_diff_drains() {
    let mut t = Table::new("cat.jpg".into(), 1200.0, 800.0, 12, 7).unwrap();
    let first = t.take_render_diff();
    assert_eq!(js_sys::Array::from(&get(&first, "pieces")).length(), 12);
    let second = t.take_render_diff();
    assert_eq!(js_sys::Array::from(&get(&second, "pieces")).length(), 0);
    assert!(get(&second, "viewport").is_null());
}

#[wasm_bindgen_test]
fn json_document_is_plain_object() {
    let t = Table::new("cat.jpg".into(), 1200.0, 800.0, 12, 7).unwrap();
    let v = t.to_json();
    let puzzle = get(&v, "puzzle");
    assert_eq!(get(&puzzle, "rows").as_f64(), Some(3.0));
    assert!(t.to_json_string().contains("\"zOrder\""));
}
