use js_sys::{Float64Array, Object, Reflect, Uint32Array, Uint8Array};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object {
    Object::new()
}

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

// Serde maps become plain objects, not ES `Map`s.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

/// Column layout for the renderer's per-frame transform pass: `ids[i]` sits
/// at `(positions[2i], positions[2i+1])` with `rotations[i]` quarter turns.
pub fn placement_arrays(ids: &[u32], positions: &[f64], rotations: &[u8]) -> Object {
    let ids_arr = Uint32Array::new_with_length(ids.len() as u32);
    ids_arr.copy_from(ids);
    let pos_arr = Float64Array::new_with_length(positions.len() as u32);
    pos_arr.copy_from(positions);
    let rot_arr = Uint8Array::new_with_length(rotations.len() as u32);
    rot_arr.copy_from(rotations);
    let obj = new_obj();
    set_kv(&obj, "ids", &ids_arr.into());
    set_kv(&obj, "positions", &pos_arr.into());
    set_kv(&obj, "rotations", &rot_arr.into());
    obj
}
