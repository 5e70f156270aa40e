use crate::interop::{new_obj, set_kv};
use jigsaw::PuzzleError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn not_selected(id: u32) -> JsValue {
    let d = new_obj(); set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("not_selected", "piece must be selected first", Some(d.into()))
}

#[inline]
pub fn no_drag(id: u32) -> JsValue {
    let d = new_obj(); set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("no_drag", "piece has no active drag session", Some(d.into()))
}

pub fn from_puzzle(e: &PuzzleError) -> JsValue {
    let d = new_obj();
    match e {
        PuzzleError::InvalidImage { width, height } => {
            set_kv(&d, "width", &JsValue::from_f64(*width));
            set_kv(&d, "height", &JsValue::from_f64(*height));
        }
        PuzzleError::NonFinite { param } => set_kv(&d, "param", &JsValue::from_str(param)),
        PuzzleError::InvalidConfig { field, .. } => set_kv(&d, "field", &JsValue::from_str(field)),
        PuzzleError::Json(_) => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

/// Constructor failures surface as a thrown error object and a console warning.
pub fn throw(e: &PuzzleError) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    let v = from_puzzle(e);
    js_sys::Reflect::get(&v, &JsValue::from_str("error")).unwrap_or(v)
}
