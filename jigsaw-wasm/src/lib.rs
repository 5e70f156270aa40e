use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Table {
    pub(crate) inner: jigsaw::Table,
}

impl Table {
    pub fn rs_new(image: jigsaw::ImageInfo, config: jigsaw::PuzzleConfig, seed: u32) -> jigsaw::error::Result<Table> {
        jigsaw::Table::new(image, config, seed as u64).map(|inner| Table { inner })
    }
    pub fn rs_state_version(&self) -> u64 {
        self.inner.state_version()
    }
}
