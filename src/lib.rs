pub mod document;
pub mod graph;
pub mod schema;
pub mod sql;

use wasm_bindgen::prelude::*;

use document::SchemaDocument;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Generate SQL DDL from a schema document in JSON form
#[wasm_bindgen(js_name = "schemaToSql")]
pub fn schema_to_sql(json: &str) -> Result<String, String> {
    let document = SchemaDocument::from_json(json).map_err(|e| e.to_string())?;
    Ok(document.generate_sql())
}
