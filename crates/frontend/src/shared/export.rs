//! Browser side of "Exportar CSV": wraps rendered text in a Blob and clicks a
//! temporary download link.

use contracts::shared::csv::{render_csv, CsvExportable};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Renders `rows` and starts the download. An empty slice is rejected.
pub fn export_to_csv<T: CsvExportable>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }
    let content = render_csv(rows);
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)?;
    log::info!("CSV exportado: {} ({} filas)", filename, rows.len());
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    // BOM so spreadsheet apps read accents correctly
    parts.push(&wasm_bindgen::JsValue::from_str("\u{FEFF}"));
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("No se pudo crear el archivo: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Sin objeto window")?;
    let document = window.document().ok_or("Sin objeto document")?;
    let body = document.body().ok_or("Sin elemento body")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("No se pudo crear la URL de descarga: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("No se pudo crear el enlace: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Elemento inesperado: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("{:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("No se pudo insertar el enlace: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("No se pudo retirar el enlace: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("{:?}", e))?;
    Ok(())
}
