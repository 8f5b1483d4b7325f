use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Id given to the overlay canvas so it can be found (and styled) by the page.
pub const OVERLAY_ID: &str = "cursor-overlay";

const OVERLAY_STYLE: &str = "position:fixed;inset:0;width:100vw;height:100vh;\
pointer-events:none;z-index:9999;mix-blend-mode:difference;";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Whether this device gets the custom cursor at all: a fine pointer and a
/// viewport at least `min_width` CSS pixels wide.
pub fn fine_pointer_available(window: &web::Window, min_width: f64) -> bool {
    let fine = window
        .match_media("(pointer: fine)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    let wide = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w >= min_width)
        .unwrap_or(false);
    fine && wide
}

/// Create the full-viewport canvas the layer draws into and append it to
/// `parent`. On error nothing has been added to the page.
pub fn create_overlay(
    document: &web::Document,
    parent: &web::Element,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_id(OVERLAY_ID);
    canvas
        .set_attribute("style", OVERLAY_STYLE)
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("{:?}", e))?;

    // the canvas only joins the page once it can actually be drawn into
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    sync_canvas_backing_size(&canvas);
    Ok((canvas, ctx))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Hide or restore the native cursor on `<body>`.
pub fn set_native_cursor_hidden(document: &web::Document, hidden: bool) {
    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("cursor", if hidden { "none" } else { "auto" });
    }
}
