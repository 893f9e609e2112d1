use crate::constants::{
    LOADING_FADE_MS, LOADING_FADE_TRANSITION, LOADING_HIDE_DELAY_MS, LOADING_SCREEN_ID,
};
use crate::dom;
use folio_core::ui::HideOnce;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade the loading screen out after a fixed delay. Safe to call when the
/// page has no loading screen.
pub fn schedule_hide(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    let win = window.clone();
    let latch = HideOnce::default();
    dom::set_timeout(window, LOADING_HIDE_DELAY_MS, move || hide(&win, &doc, &latch));
}

/// Start the fade; only the first call on a given latch does anything.
pub fn hide(window: &web::Window, document: &web::Document, latch: &HideOnce) {
    if !latch.trigger() {
        return;
    }
    let Some(el) = document
        .get_element_by_id(LOADING_SCREEN_ID)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = el.style();
    _ = style.set_property("transition", LOADING_FADE_TRANSITION);
    _ = style.set_property("opacity", "0");
    dom::set_timeout(window, LOADING_FADE_MS, move || {
        _ = el.style().set_property("display", "none");
    });
    log::info!("loading screen hidden");
}
