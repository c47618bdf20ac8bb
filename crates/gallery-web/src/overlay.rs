//! Transient notification line (`#gallery-notice`).

use crate::constants::{NOTICE_ID, NOTICE_MS};
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static HIDE_TIMER: Cell<Option<i32>> = const { Cell::new(None) };
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Show `message` for a few seconds, replacing any notice already up.
pub fn notify(message: &str) {
    log::info!("[notice] {message}");
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(el) = document.get_element_by_id(NOTICE_ID) else {
        return;
    };
    el.set_text_content(Some(message));
    let _ = el.set_attribute("style", "");

    if let Some(handle) = HIDE_TIMER.with(Cell::take) {
        window.clear_timeout_with_handle(handle);
    }
    let closure = Closure::once_into_js(move || {
        HIDE_TIMER.with(|t| t.set(None));
        hide(&document);
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        NOTICE_MS,
    ) {
        Ok(handle) => HIDE_TIMER.with(|t| t.set(Some(handle))),
        Err(e) => log::warn!("[notice] setTimeout failed: {:?}", e),
    }
}
