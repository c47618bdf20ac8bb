//! Page controls around the canvas: drawing toggle, colour palette, back and
//! AR buttons. Each is optional.

use crate::app::{self, SharedApp};
use crate::constants::{AR_BUTTON_ID, BACK_BUTTON_ID, DRAWING_CLASS, DRAW_TOGGLE_ID, PALETTE_ID};
use crate::dom;
use crate::host;
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_controls(document: &web::Document, app: SharedApp) {
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, DRAW_TOGGLE_ID, move || {
            let (on, has_session) = {
                let mut a = app.borrow_mut();
                (a.gallery.toggle_drawing_mode(), a.gallery.session().is_some())
            };
            if !on && !has_session {
                overlay::notify("Join a collaboration session to draw.");
            }
            sync_drawing_ui(&doc, &app.borrow().canvas, on);
        });
    }
    {
        let app = app.clone();
        dom::add_click_listener(document, BACK_BUTTON_ID, move || {
            app::apply(&app, |g| g.back_to_gallery());
        });
    }
    {
        let app = app.clone();
        dom::add_click_listener(document, AR_BUTTON_ID, move || {
            let result = {
                let mut a = app.borrow_mut();
                let selected = a.gallery.selected();
                match selected {
                    Some(id) => a.gallery.enter_ar(id).map(Some),
                    None => Ok(None),
                }
            };
            match result {
                Ok(Some(event)) => host::dispatch(&app, vec![event]),
                Ok(None) => overlay::notify("Select an artifact first."),
                Err(e) => overlay::notify(&e.to_string()),
            }
        });
    }
    wire_palette(document, app);
}

/// One listener on the palette; swatches carry their colour in `data-color`.
fn wire_palette(document: &web::Document, app: SharedApp) {
    let Some(palette) = document.get_element_by_id(PALETTE_ID) else {
        return;
    };
    let palette_el = palette.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(swatch) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-color]").ok().flatten())
        else {
            return;
        };
        let Some(color) = swatch.get_attribute("data-color") else {
            return;
        };
        log::debug!("[ui] stroke colour {color}");
        app.borrow_mut().gallery.set_stroke_color(color);
        if let Ok(Some(prev)) = palette_el.query_selector(".selected") {
            dom::set_class(&prev, "selected", false);
        }
        dom::set_class(&swatch, "selected", true);
    }) as Box<dyn FnMut(_)>);
    let _ = palette.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Reflect drawing mode on the canvas, the toggle and the palette.
pub fn sync_drawing_ui(document: &web::Document, canvas: &web::HtmlCanvasElement, on: bool) {
    dom::set_class(canvas, DRAWING_CLASS, on);
    for id in [DRAW_TOGGLE_ID, PALETTE_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            dom::set_class(&el, DRAWING_CLASS, on);
        }
    }
}
