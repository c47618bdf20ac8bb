use crate::app::SharedApp;
use crate::keys;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Held-key tracking for the camera tick. Focus loss releases everything so
/// a key let go outside the page does not stay held.
pub fn wire_camera_keys(app: SharedApp) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if typing_into_field(&ev) {
                return;
            }
            let key = ev.key();
            if let Some(k) = keys::camera_key(&key) {
                app.borrow_mut().gallery.key_down(k);
                if keys::scrolls_page(&key) {
                    ev.prevent_default();
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if let Some(k) = keys::camera_key(&ev.key()) {
                app.borrow_mut().gallery.key_up(k);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move || {
            app.borrow_mut().gallery.release_all_keys();
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn typing_into_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}
