use crate::app::{self, SharedApp};
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(app: SharedApp) {
    let canvas = app.borrow().canvas.clone();

    // pointerdown: pick, drag or start a stroke
    {
        let app = app.clone();
        let canvas_target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let at = input::pointer_canvas_px(&ev, &canvas_target);
            let _ = canvas_target.set_pointer_capture(ev.pointer_id());
            app::apply(&app, |g| g.pointer_down(at));
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let app = app.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let at = input::pointer_canvas_px(&ev, &canvas_move);
            app.borrow_mut().gallery.pointer_move(at);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointerleave / pointercancel all end the gesture
    for name in ["pointerup", "pointerleave", "pointercancel"] {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            app::apply(&app, |g| g.pointer_up());
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
