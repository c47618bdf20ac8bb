use crate::app::{self, SharedApp};
use gallery_core::CAMERA_TICK_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Redraw every animation frame. The pass reads whatever camera state the
/// tick last left behind.
pub fn start_render_loop(app: SharedApp) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.borrow_mut().draw();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Fixed-rate camera tick, independent of the redraw.
pub fn start_camera_tick(app: SharedApp) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move || {
        app::apply(&app, |g| g.tick());
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), CAMERA_TICK_MS)
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    closure.forget();
    Ok(())
}
