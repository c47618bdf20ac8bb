use glam::DVec2;
use web_sys as web;

/// Pointer position in canvas backing-store pixels, the space the scene is
/// drawn and picked in.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f64 - rect.left();
    let y_css = ev.client_y() as f64 - rect.top();
    let w = rect.width();
    let h = rect.height();
    if w > 0.0 && h > 0.0 {
        DVec2::new(x_css / w * canvas.width() as f64, y_css / h * canvas.height() as f64)
    } else {
        DVec2::new(x_css, y_css)
    }
}
