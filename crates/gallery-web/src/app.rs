use crate::api::ApiClient;
use crate::feed::StrokeFeed;
use crate::host;
use crate::surface::CanvasSurface;
use gallery_core::{Gallery, GalleryEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the browser callbacks share.
pub struct App {
    pub gallery: Gallery,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub api: ApiClient,
    pub feed: Option<StrokeFeed>,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn draw(&mut self) {
        self.gallery.set_viewport(CanvasSurface::viewport(&self.canvas));
        self.gallery.render(&mut self.surface);
    }
}

/// Run `f` against the gallery, then hand its events to the host with the
/// borrow released, so page listeners may call back in.
pub fn apply(app: &SharedApp, f: impl FnOnce(&mut Gallery) -> Vec<GalleryEvent>) {
    let events = f(&mut app.borrow_mut().gallery);
    if !events.is_empty() {
        host::dispatch(app, events);
    }
}
