#![cfg(target_arch = "wasm32")]
//! Browser front end for the gallery: canvas surface, input wiring, the
//! redraw loop and camera tick, backend calls and host-page events.

mod api;
mod app;
mod config;
mod constants;
mod dom;
mod events;
mod feed;
mod frame;
mod host;
mod input;
mod keys;
mod overlay;
mod surface;
mod trpc;
mod ui;

use anyhow::anyhow;
use app::{App, SharedApp};
use gallery_core::{Artifact, ArtifactId, Gallery};
use glam::DVec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

thread_local! {
    static APP: RefCell<Option<SharedApp>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            overlay::notify("The gallery could not be loaded.");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    let dataset = canvas.dataset();
    let config = config::ViewerConfig::from_lookup(|key| dataset.get(key))?;
    log::info!(
        "[init] portfolio {} ({}), session {:?}",
        config.portfolio_id,
        config.portfolio_title,
        config.session.map(|s| s.session_id)
    );

    dom::wire_resize(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let mut gallery =
        Gallery::new(config.portfolio_title.clone()).with_fly_to_on_select(config.fly_to_on_select);
    gallery.set_session(config.session);
    let api = api::ApiClient::new(config.api_base.clone());

    let app: SharedApp = Rc::new(RefCell::new(App {
        gallery,
        surface: surface::CanvasSurface::new(ctx),
        canvas: canvas.clone(),
        api: api.clone(),
        feed: None,
    }));
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    events::wire_camera_keys(app.clone());
    events::wire_pointer(app.clone());
    ui::wire_controls(&document, app.clone());
    ui::sync_drawing_ui(&document, &canvas, false);
    frame::start_render_loop(app.clone());
    frame::start_camera_tick(app.clone())?;

    if let Some(session) = config.session {
        subscribe_strokes(&app, session.session_id)?;
    }

    let records = api.portfolio_artifacts(config.portfolio_id).await?;
    log::info!("[init] {} artifacts", records.len());
    app.borrow_mut()
        .gallery
        .set_artifacts(records.into_iter().map(Artifact::from).collect());
    Ok(())
}

fn subscribe_strokes(app: &SharedApp, session_id: i64) -> anyhow::Result<()> {
    let api = app.borrow().api.clone();
    let ready_app = Rc::downgrade(app);
    let deliver_app = Rc::downgrade(app);
    let feed = feed::StrokeFeed::subscribe(
        api,
        session_id,
        constants::STROKE_POLL_MS,
        move || {
            ready_app
                .upgrade()
                .is_some_and(|a| !a.borrow().gallery.is_drawing())
        },
        move |records| {
            if let Some(app) = deliver_app.upgrade() {
                let outcome = app.borrow_mut().gallery.apply_remote_strokes(&records);
                log::debug!("[feed] {} strokes: {:?}", records.len(), outcome);
            }
        },
    )?;
    app.borrow_mut().feed = Some(feed);
    Ok(())
}

fn with_app<R>(f: impl FnOnce(&SharedApp) -> R) -> Result<R, JsValue> {
    APP.with(|slot| slot.borrow().clone())
        .map(|app| f(&app))
        .ok_or_else(|| JsValue::from_str("gallery not initialised"))
}

// ---------------- host page API ----------------

/// Select an artifact as if it had been clicked.
#[wasm_bindgen(js_name = selectArtifact)]
pub fn select_artifact(id: i32) -> Result<(), JsValue> {
    with_app(|app| app::apply(app, |g| g.select(ArtifactId::from(id))))
}

#[wasm_bindgen(js_name = backToGallery)]
pub fn back_to_gallery() -> Result<(), JsValue> {
    with_app(|app| app::apply(app, |g| g.back_to_gallery()))
}

#[wasm_bindgen(js_name = enterAr)]
pub fn enter_ar(id: i32) -> Result<(), JsValue> {
    with_app(|app| {
        let event = app.borrow_mut().gallery.enter_ar(ArtifactId::from(id));
        event.map(|ev| host::dispatch(app, vec![ev]))
    })?
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = exitAr)]
pub fn exit_ar() -> Result<(), JsValue> {
    with_app(|app| app::apply(app, |g| g.exit_ar().into_iter().collect()))
}

/// Move, rotate and scale an artifact; the edit is saved in the background.
#[wasm_bindgen(js_name = placeArtifact)]
#[allow(clippy::too_many_arguments)]
pub fn place_artifact(
    id: i32,
    x: f64,
    y: f64,
    z: f64,
    rotation_x: f64,
    rotation_y: f64,
    rotation_z: f64,
    scale: f64,
) -> Result<(), JsValue> {
    with_app(|app| {
        let event = app.borrow_mut().gallery.place_artifact(
            ArtifactId::from(id),
            DVec3::new(x, y, z),
            DVec3::new(rotation_x, rotation_y, rotation_z),
            scale,
        );
        event.map(|ev| host::dispatch(app, vec![ev]))
    })?
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Leave the collaboration session: stops the stroke feed and drawing mode.
#[wasm_bindgen(js_name = leaveSession)]
pub fn leave_session() -> Result<(), JsValue> {
    with_app(|app| {
        let feed = {
            let mut a = app.borrow_mut();
            a.gallery.set_session(None);
            a.feed.take()
        };
        drop(feed);
        if let Some(document) = dom::window_document() {
            ui::sync_drawing_ui(&document, &app.borrow().canvas, false);
        }
    })
}
