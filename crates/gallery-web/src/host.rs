//! Delivery of gallery events to the page and the backend.

use crate::app::SharedApp;
use crate::constants::{EVENT_AR_ENTERED, EVENT_AR_EXITED, EVENT_ARTIFACT_SELECTED, EVENT_BACK};
use crate::dom;
use crate::overlay;
use gallery_core::GalleryEvent;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

pub fn dispatch(app: &SharedApp, events: Vec<GalleryEvent>) {
    let canvas = app.borrow().canvas.clone();
    for event in events {
        match event {
            GalleryEvent::ArtifactSelected(id) => {
                log::info!("[host] open detail for artifact {id}");
                dom::dispatch_custom_event(&canvas, EVENT_ARTIFACT_SELECTED, &JsValue::from_f64(id as f64));
            }
            GalleryEvent::EnteredAr(id) => {
                dom::dispatch_custom_event(&canvas, EVENT_AR_ENTERED, &JsValue::from_f64(id as f64));
            }
            GalleryEvent::ExitedAr => {
                dom::dispatch_custom_event(&canvas, EVENT_AR_EXITED, &JsValue::NULL);
            }
            GalleryEvent::BackToGallery => {
                dom::dispatch_custom_event(&canvas, EVENT_BACK, &JsValue::NULL);
            }
            GalleryEvent::StrokeCompleted { token, stroke } => {
                let api = app.borrow().api.clone();
                let app = Rc::clone(app);
                spawn_local(async move {
                    match api.create_stroke(&stroke).await {
                        Ok(saved) => {
                            log::debug!("[host] stroke {} saved", saved.id);
                            app.borrow_mut().gallery.stroke_saved(token, saved.id);
                        }
                        Err(e) => {
                            log::error!("[host] stroke save failed: {:#}", e);
                            app.borrow_mut().gallery.stroke_save_failed(token);
                            overlay::notify("Your drawing could not be saved.");
                        }
                    }
                });
            }
            GalleryEvent::ArtifactPlaced(placement) => {
                let api = app.borrow().api.clone();
                spawn_local(async move {
                    if let Err(e) = api.update_artifact_position(&placement).await {
                        log::error!("[host] placement of {} failed: {:#}", placement.id, e);
                        overlay::notify("The new artifact position could not be saved.");
                    }
                });
            }
        }
    }
}
