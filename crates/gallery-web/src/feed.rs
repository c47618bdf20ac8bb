//! Session stroke subscription.
//!
//! Polls `getSessionDrawingStrokes` on an interval and hands each result to a
//! delivery callback. There is no explicit cancel: dropping the feed clears
//! the interval, and responses still in flight at that point are discarded.

use crate::api::ApiClient;
use gallery_core::StrokeRecord;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct StrokeFeed {
    handle: i32,
    live: Rc<Cell<bool>>,
    _tick: Closure<dyn FnMut()>,
}

impl StrokeFeed {
    /// Start polling now and every `period_ms`. `ready` gates each poll
    /// (false while a local stroke is being drawn).
    pub fn subscribe(
        api: ApiClient,
        session_id: i64,
        period_ms: i32,
        ready: impl Fn() -> bool + 'static,
        deliver: impl Fn(Vec<StrokeRecord>) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let live = Rc::new(Cell::new(true));
        let in_flight = Rc::new(Cell::new(false));
        let deliver: Rc<dyn Fn(Vec<StrokeRecord>)> = Rc::new(deliver);

        let poll = {
            let live = live.clone();
            move || {
                if !live.get() || in_flight.get() || !ready() {
                    return;
                }
                in_flight.set(true);
                let api = api.clone();
                let live = live.clone();
                let in_flight = in_flight.clone();
                let deliver = deliver.clone();
                spawn_local(async move {
                    let result = api.session_strokes(session_id).await;
                    in_flight.set(false);
                    if !live.get() {
                        return;
                    }
                    match result {
                        Ok(records) => deliver(records),
                        Err(e) => log::warn!("[feed] refresh failed: {:#}", e),
                    }
                });
            }
        };
        poll();

        let tick = Closure::wrap(Box::new(poll) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), period_ms)
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
        log::info!("[feed] session {session_id}: polling every {period_ms} ms");
        Ok(Self {
            handle,
            live,
            _tick: tick,
        })
    }
}

impl Drop for StrokeFeed {
    fn drop(&mut self) {
        self.live.set(false);
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
        log::info!("[feed] stopped");
    }
}
