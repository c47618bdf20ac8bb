//! Interaction state for one gallery view.
//!
//! Ties the camera controller, picking and annotation layers together and
//! turns input into [`GalleryEvent`]s for the host (detail overlay, AR mode)
//! and the data layer (stroke saves, placement edits). All methods run on a
//! single thread; the render pass and the camera tick may interleave freely.

use crate::annotation::{AnnotationLayer, StrokeId, StrokeToken};
use crate::artifact::{Artifact, ArtifactId};
use crate::camera::Camera;
use crate::constants::DETAIL_OPEN_FALLBACK_TICKS;
use crate::controller::{CameraController, CameraKey, HeldKeys, TickOutcome};
use crate::error::{GalleryError, Result};
use crate::picking::{ClickRegions, DragState};
use crate::projection::Viewport;
use crate::records::{ArtifactPlacement, NewStroke, SessionContext, StrokeRecord};
use crate::scene::{render, Hud, SceneView, Surface};
use glam::{DVec2, DVec3};

/// Output of the gallery towards the host page and the data layer.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent {
    /// Open the detail view for this artifact.
    ArtifactSelected(ArtifactId),
    EnteredAr(ArtifactId),
    ExitedAr,
    BackToGallery,
    /// Persist a finished stroke; report the outcome with `token`.
    StrokeCompleted { token: StrokeToken, stroke: NewStroke },
    ArtifactPlaced(ArtifactPlacement),
}

#[derive(Clone, Copy, Debug)]
struct PendingDetail {
    artifact_id: ArtifactId,
    ticks_left: u32,
}

/// Outcome of applying a remote stroke refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { skipped: usize },
    /// A local stroke is in progress; nothing was replaced.
    Deferred,
}

pub struct Gallery {
    portfolio_title: String,
    artifacts: Vec<Artifact>,
    controller: CameraController,
    keys: HeldKeys,
    drag: DragState,
    annotations: AnnotationLayer,
    session: Option<SessionContext>,
    drawing_mode: bool,
    fly_to_on_select: bool,
    selected: Option<ArtifactId>,
    ar_artifact: Option<ArtifactId>,
    pending_detail: Option<PendingDetail>,
    viewport: Viewport,
    regions: ClickRegions,
}

impl Gallery {
    pub fn new(portfolio_title: impl Into<String>) -> Self {
        Self {
            portfolio_title: portfolio_title.into(),
            artifacts: Vec::new(),
            controller: CameraController::new(Camera::overview()),
            keys: HeldKeys::default(),
            drag: DragState::default(),
            annotations: AnnotationLayer::default(),
            session: None,
            drawing_mode: false,
            fly_to_on_select: true,
            selected: None,
            ar_artifact: None,
            pending_detail: None,
            viewport: Viewport::default(),
            regions: ClickRegions::default(),
        }
    }

    pub fn with_fly_to_on_select(mut self, enabled: bool) -> Self {
        self.fly_to_on_select = enabled;
        self
    }

    // ---------------- data in ----------------

    pub fn set_artifacts(&mut self, artifacts: Vec<Artifact>) {
        if let Some(id) = self.selected {
            if !artifacts.iter().any(|a| a.id == id) {
                self.selected = None;
            }
        }
        self.artifacts = artifacts;
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Join (or leave, with `None`) a collaboration session. Leaving turns
    /// drawing mode off and drops any stroke in progress.
    pub fn set_session(&mut self, session: Option<SessionContext>) {
        self.session = session;
        if session.is_none() {
            self.drawing_mode = false;
            self.annotations.abandon();
        }
    }

    pub fn session(&self) -> Option<SessionContext> {
        self.session
    }

    /// Replace the replayed strokes with a fresh copy from the session.
    /// Malformed rows are skipped; the refresh is deferred while drawing.
    pub fn apply_remote_strokes(&mut self, records: &[StrokeRecord]) -> RefreshOutcome {
        if self.annotations.is_drawing() {
            return RefreshOutcome::Deferred;
        }
        let mut skipped = 0;
        let strokes = records
            .iter()
            .filter_map(|r| match r.to_stroke() {
                Ok(s) => Some((r.id, s)),
                Err(e) => {
                    log::warn!("[strokes] skipping: {e}");
                    skipped += 1;
                    None
                }
            })
            .collect();
        self.annotations.replace_replayed(strokes);
        RefreshOutcome::Applied { skipped }
    }

    /// The save for `token` was stored under `id`.
    pub fn stroke_saved(&mut self, token: StrokeToken, id: StrokeId) {
        self.annotations.acknowledge(token, id);
    }

    pub fn stroke_save_failed(&mut self, token: StrokeToken) {
        self.annotations.mark_failed(token);
    }

    // ---------------- state out ----------------

    pub fn camera(&self) -> &Camera {
        self.controller.camera()
    }

    pub fn selected(&self) -> Option<ArtifactId> {
        self.selected
    }

    pub fn annotations(&self) -> &AnnotationLayer {
        &self.annotations
    }

    pub fn drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn is_drawing(&self) -> bool {
        self.annotations.is_drawing()
    }

    pub fn ar_artifact(&self) -> Option<ArtifactId> {
        self.ar_artifact
    }

    /// Regions of the last completed render pass.
    pub fn click_regions(&self) -> &ClickRegions {
        &self.regions
    }

    // ---------------- controls ----------------

    /// Drawing mode needs a session; returns the resulting mode.
    pub fn set_drawing_mode(&mut self, enabled: bool) -> bool {
        self.drawing_mode = enabled && self.session.is_some();
        if !self.drawing_mode {
            self.annotations.abandon();
            self.drag.end();
        }
        self.drawing_mode
    }

    pub fn toggle_drawing_mode(&mut self) -> bool {
        self.set_drawing_mode(!self.drawing_mode)
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.annotations.set_color(color);
    }

    pub fn key_down(&mut self, key: CameraKey) {
        self.keys.press(key);
    }

    pub fn key_up(&mut self, key: CameraKey) {
        self.keys.release(key);
    }

    /// Forget held keys, e.g. when the window loses focus.
    pub fn release_all_keys(&mut self) {
        self.keys.clear();
    }

    /// Fixed-rate camera tick. Delivers a deferred detail-open once the
    /// fly-to settles or the fallback delay runs out.
    pub fn tick(&mut self) -> Vec<GalleryEvent> {
        let outcome = self.controller.tick(&self.keys);
        let settled = outcome == TickOutcome::Arrived || !self.controller.is_flying();
        let due = match &mut self.pending_detail {
            Some(pending) => {
                pending.ticks_left = pending.ticks_left.saturating_sub(1);
                settled || pending.ticks_left == 0
            }
            None => false,
        };
        if due {
            self.flush_pending_detail().into_iter().collect()
        } else {
            Vec::new()
        }
    }

    fn flush_pending_detail(&mut self) -> Option<GalleryEvent> {
        self.pending_detail
            .take()
            .map(|p| GalleryEvent::ArtifactSelected(p.artifact_id))
    }

    /// Draw one frame and keep its click regions for the next pick.
    pub fn render(&mut self, surface: &mut impl Surface) {
        let view = SceneView {
            camera: self.controller.camera(),
            viewport: self.viewport,
            artifacts: &self.artifacts,
            selected: self.selected,
            annotations: &self.annotations,
            hud: Hud {
                portfolio_title: &self.portfolio_title,
                artifact_count: self.artifacts.len(),
            },
        };
        self.regions = render(surface, &view);
    }

    // ---------------- pointer ----------------

    pub fn pointer_down(&mut self, at: DVec2) -> Vec<GalleryEvent> {
        if self.drawing_mode {
            if self.session.is_some() {
                self.annotations.begin(at);
            }
            return Vec::new();
        }
        match self.regions.pick(at) {
            Some(id) => self.select(id),
            None => {
                self.drag.start(at);
                Vec::new()
            }
        }
    }

    pub fn pointer_move(&mut self, at: DVec2) {
        if self.annotations.is_drawing() {
            self.annotations.extend(at);
            return;
        }
        if self.drawing_mode {
            return;
        }
        if let Some(delta) = self.drag.advance(at) {
            self.controller.drag(delta.x, delta.y);
        }
    }

    /// Pointer released or left the surface.
    pub fn pointer_up(&mut self) -> Vec<GalleryEvent> {
        self.drag.end();
        let mut events = Vec::new();
        if let Some((token, stroke)) = self.annotations.finish() {
            if let Some(session) = self.session {
                events.push(GalleryEvent::StrokeCompleted {
                    token,
                    stroke: NewStroke::from_stroke(session, &stroke),
                });
            }
        }
        events
    }

    // ---------------- selection / navigation ----------------

    /// Select an artifact as if it had been clicked.
    pub fn select(&mut self, id: ArtifactId) -> Vec<GalleryEvent> {
        let Some(artifact) = self.artifacts.iter().find(|a| a.id == id) else {
            return Vec::new();
        };
        log::debug!("[pick] artifact {id}");
        let position = artifact.position;
        self.selected = Some(id);

        let mut events: Vec<GalleryEvent> = self.flush_pending_detail().into_iter().collect();
        if self.fly_to_on_select {
            self.controller.focus_on(position);
            self.pending_detail = Some(PendingDetail {
                artifact_id: id,
                ticks_left: DETAIL_OPEN_FALLBACK_TICKS,
            });
        } else {
            events.push(GalleryEvent::ArtifactSelected(id));
        }
        events
    }

    pub fn back_to_gallery(&mut self) -> Vec<GalleryEvent> {
        let mut events: Vec<GalleryEvent> = self.flush_pending_detail().into_iter().collect();
        if self.ar_artifact.take().is_some() {
            events.push(GalleryEvent::ExitedAr);
        }
        self.selected = None;
        self.controller.return_to_overview();
        events.push(GalleryEvent::BackToGallery);
        events
    }

    pub fn enter_ar(&mut self, id: ArtifactId) -> Result<GalleryEvent> {
        let artifact = self.artifact(id)?;
        if !artifact.ar_enabled {
            return Err(GalleryError::ArUnavailable(id));
        }
        self.ar_artifact = Some(id);
        Ok(GalleryEvent::EnteredAr(id))
    }

    pub fn exit_ar(&mut self) -> Option<GalleryEvent> {
        self.ar_artifact.take().map(|_| GalleryEvent::ExitedAr)
    }

    /// Move/rotate/scale an artifact locally and emit the edit for storage.
    pub fn place_artifact(
        &mut self,
        id: ArtifactId,
        position: DVec3,
        rotation: DVec3,
        scale: f64,
    ) -> Result<GalleryEvent> {
        if scale.is_nan() || scale <= 0.0 {
            return Err(GalleryError::InvalidScale(scale));
        }
        let artifact = self
            .artifacts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(GalleryError::UnknownArtifact(id))?;
        artifact.position = position;
        artifact.rotation = rotation;
        artifact.scale = scale;
        Ok(GalleryEvent::ArtifactPlaced(ArtifactPlacement::from(&*artifact)))
    }

    fn artifact(&self, id: ArtifactId) -> Result<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.id == id)
            .ok_or(GalleryError::UnknownArtifact(id))
    }
}
