//! Freehand annotation overlay.
//!
//! Strokes live in screen space and do not move with the camera. The layer
//! keeps strokes replayed from the session (replaced wholesale on refresh)
//! apart from local ones. A local stroke stays local until a refresh that
//! contains its stored id, so a refresh answered after the save is
//! acknowledged but fetched before it landed cannot hide it.

use crate::constants::{STROKE_DEFAULT_WIDTH, STROKE_PALETTE};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub points: Vec<DVec2>,
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            points: Vec::new(),
            color: color.into(),
            width,
        }
    }
}

/// Handle for a local stroke awaiting its save result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeToken(u64);

#[derive(Clone, Debug)]
struct PendingStroke {
    token: StrokeToken,
    stroke: Stroke,
    failed: bool,
}

/// Stored id of a stroke row.
pub type StrokeId = i64;

#[derive(Clone, Debug)]
pub struct AnnotationLayer {
    replayed: Vec<Stroke>,
    /// Saved local strokes not yet seen in a refresh.
    acknowledged: Vec<(StrokeId, Stroke)>,
    pending: Vec<PendingStroke>,
    current: Option<Stroke>,
    color: String,
    width: f64,
    next_token: u64,
}

impl Default for AnnotationLayer {
    fn default() -> Self {
        Self {
            replayed: Vec::new(),
            acknowledged: Vec::new(),
            pending: Vec::new(),
            current: None,
            color: STROKE_PALETTE[0].to_owned(),
            width: STROKE_DEFAULT_WIDTH,
            next_token: 0,
        }
    }
}

impl AnnotationLayer {
    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// idle -> drawing. The first point is the press position. Ignored
    /// while a stroke is already in progress; returns whether one began.
    pub fn begin(&mut self, at: DVec2) -> bool {
        if self.is_drawing() {
            return false;
        }
        let mut stroke = Stroke::new(self.color.clone(), self.width);
        stroke.points.push(at);
        self.current = Some(stroke);
        true
    }

    pub fn extend(&mut self, to: DVec2) -> bool {
        match &mut self.current {
            Some(stroke) => {
                stroke.points.push(to);
                true
            }
            None => false,
        }
    }

    /// drawing -> idle. A stroke with at least one point is frozen into the
    /// pending list and returned with the token used to report its save.
    pub fn finish(&mut self) -> Option<(StrokeToken, Stroke)> {
        let stroke = self.current.take()?;
        if stroke.points.is_empty() {
            return None;
        }
        let token = StrokeToken(self.next_token);
        self.next_token += 1;
        self.pending.push(PendingStroke {
            token,
            stroke: stroke.clone(),
            failed: false,
        });
        Some((token, stroke))
    }

    /// Drop the in-progress stroke without freezing it.
    pub fn abandon(&mut self) {
        self.current = None;
    }

    /// Replace the replayed collection with `(id, stroke)` rows from the
    /// session. Acknowledged local strokes whose id is among them hand over
    /// to the replayed copy; the rest stay. Refused while a local stroke is
    /// in progress; returns whether the refresh was applied.
    pub fn replace_replayed(&mut self, strokes: Vec<(StrokeId, Stroke)>) -> bool {
        if self.is_drawing() {
            return false;
        }
        self.acknowledged
            .retain(|(id, _)| !strokes.iter().any(|(seen, _)| seen == id));
        self.replayed = strokes.into_iter().map(|(_, s)| s).collect();
        true
    }

    /// The save for `token` succeeded and was stored as `id`.
    pub fn acknowledge(&mut self, token: StrokeToken, id: StrokeId) {
        if let Some(i) = self.pending.iter().position(|p| p.token == token) {
            let p = self.pending.remove(i);
            self.acknowledged.push((id, p.stroke));
        }
    }

    /// The save for `token` failed. The stroke stays visible locally.
    pub fn mark_failed(&mut self, token: StrokeToken) {
        if let Some(p) = self.pending.iter_mut().find(|p| p.token == token) {
            p.failed = true;
        }
    }

    pub fn failed_count(&self) -> usize {
        self.pending.iter().filter(|p| p.failed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn acknowledged_count(&self) -> usize {
        self.acknowledged.len()
    }

    /// All frozen strokes in paint order: replayed first, then local.
    pub fn frozen(&self) -> impl Iterator<Item = &Stroke> {
        self.replayed
            .iter()
            .chain(self.acknowledged.iter().map(|(_, s)| s))
            .chain(self.pending.iter().map(|p| &p.stroke))
    }

    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }
}
