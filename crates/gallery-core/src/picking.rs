//! Screen-space hit testing against the regions of the last completed frame.

use crate::artifact::ArtifactId;
use glam::DVec2;
use smallvec::SmallVec;

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn centered(center: DVec2, size: f64) -> Self {
        Self {
            x: center.x - size * 0.5,
            y: center.y - size * 0.5,
            width: size,
            height: size,
        }
    }

    /// Grow (or shrink, for negative `by`) on every side.
    pub fn inflate(&self, by: f64) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: self.width + 2.0 * by,
            height: self.height + 2.0 * by,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Edges are inclusive.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickRegion {
    pub artifact_id: ArtifactId,
    pub rect: ScreenRect,
}

/// Click regions of one completed render pass, in paint (back-to-front) order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickRegions(SmallVec<[ClickRegion; 16]>);

impl ClickRegions {
    pub fn push(&mut self, region: ClickRegion) {
        self.0.push(region);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClickRegion> {
        self.0.iter()
    }

    pub fn region_of(&self, id: ArtifactId) -> Option<&ClickRegion> {
        self.0.iter().find(|r| r.artifact_id == id)
    }

    /// The topmost artifact under `p`. Regions are stored back-to-front, so
    /// the last match is the one painted on top.
    pub fn pick(&self, p: DVec2) -> Option<ArtifactId> {
        self.0
            .iter()
            .rev()
            .find(|r| r.rect.contains(p))
            .map(|r| r.artifact_id)
    }
}

/// Pointer-drag tracking for camera orbiting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last: DVec2,
}

impl DragState {
    pub fn start(&mut self, at: DVec2) {
        self.active = true;
        self.last = at;
    }

    /// Delta since the previous pointer position, if a drag is active.
    pub fn advance(&mut self, to: DVec2) -> Option<DVec2> {
        if !self.active {
            return None;
        }
        let delta = to - self.last;
        self.last = to;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}
