//! Per-frame scene renderer.
//!
//! Draws against the [`Surface`] trait so the pass can run without a browser.
//! The pass returns the click regions it produced; nothing is stashed on the
//! surface.

use crate::annotation::{AnnotationLayer, Stroke};
use crate::artifact::{Artifact, ArtifactId};
use crate::camera::Camera;
use crate::constants::*;
use crate::picking::{ClickRegion, ClickRegions, ScreenRect};
use crate::projection::{project, Projected, Viewport};
use glam::{DVec2, DVec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug)]
pub struct TextStyle<'a> {
    pub font_px: f64,
    pub color: &'a str,
    pub align: TextAlign,
}

/// Minimal 2D drawing surface. Colours are CSS colour strings.
pub trait Surface {
    fn fill_vertical_gradient(&mut self, viewport: Viewport, stops: &[(f64, &str)]);
    fn line(&mut self, from: DVec2, to: DVec2, color: &str, width: f64);
    fn fill_rect(&mut self, rect: ScreenRect, color: &str);
    fn stroke_rect(&mut self, rect: ScreenRect, color: &str, width: f64);
    /// Draw the image at `url` into `rect`. Returns false when the image is
    /// not available (yet), in which case the caller draws a fallback.
    fn draw_image(&mut self, url: &str, rect: ScreenRect) -> bool;
    fn text(&mut self, text: &str, at: DVec2, style: TextStyle<'_>);
    /// Polyline with round joins and caps.
    fn polyline(&mut self, points: &[DVec2], color: &str, width: f64);
}

/// Text block drawn in the top-left corner.
#[derive(Clone, Copy, Debug)]
pub struct Hud<'a> {
    pub portfolio_title: &'a str,
    pub artifact_count: usize,
}

/// Everything one render pass reads.
pub struct SceneView<'a> {
    pub camera: &'a Camera,
    pub viewport: Viewport,
    pub artifacts: &'a [Artifact],
    pub selected: Option<ArtifactId>,
    pub annotations: &'a AnnotationLayer,
    pub hud: Hud<'a>,
}

/// An artifact that survived projection this frame.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedArtifact<'a> {
    pub artifact: &'a Artifact,
    pub projected: Projected,
}

impl ProjectedArtifact<'_> {
    /// On-screen square for this frame.
    pub fn panel_rect(&self) -> ScreenRect {
        ScreenRect::centered(self.projected.screen, PANEL_BASE_SIZE * self.artifact.scale)
    }
}

/// Sort back-to-front (farthest first). Stable, so re-sorting sorted input
/// leaves it unchanged.
pub fn depth_sort(items: &mut [ProjectedArtifact<'_>]) {
    items.sort_by(|a, b| b.projected.distance.total_cmp(&a.projected.distance));
}

/// Project every artifact, drop the hidden ones and depth-sort the rest.
pub fn project_artifacts<'a>(
    artifacts: &'a [Artifact],
    camera: &Camera,
    viewport: Viewport,
) -> Vec<ProjectedArtifact<'a>> {
    let mut visible: Vec<_> = artifacts
        .iter()
        .filter_map(|artifact| {
            project(artifact.position, camera, viewport).map(|projected| ProjectedArtifact {
                artifact,
                projected,
            })
        })
        .collect();
    depth_sort(&mut visible);
    visible
}

/// Run one full render pass. A zero-sized viewport draws nothing and yields
/// no regions.
pub fn render(surface: &mut impl Surface, view: &SceneView<'_>) -> ClickRegions {
    let mut regions = ClickRegions::default();
    if view.viewport.is_empty() {
        return regions;
    }

    surface.fill_vertical_gradient(view.viewport, &BACKGROUND_STOPS);
    draw_grid(surface, view.camera, view.viewport);

    for item in project_artifacts(view.artifacts, view.camera, view.viewport) {
        let rect = item.panel_rect();
        draw_panel(surface, item.artifact, rect, view.selected == Some(item.artifact.id));
        regions.push(ClickRegion {
            artifact_id: item.artifact.id,
            rect,
        });
    }

    for stroke in view.annotations.frozen() {
        draw_stroke(surface, stroke);
    }
    if let Some(stroke) = view.annotations.current() {
        draw_stroke(surface, stroke);
    }

    draw_hud(surface, &view.hud, view.camera);
    regions
}

fn grid_color(coord: i32) -> &'static str {
    if coord == 0 {
        GRID_ZERO_COLOR
    } else if coord % GRID_MAJOR_STEP == 0 {
        GRID_MAJOR_COLOR
    } else {
        GRID_MINOR_COLOR
    }
}

fn draw_grid(surface: &mut impl Surface, camera: &Camera, viewport: Viewport) {
    let e = GRID_EXTENT as f64;
    for i in (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_MINOR_STEP) {
        let c = i as f64;
        let color = grid_color(i);
        // one line along z, one along x
        let segments = [
            (DVec3::new(c, 0.0, -e), DVec3::new(c, 0.0, e)),
            (DVec3::new(-e, 0.0, c), DVec3::new(e, 0.0, c)),
        ];
        for (a, b) in segments {
            if let (Some(pa), Some(pb)) = (project(a, camera, viewport), project(b, camera, viewport)) {
                surface.line(pa.screen, pb.screen, color, 1.0);
            }
        }
    }
}

fn draw_panel(surface: &mut impl Surface, artifact: &Artifact, rect: ScreenRect, selected: bool) {
    let size = rect.width;
    let center = rect.center();

    let frame = if selected {
        PANEL_SELECTED_FRAME_COLOR
    } else {
        PANEL_FRAME_COLOR
    };
    surface.fill_rect(rect, frame);

    let content = rect.inflate(-PANEL_INSET);
    surface.fill_rect(content, PANEL_CONTENT_COLOR);

    let thumbnail_drawn = artifact
        .thumbnail_url
        .as_deref()
        .is_some_and(|url| surface.draw_image(url, content));
    if !thumbnail_drawn {
        surface.text(
            artifact.kind.icon(),
            DVec2::new(center.x, center.y - size / 4.0),
            TextStyle {
                font_px: size / 4.0,
                color: PANEL_TEXT_COLOR,
                align: TextAlign::Center,
            },
        );
    }

    surface.text(
        &artifact.title,
        DVec2::new(center.x, center.y + size / 6.0),
        TextStyle {
            font_px: size / 8.0,
            color: PANEL_TEXT_COLOR,
            align: TextAlign::Center,
        },
    );
    surface.text(
        artifact.kind.label(),
        DVec2::new(center.x, center.y + size / 3.0),
        TextStyle {
            font_px: size / 12.0,
            color: artifact.kind.accent(),
            align: TextAlign::Center,
        },
    );

    if selected {
        surface.stroke_rect(rect.inflate(2.0), SELECTION_BORDER_COLOR, SELECTION_BORDER_WIDTH);
    }
}

fn draw_stroke(surface: &mut impl Surface, stroke: &Stroke) {
    match stroke.points.as_slice() {
        [] => {}
        // a lone point becomes a round dot
        [p] => surface.polyline(&[*p, *p], &stroke.color, stroke.width),
        points => surface.polyline(points, &stroke.color, stroke.width),
    }
}

fn draw_hud(surface: &mut impl Surface, hud: &Hud<'_>, camera: &Camera) {
    let (x, y) = HUD_ORIGIN;
    let (w, h) = HUD_SIZE;
    surface.fill_rect(
        ScreenRect {
            x,
            y,
            width: w,
            height: h,
        },
        HUD_BACKGROUND,
    );
    let p = camera.position;
    let lines = [
        format!("Portfolio: {}", hud.portfolio_title),
        format!("Artifacts: {}", hud.artifact_count),
        format!("Camera: ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z),
    ];
    for (i, line) in lines.iter().enumerate() {
        surface.text(
            line,
            DVec2::new(x + 10.0, y + HUD_LINE_HEIGHT * (i as f64 + 1.0)),
            TextStyle {
                font_px: HUD_FONT_PX,
                color: PANEL_TEXT_COLOR,
                align: TextAlign::Left,
            },
        );
    }
}
