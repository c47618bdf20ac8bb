// Recording surface shared by the host-side tests.
#![allow(dead_code)]

use gallery_core::{ScreenRect, Surface, TextStyle, Viewport};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Gradient,
    Line { from: DVec2, to: DVec2, color: String },
    FillRect { rect: ScreenRect, color: String },
    StrokeRect { rect: ScreenRect, color: String },
    Image { url: String, rect: ScreenRect },
    Text { text: String, at: DVec2 },
    Polyline { points: Vec<DVec2>, color: String },
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    /// URLs the fake surface has "loaded".
    pub loaded: Vec<String>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Line { .. })).count()
    }

    pub fn polylines(&self) -> Vec<&Vec<DVec2>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Polyline { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn fill_vertical_gradient(&mut self, _viewport: Viewport, _stops: &[(f64, &str)]) {
        self.calls.push(Call::Gradient);
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: &str, _width: f64) {
        self.calls.push(Call::Line {
            from,
            to,
            color: color.to_owned(),
        });
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: &str) {
        self.calls.push(Call::FillRect {
            rect,
            color: color.to_owned(),
        });
    }

    fn stroke_rect(&mut self, rect: ScreenRect, color: &str, _width: f64) {
        self.calls.push(Call::StrokeRect {
            rect,
            color: color.to_owned(),
        });
    }

    fn draw_image(&mut self, url: &str, rect: ScreenRect) -> bool {
        if self.loaded.iter().any(|u| u == url) {
            self.calls.push(Call::Image {
                url: url.to_owned(),
                rect,
            });
            true
        } else {
            false
        }
    }

    fn text(&mut self, text: &str, at: DVec2, _style: TextStyle<'_>) {
        self.calls.push(Call::Text {
            text: text.to_owned(),
            at,
        });
    }

    fn polyline(&mut self, points: &[DVec2], color: &str, _width: f64) {
        self.calls.push(Call::Polyline {
            points: points.to_vec(),
            color: color.to_owned(),
        });
    }
}

pub const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
