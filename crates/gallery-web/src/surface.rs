//! `Surface` backed by a `CanvasRenderingContext2d`.

use fnv::FnvHashMap;
use gallery_core::{ScreenRect, Surface, TextAlign, TextStyle, Viewport};
use glam::DVec2;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    /// Thumbnails by URL; an entry exists from the first request on, loaded
    /// or not.
    images: FnvHashMap<String, web::HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            images: FnvHashMap::default(),
        }
    }

    pub fn viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
        Viewport::new(canvas.width() as f64, canvas.height() as f64)
    }

    fn image(&mut self, url: &str) -> Option<&web::HtmlImageElement> {
        if !self.images.contains_key(url) {
            let img = match web::HtmlImageElement::new() {
                Ok(img) => img,
                Err(e) => {
                    log::warn!("[thumb] cannot create image: {:?}", e);
                    return None;
                }
            };
            img.set_src(url);
            log::debug!("[thumb] loading {url}");
            self.images.insert(url.to_owned(), img);
        }
        self.images.get(url)
    }
}

impl Surface for CanvasSurface {
    fn fill_vertical_gradient(&mut self, viewport: Viewport, stops: &[(f64, &str)]) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, viewport.height);
        for (offset, color) in stops {
            let _ = gradient.add_color_stop(*offset as f32, color);
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: &str, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: ScreenRect, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn draw_image(&mut self, url: &str, rect: ScreenRect) -> bool {
        let ctx = self.ctx.clone();
        let Some(img) = self.image(url) else {
            return false;
        };
        if !img.complete() || img.natural_width() == 0 {
            return false;
        }
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, rect.x, rect.y, rect.width, rect.height)
            .is_ok()
    }

    fn text(&mut self, text: &str, at: DVec2, style: TextStyle<'_>) {
        self.ctx.set_font(&format!("{}px Arial", style.font_px.round()));
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        // anchors are vertical centres
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn polyline(&mut self, points: &[DVec2], color: &str, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.stroke();
    }
}
