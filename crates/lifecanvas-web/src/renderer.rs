#![forbid(unsafe_code)]

//! Canvas2D grid renderer.
//!
//! Draws the whole grid every frame: first the grid lines as one
//! batched path, then a `cell_size × cell_size` fill per cell in
//! row-major order, with the fill color supplied by the caller so the
//! renderer stays decoupled from wherever cell state lives. No dirty
//! tracking — grids are small and a full redraw fits the frame budget
//! comfortably.
//!
//! Construction fails fast: a missing canvas element or a refused 2d
//! context is an [`AppError`] at mount time, not a silent blank screen.

use crate::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use crate::error::AppError;

/// Fill and stroke colors, fixed per renderer instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub grid_color: String,
    pub alive_color: String,
    pub dead_color: String,
}

impl Theme {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            grid_color: config.grid_color.clone(),
            alive_color: config.alive_color.clone(),
            dead_color: config.dead_color.clone(),
        }
    }

    /// Fill color for one cell state.
    #[must_use]
    pub fn cell_color(&self, alive: bool) -> &str {
        if alive {
            &self.alive_color
        } else {
            &self.dead_color
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod canvas {
    use super::*;
    use lifecanvas_core::{GridGeometry, SurfaceRect};
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    /// Owns the canvas element and its 2d context.
    pub struct CanvasRenderer {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        geometry: GridGeometry,
        theme: Theme,
    }

    impl CanvasRenderer {
        /// Look up the canvas, size it to the grid, and grab a context.
        pub fn new(
            document: &Document,
            selector: &str,
            geometry: GridGeometry,
            theme: Theme,
        ) -> Result<Self, AppError> {
            let element = document
                .query_selector(selector)
                .map_err(|_| AppError::InvalidConfig(format!("bad selector {selector:?}")))?
                .ok_or_else(|| AppError::MissingElement {
                    selector: selector.to_string(),
                })?;
            let canvas: HtmlCanvasElement =
                element.dyn_into().map_err(|_| AppError::NotACanvas {
                    selector: selector.to_string(),
                })?;

            canvas.set_width(geometry.pixel_width());
            canvas.set_height(geometry.pixel_height());

            let ctx = canvas
                .get_context("2d")
                .map_err(|_| AppError::MissingContext)?
                .ok_or(AppError::MissingContext)?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| AppError::MissingContext)?;

            Ok(Self {
                canvas,
                ctx,
                geometry,
                theme,
            })
        }

        #[must_use]
        pub fn geometry(&self) -> GridGeometry {
            self.geometry
        }

        #[must_use]
        pub fn theme(&self) -> &Theme {
            &self.theme
        }

        #[must_use]
        pub fn canvas(&self) -> &HtmlCanvasElement {
            &self.canvas
        }

        /// Stroke all grid lines as a single batched path.
        pub fn draw_grid(&self) {
            let g = &self.geometry;
            let right = f64::from(g.pixel_width());
            let bottom = f64::from(g.pixel_height());

            self.ctx.begin_path();
            self.ctx.set_stroke_style_str(&self.theme.grid_color);

            for i in 0..=g.width() {
                let x = g.vertical_line_x(i);
                self.ctx.move_to(x, 0.0);
                self.ctx.line_to(x, bottom);
            }
            for j in 0..=g.height() {
                let y = g.horizontal_line_y(j);
                self.ctx.move_to(0.0, y);
                self.ctx.line_to(right, y);
            }

            self.ctx.stroke();
        }

        /// Fill every cell in row-major order; `color_of` decides each
        /// cell's fill.
        pub fn draw_cells<'a, F>(&self, color_of: F)
        where
            F: Fn(u32, u32) -> &'a str,
        {
            let g = &self.geometry;
            let size = f64::from(g.cell_size());
            for row in 0..g.height() {
                for col in 0..g.width() {
                    let (x, y) = g.cell_origin(row, col);
                    self.ctx.set_fill_style_str(color_of(row, col));
                    self.ctx.fill_rect(x, y, size, size);
                }
            }
        }

        /// Full redraw: grid lines, then cells.
        pub fn draw<'a, F>(&self, color_of: F)
        where
            F: Fn(u32, u32) -> &'a str,
        {
            self.draw_grid();
            self.draw_cells(color_of);
        }

        /// Current on-screen bounds of the canvas, in client pixels.
        #[must_use]
        pub fn surface_rect(&self) -> SurfaceRect {
            let rect = self.canvas.get_bounding_client_rect();
            SurfaceRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            }
        }

        /// Map a pointer position to the cell under it, clamped into
        /// the grid even for border clicks.
        #[must_use]
        pub fn cell_at_client(&self, client_x: f64, client_y: f64) -> (u32, u32) {
            self.geometry
                .cell_at_client(client_x, client_y, self.surface_rect())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_picks_fill_by_cell_state() {
        let theme = Theme::from_config(&AppConfig::default());
        assert_eq!(theme.cell_color(true), "#000000");
        assert_eq!(theme.cell_color(false), "#FFFFFF");
        assert_eq!(theme.grid_color, "#CCCCCC");
    }
}
