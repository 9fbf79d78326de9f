#![forbid(unsafe_code)]

//! Pixel arithmetic for the grid canvas.
//!
//! One source of truth for the layout both halves of the viewer rely
//! on: the renderer uses it to size the canvas and place strokes and
//! fills, and the click handler uses it to map pointer coordinates back
//! to a cell. Every cell is `cell_size` pixels square with a 1px grid
//! line on each side, so each axis occupies `(cell_size + 1) * count + 1`
//! pixels.

/// On-screen bounding rectangle of the canvas, in client (CSS) pixels.
///
/// Mirrors the fields of a DOM `DOMRect`; the web crate fills this from
/// `getBoundingClientRect()`. The rect's size can differ from the
/// canvas's logical pixel size when CSS scales the element, which is
/// why hit-testing goes through [`GridGeometry::cell_at_client`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Immutable layout of a rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    width: u32,
    height: u32,
    cell_size: u32,
}

impl GridGeometry {
    #[must_use]
    pub const fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Cell pitch: one cell plus one grid line.
    #[must_use]
    const fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Canvas width in logical pixels, including the outer border line.
    #[must_use]
    pub const fn pixel_width(&self) -> u32 {
        self.pitch() * self.width + 1
    }

    /// Canvas height in logical pixels, including the outer border line.
    #[must_use]
    pub const fn pixel_height(&self) -> u32 {
        self.pitch() * self.height + 1
    }

    /// X coordinate of the `i`-th vertical grid line, `i in 0..=width`.
    #[must_use]
    pub fn vertical_line_x(&self, i: u32) -> f64 {
        f64::from(i * self.pitch() + 1)
    }

    /// Y coordinate of the `j`-th horizontal grid line, `j in 0..=height`.
    #[must_use]
    pub fn horizontal_line_y(&self, j: u32) -> f64 {
        f64::from(j * self.pitch() + 1)
    }

    /// Top-left corner of a cell's fill rectangle.
    #[must_use]
    pub fn cell_origin(&self, row: u32, col: u32) -> (f64, f64) {
        (
            f64::from(col * self.pitch() + 1),
            f64::from(row * self.pitch() + 1),
        )
    }

    /// Map a point in canvas-local logical pixels to `(row, col)`.
    ///
    /// Always in range: clicks on the outer border or past the last
    /// grid line clamp to the nearest cell.
    #[must_use]
    pub fn cell_at(&self, canvas_x: f64, canvas_y: f64) -> (u32, u32) {
        let pitch = f64::from(self.pitch());
        let row = (canvas_y / pitch).floor();
        let col = (canvas_x / pitch).floor();
        (
            clamp_axis(row, self.height),
            clamp_axis(col, self.width),
        )
    }

    /// Map a client-coordinate pointer position to `(row, col)`.
    ///
    /// `rect` is the canvas's on-screen bounding rect; the ratio between
    /// the canvas's logical pixel size and the rect corrects for CSS
    /// scaling before the cell lookup.
    #[must_use]
    pub fn cell_at_client(&self, client_x: f64, client_y: f64, rect: SurfaceRect) -> (u32, u32) {
        let scale_x = scale_factor(f64::from(self.pixel_width()), rect.width);
        let scale_y = scale_factor(f64::from(self.pixel_height()), rect.height);
        let canvas_x = (client_x - rect.left) * scale_x;
        let canvas_y = (client_y - rect.top) * scale_y;
        self.cell_at(canvas_x, canvas_y)
    }
}

fn scale_factor(logical: f64, rendered: f64) -> f64 {
    if rendered > 0.0 { logical / rendered } else { 1.0 }
}

fn clamp_axis(value: f64, count: u32) -> u32 {
    let max = count.saturating_sub(1);
    if value.is_nan() || value < 0.0 {
        0
    } else if value >= f64::from(max) {
        max
    } else {
        value as u32
    }
}
