#![forbid(unsafe_code)]

//! Read-only view over the engine's bit-packed cell buffer.
//!
//! The simulation engine stores `width * height` booleans packed eight
//! to a byte, least-significant bit first. [`GridView`] decodes single
//! cells out of a borrowed `&[u8]` without copying; the borrow is
//! re-resolved by the caller on every render pass because any engine
//! mutation may reallocate the buffer.

/// Decoder for a `width × height` grid packed one bit per cell.
///
/// Holds only the dimensions; the buffer itself is passed into every
/// query so callers cannot accidentally cache a stale snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    width: u32,
    height: u32,
}

impl GridView {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Linear cell index in row-major order.
    #[must_use]
    pub const fn index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Number of bytes a full grid snapshot must contain.
    #[must_use]
    pub const fn packed_len(&self) -> usize {
        ((self.width as usize) * (self.height as usize)).div_ceil(8)
    }

    /// Decode one cell from a packed snapshot.
    ///
    /// Bit 0 of each byte is the least-significant bit, matching the
    /// byte order the engine produces. A buffer too short for the
    /// computed byte index reads as dead: this is queried inside the
    /// render loop, where aborting a frame would be worse than drawing
    /// a dead cell.
    #[must_use]
    pub fn is_alive(&self, cells: &[u8], row: u32, col: u32) -> bool {
        let idx = self.index(row, col);
        let byte = idx / 8;
        let mask = 1u8 << (idx % 8);
        match cells.get(byte) {
            Some(b) => (b & mask) != 0,
            None => {
                crate::debug!(
                    "cell buffer too short: {} bytes, cell ({row}, {col}) needs byte {byte}",
                    cells.len()
                );
                false
            }
        }
    }
}
