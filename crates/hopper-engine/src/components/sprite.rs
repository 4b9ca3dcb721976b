/// Opaque handle to a texture sheet owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetId(pub u32);

/// Source rectangle in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SourceRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A sprite sheet laid out as a grid of equally sized frames.
///
/// `sheet` is `None` when no texture was assigned; the renderer substitutes its
/// own default in that case.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextureSheet {
    pub sheet: Option<SheetId>,
    /// Frames per row.
    pub frames_x: u32,
    /// Rows in the sheet.
    pub frames_y: u32,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl TextureSheet {
    pub fn new(sheet: Option<SheetId>, frames_x: u32, frames_y: u32, frame_width: f32, frame_height: f32) -> Self {
        Self {
            sheet,
            frames_x,
            frames_y,
            frame_width,
            frame_height,
        }
    }

    /// Frames per row, never zero.
    pub fn columns(&self) -> u32 {
        self.frames_x.max(1)
    }

    /// Rectangle for `frame` in `row`. Out-of-range frames wrap; out-of-range
    /// rows clamp to the last row.
    pub fn sample(&self, frame: u32, row: u32) -> SourceRect {
        let col = frame % self.columns();
        let row = row.min(self.frames_y.saturating_sub(1));
        SourceRect {
            x: col as f32 * self.frame_width,
            y: row as f32 * self.frame_height,
            w: self.frame_width,
            h: self.frame_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_offsets_by_frame_and_row() {
        let coins = TextureSheet::new(Some(SheetId(3)), 7, 3, 18.0, 18.0);
        assert_eq!(
            coins.sample(2, 1),
            SourceRect { x: 36.0, y: 18.0, w: 18.0, h: 18.0 }
        );
    }

    #[test]
    fn frame_wraps_and_row_clamps() {
        let sheet = TextureSheet::new(None, 4, 1, 100.0, 64.0);
        assert_eq!(sheet.sample(5, 0).x, 100.0);
        assert_eq!(sheet.sample(0, 9).y, 0.0);
    }

    #[test]
    fn empty_grid_does_not_divide_by_zero() {
        let sheet = TextureSheet::default();
        assert_eq!(sheet.sample(3, 2), SourceRect::default());
    }
}
