//! Sprite animation
//!
//! An [`Animation`] cycles through frame rectangles on a fixed per-frame
//! duration. Frames are normalized texture-space rectangles; [`SpriteSheet`]
//! converts pixel-space sprite-sheet cells into them once at scene setup.

use serde::{Serialize, Deserialize};

use crate::assets::TextureInfo;

/// Normalized texture-space rectangle selecting one sprite-sheet cell
///
/// `x`/`y` are the UV offset of the cell's top-left corner (v measured from
/// the top row), `w`/`h` its UV scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    /// U offset
    pub x: f32,
    /// V offset
    pub y: f32,
    /// U scale
    pub w: f32,
    /// V scale
    pub h: f32,
}

impl FrameRect {
    /// The whole texture
    pub const FULL: Self = Self { x: 0.0, y: 0.0, w: 1.0, h: 1.0 };

    /// Create a frame from normalized coordinates
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Convert a pixel-space rectangle on a `sheet_width` x `sheet_height` sheet
    ///
    /// A sheet with a zero dimension cannot be normalized; the full texture is
    /// returned instead.
    pub fn from_pixels(x: u32, y: u32, w: u32, h: u32, sheet_width: u32, sheet_height: u32) -> Self {
        if sheet_width == 0 || sheet_height == 0 {
            log::warn!("Sprite sheet has zero size ({}x{}), using full-texture frame", sheet_width, sheet_height);
            return Self::FULL;
        }
        let sw = sheet_width as f32;
        let sh = sheet_height as f32;
        Self {
            x: x as f32 / sw,
            y: y as f32 / sh,
            w: w as f32 / sw,
            h: h as f32 / sh,
        }
    }
}

impl Default for FrameRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Uniform grid of cells on a sprite sheet, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Sheet width in pixels
    pub width: u32,
    /// Sheet height in pixels
    pub height: u32,
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
}

impl SpriteSheet {
    /// Describe a sheet with the given pixel size and cell size
    pub fn new(width: u32, height: u32, cell_width: u32, cell_height: u32) -> Self {
        Self { width, height, cell_width, cell_height }
    }

    /// Describe a registered texture cut into cells
    pub fn from_texture(info: &TextureInfo, cell_width: u32, cell_height: u32) -> Self {
        Self::new(info.width, info.height, cell_width, cell_height)
    }

    /// Normalized rectangle of the cell at `column`, `row`
    ///
    /// Pixel offsets saturate at `u32::MAX`; such cells lie off the sheet.
    pub fn cell(&self, column: u32, row: u32) -> FrameRect {
        FrameRect::from_pixels(
            column.saturating_mul(self.cell_width),
            row.saturating_mul(self.cell_height),
            self.cell_width,
            self.cell_height,
            self.width,
            self.height,
        )
    }

    /// `count` consecutive cells of one row, starting at column `first`
    ///
    /// Columns past `u32::MAX` are dropped.
    pub fn row(&self, row: u32, first: u32, count: u32) -> Vec<FrameRect> {
        (first..first.saturating_add(count)).map(|column| self.cell(column, row)).collect()
    }
}

/// Frame clock over a sequence of frame rectangles
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<FrameRect>,
    frame_duration: f32,
    current_frame: usize,
    timer: f32,
}

impl Animation {
    /// Create an animation showing each frame for `frame_duration` seconds
    ///
    /// An empty frame list forces the duration to zero; the animation then
    /// shows the full texture and never advances.
    pub fn new(frames: Vec<FrameRect>, frame_duration: f32) -> Self {
        let frame_duration = if frames.is_empty() {
            log::warn!("Animation created without frames, rendering full texture");
            0.0
        } else {
            if frame_duration <= 0.0 {
                log::warn!("Animation frame duration {} is not positive, animation is static", frame_duration);
            }
            frame_duration
        };

        Self {
            frames,
            frame_duration,
            current_frame: 0,
            timer: 0.0,
        }
    }

    /// Advance the clock by `delta_time` seconds
    ///
    /// Skips as many frames as fit in the accumulated time, so a long stall
    /// lands on the right frame instead of lagging behind. Non-finite deltas
    /// are ignored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, delta_time: f32) {
        if self.frames.is_empty() || self.frame_duration <= 0.0 || !delta_time.is_finite() {
            return;
        }

        self.timer += delta_time;
        if self.timer < self.frame_duration {
            return;
        }

        // Closed form in f64: repeated f32 subtraction stalls once the
        // timer's ulp exceeds the frame duration
        let duration = f64::from(self.frame_duration);
        let elapsed = f64::from(self.timer);
        let remainder = elapsed.rem_euclid(duration);
        let steps = ((elapsed - remainder) / duration).round();
        let len = self.frames.len();

        let skipped = steps.rem_euclid(len as f64) as usize;
        self.current_frame = (self.current_frame + skipped) % len;
        self.timer = remainder as f32;

        // Remainder can round up to a full frame in f32
        if self.timer >= self.frame_duration {
            self.timer = 0.0;
            self.current_frame = (self.current_frame + 1) % len;
        }
    }

    /// Rectangle of the frame currently shown
    pub fn current_frame(&self) -> FrameRect {
        self.frames.get(self.current_frame).copied().unwrap_or(FrameRect::FULL)
    }

    /// Back to the first frame with an empty accumulator
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.timer = 0.0;
    }

    /// Index of the frame currently shown
    pub fn frame_index(&self) -> usize {
        self.current_frame
    }

    /// Time accumulated toward the next frame
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Seconds each frame stays on screen
    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// All frames in playback order
    pub fn frames(&self) -> &[FrameRect] {
        &self.frames
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn four_frames() -> Vec<FrameRect> {
        SpriteSheet::new(128, 32, 32, 32).row(0, 0, 4)
    }

    #[test]
    fn test_skips_multiple_frames_in_one_step() {
        let mut anim = Animation::new(four_frames(), 0.1);
        anim.advance(0.25);

        assert_eq!(anim.frame_index(), 2);
        assert_abs_diff_eq!(anim.timer(), 0.05, epsilon = 1e-5);
    }

    #[test]
    fn test_wraps_around() {
        let mut anim = Animation::new(four_frames(), 0.1);
        for _ in 0..5 {
            anim.advance(0.1);
        }
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_short_steps_accumulate() {
        let mut anim = Animation::new(four_frames(), 0.1);
        anim.advance(0.04);
        anim.advance(0.04);
        assert_eq!(anim.frame_index(), 0);

        anim.advance(0.04);
        assert_eq!(anim.frame_index(), 1);
        assert_abs_diff_eq!(anim.timer(), 0.02, epsilon = 1e-5);
    }

    #[test]
    fn test_current_frame_follows_index() {
        let frames = four_frames();
        let mut anim = Animation::new(frames.clone(), 0.1);
        anim.advance(0.1);
        assert_eq!(anim.current_frame(), frames[1]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut anim = Animation::new(four_frames(), 0.1);
        anim.advance(0.37);
        anim.reset();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.timer(), 0.0);

        anim.reset();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.timer(), 0.0);
        assert_eq!(anim.frame_count(), 4);
        assert_relative_eq!(anim.frame_duration(), 0.1);
    }

    #[test]
    fn test_empty_animation_is_static_full_frame() {
        let mut anim = Animation::new(Vec::new(), 0.1);
        assert_eq!(anim.frame_duration(), 0.0);

        anim.advance(10.0);
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.timer(), 0.0);
        assert_eq!(anim.current_frame(), FrameRect::FULL);
    }

    #[test]
    fn test_non_positive_duration_never_advances() {
        let mut anim = Animation::new(four_frames(), 0.0);
        anim.advance(1.0);
        assert_eq!(anim.frame_index(), 0);

        let mut anim = Animation::new(four_frames(), -0.5);
        anim.advance(1.0);
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.current_frame(), four_frames()[0]);
    }

    #[test]
    fn test_single_step_wraps_past_last_frame() {
        let mut anim = Animation::new(four_frames(), 0.1);
        anim.advance(0.45);

        assert_eq!(anim.frame_index(), 0);
        assert_abs_diff_eq!(anim.timer(), 0.05, epsilon = 1e-5);
    }

    #[test]
    fn test_long_stall_with_short_frames_terminates() {
        let mut anim = Animation::new(four_frames(), 1e-4);
        anim.advance(2100.0);

        assert!(anim.frame_index() < 4);
        assert!(anim.timer() >= 0.0 && anim.timer() < 1e-4);
    }

    #[test]
    fn test_huge_delta_terminates() {
        let mut anim = Animation::new(four_frames(), 0.1);
        anim.advance(2.2e6);

        assert!(anim.frame_index() < 4);
        assert!(anim.timer() >= 0.0 && anim.timer() < 0.1);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut anim = Animation::new(four_frames(), 0.1);
        anim.advance(0.15);

        anim.advance(f32::INFINITY);
        anim.advance(f32::NAN);
        assert_eq!(anim.frame_index(), 1);
        assert_abs_diff_eq!(anim.timer(), 0.05, epsilon = 1e-5);

        // Clock still runs afterwards
        anim.advance(0.06);
        assert_eq!(anim.frame_index(), 2);
    }

    #[test]
    fn test_pixel_to_uv_conversion() {
        let frame = FrameRect::from_pixels(32, 16, 32, 16, 128, 64);
        assert_relative_eq!(frame.x, 0.25);
        assert_relative_eq!(frame.y, 0.25);
        assert_relative_eq!(frame.w, 0.25);
        assert_relative_eq!(frame.h, 0.25);
    }

    #[test]
    fn test_zero_sheet_falls_back_to_full() {
        assert_eq!(FrameRect::from_pixels(0, 0, 16, 16, 0, 64), FrameRect::FULL);
    }

    #[test]
    fn test_sheet_row_cells() {
        let sheet = SpriteSheet::new(128, 64, 32, 32);
        let frames = sheet.row(1, 1, 2);

        assert_eq!(frames.len(), 2);
        assert_relative_eq!(frames[0].x, 0.25);
        assert_relative_eq!(frames[0].y, 0.5);
        assert_relative_eq!(frames[1].x, 0.5);
        assert_relative_eq!(frames[1].h, 0.5);
    }

    #[test]
    fn test_far_off_sheet_indices_saturate() {
        let sheet = SpriteSheet::new(128, 64, 32, 32);

        let frames = sheet.row(u32::MAX, u32::MAX - 1, 5);
        assert_eq!(frames.len(), 1);

        let far = sheet.cell(u32::MAX, 0);
        assert_relative_eq!(far.x, u32::MAX as f32 / 128.0);
    }
}
