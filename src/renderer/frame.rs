//! Software frame buffer
//!
//! RGBA8 pixels, row-major. Every primitive clips to the buffer, and
//! translucent colors are blended over what is already there.

use bytemuck::{Pod, Zeroable};

/// An RGBA8 color, laid out to match the presented byte stream
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Source-over blend of `self` onto `dst`
    pub fn over(self, dst: Color) -> Color {
        let a = u32::from(self.a);
        let inv = 255 - a;
        let mix = |s: u8, d: u8| ((u32::from(s) * a + u32::from(d) * inv + 127) / 255) as u8;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: (a + (u32::from(dst.a) * inv + 127) / 255) as u8,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
    pub const DESK: Color = Color::rgb(255, 255, 255);
    pub const PLAYER: Color = Color::rgb(255, 0, 0);
    pub const GLOW: Color = Color::rgb(255, 0, 0);
    /// Translucent detection halo around the player
    pub const HALO: Color = Color::rgba(204, 204, 0, 137);
}

/// Owned pixel surface the scene is painted into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 bytes, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    fn blend(&mut self, i: usize, color: Color) {
        let dst = &mut self.pixels[i];
        *dst = if color.is_opaque() { color } else { color.over(*dst) };
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Set one pixel; off-screen points are dropped
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.blend(i, color);
        }
    }

    /// Fill `[x, x + w) x [y, y + h)`
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                self.blend(row + px as usize, color);
            }
        }
    }

    /// Fill the ellipse inscribed in the `w` x `h` box at `(x, y)`
    ///
    /// A pixel is inside when its centre is.
    pub fn fill_oval(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let rx = w as f32 / 2.0;
        let ry = h as f32 / 2.0;
        let cx = x as f32 + rx;
        let cy = y as f32 + ry;

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for py in y0..y1 {
            let dy = (py as f32 + 0.5 - cy) / ry;
            for px in x0..x1 {
                let dx = (px as f32 + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    let i = py as usize * self.width as usize + px as usize;
                    self.blend(i, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut frame = FrameBuffer::new(10, 10);
        frame.fill_rect(-5, 8, 8, 10, colors::DESK);
        assert_eq!(frame.get(0, 8), Some(colors::DESK));
        assert_eq!(frame.get(2, 9), Some(colors::DESK));
        assert_eq!(frame.get(3, 9), Some(colors::BACKGROUND));
        assert_eq!(frame.get(0, 7), Some(colors::BACKGROUND));
        assert_eq!(frame.get(0, 10), None);
    }

    #[test]
    fn test_fill_oval_is_round() {
        let mut frame = FrameBuffer::new(20, 20);
        frame.fill_oval(0, 0, 10, 10, colors::PLAYER);
        assert_eq!(frame.get(5, 5), Some(colors::PLAYER));
        assert_eq!(frame.get(0, 5), Some(colors::PLAYER));
        // Corners of the bounding box stay clear
        assert_eq!(frame.get(0, 0), Some(colors::BACKGROUND));
        assert_eq!(frame.get(9, 9), Some(colors::BACKGROUND));
        assert_eq!(frame.get(10, 5), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_translucent_blend() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.plot(0, 0, colors::HALO);
        let px = frame.get(0, 0).unwrap();
        // 204 * 137 / 255 rounds to 110 over black
        assert_eq!(px, Color::rgb(110, 110, 0));

        frame.plot(0, 0, colors::DESK);
        assert_eq!(frame.get(0, 0), Some(colors::DESK));
    }

    #[test]
    fn test_plot_off_screen_is_dropped() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.plot(-1, 0, colors::GLOW);
        frame.plot(4, 4, colors::GLOW);
        assert_eq!(frame, FrameBuffer::new(4, 4));
    }

    #[test]
    fn test_bytes_are_rgba() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.plot(1, 0, Color::rgba(1, 2, 3, 255));
        assert_eq!(frame.as_bytes(), &[0, 0, 0, 255, 1, 2, 3, 255]);
    }
}
