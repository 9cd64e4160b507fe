/// ## Offscreen pixel surface
///
/// The graphics builtins draw into this buffered RGB framebuffer with
/// a one-pixel pen and a solid brush. Repaint is a separate step, so
/// a windowed host can blit the finished frame; the console host has
/// nowhere to blit and leaves the buffer as the program's scratch.

type Rgb = (u8, u8, u8);

pub struct Surface {
    width: i32,
    height: i32,
    pen: Rgb,
    brush: Rgb,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Surface {
        let width = width.max(1);
        let height = height.max(1);
        Surface {
            width,
            height,
            pen: (255, 255, 255),
            brush: (0, 0, 0),
            pixels: vec![(0, 0, 0); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_pen(&mut self, pen: Rgb) {
        self.pen = pen;
    }

    pub fn set_brush(&mut self, brush: Rgb) {
        self.brush = brush;
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgb) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.plot(x, y, color);
        }
    }

    pub fn clear(&mut self) {
        let brush = self.brush;
        for pixel in self.pixels.iter_mut() {
            *pixel = brush;
        }
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32) {
        self.plot(x, y, self.pen);
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let pen = self.pen;
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.plot(x, y, pen);
            if x == x2 && y == y2 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += sx;
            }
            if doubled <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool) {
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));
        if filled {
            let brush = self.brush;
            for y in top..=bottom {
                self.hline(left, right, y, brush);
            }
        }
        let pen = self.pen;
        self.hline(left, right, top, pen);
        self.hline(left, right, bottom, pen);
        for y in top..=bottom {
            self.plot(left, y, pen);
            self.plot(right, y, pen);
        }
    }

    pub fn draw_ellipse(&mut self, cx: i32, cy: i32, radius: i32, filled: bool) {
        if radius < 0 {
            return;
        }
        if filled {
            let brush = self.brush;
            for dy in -radius..=radius {
                let dx = (((radius * radius - dy * dy) as f64).sqrt()) as i32;
                self.hline(cx - dx, cx + dx, cy + dy, brush);
            }
        }
        let pen = self.pen;
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            self.plot(cx + x, cy + y, pen);
            self.plot(cx + y, cy + x, pen);
            self.plot(cx - y, cy + x, pen);
            self.plot(cx - x, cy + y, pen);
            self.plot(cx - x, cy - y, pen);
            self.plot(cx - y, cy - x, pen);
            self.plot(cx + y, cy - x, pen);
            self.plot(cx + x, cy - y, pen);
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}
