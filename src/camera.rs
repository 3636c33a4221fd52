use crate::quadtree::Aabb;
use crate::quadtree::Point;
use crate::quadtree::QuadTree;
use crate::quadtree::Spatial;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Draws a window of world space into a braille framebuffer.
pub struct Camera {
    /// The pixel buffer, row major, top row first
    cb: Vec<bool>,

    /// The frame buffer
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,

    /// Region of world space shown
    view: Aabb,
}

impl Camera {
    /// A `w` by `h` pixel camera looking at `view`. Both dimensions must be at least 2.
    pub fn new(w: usize, h: usize, view: Aabb) -> Self {
        assert!(w > 1 && h > 1, "camera must be at least 2x2 pixels");

        // Each braille character holds 2x4 pixels and takes 3 bytes, each row ends in a newline.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
            view,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn view(&self) -> &Aabb {
        &self.view
    }

    /// Move the camera by `(dx, dy)` world units.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.view = self.view.translated(dx, dy);
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Outline the part of `rect` that is in view.
    pub fn draw_outline(&mut self, rect: &Aabb) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };

        for x in x0..=x1 {
            self.draw_pixel(x, y0);
            self.draw_pixel(x, y1);
        }

        for y in y0..=y1 {
            self.draw_pixel(x0, y);
            self.draw_pixel(x1, y);
        }
    }

    /// Fill the part of `rect` that is in view.
    pub fn fill(&mut self, rect: &Aabb) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.draw_pixel(x, y);
            }
        }
    }

    /// Draw the outline of every node and fill every object in view. Returns the number of
    /// objects drawn.
    pub fn draw_tree<T: Spatial>(&mut self, tree: &QuadTree<T>) -> usize {
        for node in tree.nodes() {
            self.draw_outline(node.bounds());
        }

        let visible = tree.get_overlapping(&self.view);

        for &id in &visible {
            if let Some(object) = tree.get(id) {
                self.fill(&object.bounds());
            }
        }

        visible.len()
    }

    /// Reset the pixel buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = (n % self.w, n / self.w);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    /// Pixel coordinates of a world point. The world `y` axis points up, pixel rows go down.
    fn to_pixel(&self, p: Point) -> (usize, usize) {
        let fx = (p.x - self.view.min.x) / self.view.width();
        let fy = (self.view.max.y - p.y) / self.view.height();

        let x = (fx * (self.w - 1) as f32).round() as usize;
        let y = (fy * (self.h - 1) as f32).round() as usize;

        (x.min(self.w - 1), y.min(self.h - 1))
    }

    /// Pixel extents `(x0, y0, x1, y1)` of `rect` cut down to the view.
    fn clip(&self, rect: &Aabb) -> Option<(usize, usize, usize, usize)> {
        if !self.view.intersects(rect) {
            return None;
        }

        let min = Point::new(
            rect.min.x.max(self.view.min.x),
            rect.max.y.min(self.view.max.y),
        );
        let max = Point::new(
            rect.max.x.min(self.view.max.x),
            rect.min.y.max(self.view.min.y),
        );

        let (x0, y0) = self.to_pixel(min);
        let (x1, y1) = self.to_pixel(max);

        Some((x0, y0, x1, y1))
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Camera;
    use crate::quadtree::Aabb;
    use crate::quadtree::Entry;
    use crate::quadtree::QuadTree;

    #[test]
    fn empty_frame() {
        let mut cam = Camera::new(4, 4, Aabb::new(0., 0., 4., 4.));

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn fill_whole_view() {
        let mut cam = Camera::new(2, 4, Aabb::new(0., 0., 1., 1.));

        cam.fill(&Aabb::new(-5., -5., 5., 5.));

        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn world_y_points_up() {
        let mut cam = Camera::new(2, 4, Aabb::new(0., 0., 1., 3.));

        // bottom-left world corner is the bottom-left dot
        cam.fill(&Aabb::new(0., 0., 0., 0.));

        assert_eq!(cam.render(), "\u{2840}\n");
    }

    #[test]
    fn off_screen_is_ignored() {
        let mut cam = Camera::new(4, 4, Aabb::new(0., 0., 4., 4.));

        cam.draw_outline(&Aabb::new(10., 10., 20., 20.));
        cam.pan(100., 0.);
        cam.fill(&Aabb::new(0., 0., 4., 4.));

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn draw_tree_counts_visible() {
        let mut tree = QuadTree::new(Aabb::new(0., 0., 16., 16.), 2);
        tree.insert(Entry::new(Aabb::new(1., 1., 2., 2.), ())).unwrap();
        tree.insert(Entry::new(Aabb::new(13., 13., 14., 14.), ())).unwrap();

        let mut cam = Camera::new(16, 16, Aabb::new(0., 0., 8., 8.));

        assert_eq!(cam.draw_tree(&tree), 1);
        cam.reset();
        assert_eq!(cam.render().chars().filter(|&c| c == '\u{2800}').count(), 32);
    }
}
