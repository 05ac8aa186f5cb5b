/// Scroll offsets of a content region inside a fixed-size viewport, in display cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub x: u32,
    pub y: u32,
    pub viewport_w: u16,
    pub viewport_h: u16,
    pub content_w: u32,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, w: u16, h: u16) {
        self.viewport_w = w;
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, w: u32, h: u32) {
        self.content_w = w;
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.x = self.x.min(self.max_x());
        self.y = self.y.min(self.max_y());
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        self.y = (i64::from(self.y) + i64::from(delta)).clamp(0, i64::from(self.max_y())) as u32;
    }

    pub fn page_down(&mut self) {
        self.scroll_y_by(i32::from(self.viewport_h.saturating_sub(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_y_by(-i32::from(self.viewport_h.saturating_sub(1)));
    }

    /// Scrolls the minimum amount that brings the cell `(x, y)` into view.
    pub fn reveal(&mut self, x: u32, y: u32) {
        let h = u32::from(self.viewport_h);
        let w = u32::from(self.viewport_w);
        if y < self.y {
            self.y = y;
        } else if y >= self.y.saturating_add(h) {
            self.y = y.saturating_sub(h.saturating_sub(1));
        }
        if x < self.x {
            self.x = x;
        } else if x >= self.x.saturating_add(w) {
            self.x = x.saturating_sub(w.saturating_sub(1));
        }
        self.clamp();
    }

    pub fn scrolls_vertically(&self) -> bool {
        self.content_h > u32::from(self.viewport_h)
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(u32::from(self.viewport_h))
    }

    // One extra column past the widest line keeps an end-of-line cursor reachable.
    fn max_x(&self) -> u32 {
        self.content_w
            .saturating_add(1)
            .saturating_sub(u32::from(self.viewport_w))
    }
}
