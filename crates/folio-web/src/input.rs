use folio_core::PointerOffset;
use web_sys as web;

// Canvas backing store never exceeds 2 device pixels per CSS pixel.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Latest page scroll offset, written by the scroll listener.
#[derive(Default, Clone, Copy)]
pub struct ScrollState {
    pub offset: f32,
}

/// Latest pointer position relative to the viewport centre.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub offset: PointerOffset,
}

/// Pointer drag tracking for the orbit viewer.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.active = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the previous sample, or `None` when not dragging.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store pixel size for a canvas of `css_width` x `css_height`.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = capped_pixel_ratio(device_pixel_ratio);
    let w = (css_width.max(0.0) * ratio) as u32;
    let h = (css_height.max(0.0) * ratio) as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn pointer_offset(ev: &web::MouseEvent, window: &web::Window) -> PointerOffset {
    let (w, h) = viewport_size(window);
    PointerOffset::from_client(ev.client_x() as f32, ev.client_y() as f32, w as f32, h as f32)
}
