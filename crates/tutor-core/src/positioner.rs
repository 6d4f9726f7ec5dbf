//! Floating avatar positioner — a two-state (idle/dragging) gesture machine.
//!
//! Pure: the UI layer feeds pointer events in and reads the clamped
//! position back out. A gesture that never travels past the drag threshold
//! ends as a `Click` (opens the chat); anything further is a `Drag`.

use tutor_types::config::AvatarConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// How a pointer gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// No movement past the threshold — open the conversation view
    Click,
    /// The marker was dragged; do not open the chat
    Drag,
}

pub struct AvatarPositioner {
    config: AvatarConfig,
    position: Point,
    drag: Option<DragState>,
}

struct DragState {
    /// Pointer-to-marker offset recorded at pointer-down
    offset: Point,
    /// Pointer position at pointer-down, for the travel threshold
    origin: Point,
    moved: bool,
}

impl AvatarPositioner {
    pub fn new(config: AvatarConfig, viewport: Viewport) -> Self {
        let mut positioner = Self {
            config,
            position: Point::new(0.0, 0.0),
            drag: None,
        };
        positioner.position = positioner.anchored_default(viewport);
        positioner
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn marker_size(&self) -> f32 {
        self.config.marker_size
    }

    /// idle → dragging. Records the pointer-to-marker offset and resets the
    /// drag-occurred flag.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag = Some(DragState {
            offset: Point::new(pointer.x - self.position.x, pointer.y - self.position.y),
            origin: pointer,
            moved: false,
        });
    }

    /// While dragging: position = pointer − offset, clamped to the viewport.
    /// No-op when idle.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Viewport) {
        let threshold = self.config.drag_threshold_px;
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        if !drag.moved {
            let dx = pointer.x - drag.origin.x;
            let dy = pointer.y - drag.origin.y;
            if (dx * dx + dy * dy).sqrt() > threshold {
                drag.moved = true;
            }
        }

        let raw = Point::new(pointer.x - drag.offset.x, pointer.y - drag.offset.y);
        self.position = Self::clamp(raw, viewport, self.config.marker_size);
    }

    /// dragging → idle. `None` when no gesture was active.
    pub fn pointer_up(&mut self) -> Option<GestureEnd> {
        self.drag.take().map(|drag| {
            if drag.moved {
                GestureEnd::Drag
            } else {
                GestureEnd::Click
            }
        })
    }

    /// Placement policy on viewport resize. Only applies while idle; an
    /// active drag keeps following the pointer.
    pub fn viewport_resized(&mut self, viewport: Viewport) {
        if self.drag.is_none() {
            self.position = self.anchored_default(viewport);
        }
    }

    /// Bottom-right anchor on wide viewports, a small inset on narrow ones.
    fn anchored_default(&self, viewport: Viewport) -> Point {
        let c = &self.config;
        let raw = if viewport.width >= c.wide_breakpoint {
            Point::new(viewport.width - c.wide_inset, viewport.height - c.wide_inset)
        } else {
            Point::new(
                c.narrow_max.min(viewport.width - c.narrow_inset),
                c.narrow_max.min(viewport.height - c.narrow_inset),
            )
        };
        Self::clamp(raw, viewport, c.marker_size)
    }

    fn clamp(p: Point, viewport: Viewport, marker: f32) -> Point {
        let max_x = (viewport.width - marker).max(0.0);
        let max_y = (viewport.height - marker).max(0.0);
        Point::new(p.x.clamp(0.0, max_x), p.y.clamp(0.0, max_y))
    }
}
