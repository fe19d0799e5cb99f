//! Input abstraction.
//!
//! The host decides once, at startup, whether it delivers mouse events or
//! multi-touch events. Everything downstream works with `PointerId` keys
//! produced by `InputMode::key`, so the drag logic is written once.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Mouse-style input: one drag at a time.
    Pointer,
    /// One drag per active touch point.
    MultiTouch,
}

impl InputMode {
    pub fn from_touch_support(has_touch: bool) -> Self {
        if has_touch {
            InputMode::MultiTouch
        } else {
            InputMode::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        self == InputMode::MultiTouch
    }

    /// Slot a pointer occupies. In pointer mode every pointer shares the
    /// single mouse slot.
    pub fn key(self, pointer: PointerId) -> PointerId {
        match self {
            InputMode::Pointer => PointerId::Mouse,
            InputMode::MultiTouch => pointer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    /// `Touch.identifier` of the browser touch record
    Touch(i32),
}

/// A pointer position in page pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer: PointerId,
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(pointer: PointerId, x: f32, y: f32) -> Self {
        Self { pointer, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_mode_collapses_keys() {
        let mode = InputMode::from_touch_support(false);
        assert_eq!(mode, InputMode::Pointer);
        assert_eq!(mode.key(PointerId::Touch(3)), PointerId::Mouse);
        assert_eq!(mode.key(PointerId::Mouse), PointerId::Mouse);
    }

    #[test]
    fn touch_mode_keeps_identifiers() {
        let mode = InputMode::from_touch_support(true);
        assert!(mode.is_touch());
        assert_eq!(mode.key(PointerId::Touch(3)), PointerId::Touch(3));
    }
}
