use crate::foundation::core::Point;

/// Pointer notification delivered to the chart, in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved onto the overlay.
    Enter(Point),
    /// The pointer moved off the overlay (or left the surface).
    Leave,
    /// Mouse movement over the overlay.
    Move(Point),
    /// Touch movement over the overlay.
    TouchMove(Point),
}

/// Raw host input in surface coordinates, before hit-testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawPointer {
    Mouse(Point),
    Touch(Point),
    /// The pointer left the surface entirely.
    Exit,
}
