/// Pointer input the controller understands, in viewport-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f32, y: f32 },
    /// Pointer moved, with or without a button held
    Move { x: f32, y: f32 },
    /// Primary button released
    Up,
}
