/// Input event types the engine understands.
/// Pointer coordinates are in CSS pixels relative to the viewport's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed at (x, y). `button` follows DOM numbering (0 = primary).
    PointerDown { x: f32, y: f32, button: u32 },
    /// A button was released at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled; negative `delta_y` scrolls up.
    Wheel { delta_y: f32 },
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
}
