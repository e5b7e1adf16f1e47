/// Pointer and UI input, already converted to world coordinates by the bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Finger or mouse button went down.
    PointerDown { x: f32, y: f32 },
    /// Finger lifted or button released. Ends the current gesture.
    PointerUp { x: f32, y: f32 },
    /// Pointer dragged; only meaningful between down and up.
    PointerMove { x: f32, y: f32 },
    /// Gesture aborted by the platform (touch cancel, pointer left the canvas).
    PointerCancel,
    /// Menu or navigation command from the UI. `kind` is game-defined.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Input collected between two ticks, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InputEvent> {
        self.pending.iter()
    }

    /// Forget everything the last tick consumed.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
