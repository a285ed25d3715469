/// Input event types the engine understands.
/// Coordinates are raw client pixels as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse button / touch went down at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A mouse button / touch was released at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Scroll wheel; positive `delta_y` scrolls down (zooms out).
    Wheel { delta_y: f32 },
    /// The canvas was resized to `width` × `height` pixels.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta_y: 100.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 1.0 });
        q.push(InputEvent::PointerUp { x: 2.0, y: 1.0 });
        let seen: Vec<_> = q.iter().copied().collect();
        assert_eq!(
            seen,
            vec![
                InputEvent::PointerDown { x: 1.0, y: 1.0 },
                InputEvent::PointerMove { x: 2.0, y: 1.0 },
                InputEvent::PointerUp { x: 2.0, y: 1.0 },
            ]
        );
        assert_eq!(q.len(), 3);
    }
}
