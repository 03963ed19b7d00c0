use egui::{Context, Pos2, Rect, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primary button was pressed on the canvas
    Down,
    /// Pointer moved while the button is held
    Drag,
    /// Primary button was released
    Up,
}

/// A pointer gesture step in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Pos2,
}

impl PointerEvent {
    pub fn down(pos: Pos2) -> Self {
        Self { kind: PointerEventKind::Down, pos }
    }

    pub fn drag(pos: Pos2) -> Self {
        Self { kind: PointerEventKind::Drag, pos }
    }

    pub fn up(pos: Pos2) -> Self {
        Self { kind: PointerEventKind::Up, pos }
    }
}

/// Primary-button pointer state sampled once per UI update.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPointer {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    /// Screen position of the pointer, if known
    pub pos: Option<Pos2>,
    /// Whether the canvas is the topmost widget under the pointer
    pub over_canvas: bool,
}

impl RawPointer {
    /// Sample egui's input state for the canvas widget.
    pub fn sample(ctx: &Context, canvas: &Response) -> Self {
        let over_canvas = canvas.hovered();
        ctx.input(|input| Self {
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            down: input.pointer.primary_down(),
            pos: input.pointer.interact_pos(),
            over_canvas,
        })
    }
}

/// Handles converting raw pointer input into canvas [`PointerEvent`]s.
///
/// A gesture only starts when the press lands on the canvas. Once started,
/// its drag and release events are delivered even if the pointer leaves the
/// canvas, the same way a toolkit grabs the pointer for the pressed widget.
#[derive(Debug, Default)]
pub struct InputHandler {
    gesture_active: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Translate one sample into events, relative to `canvas_rect`.
    ///
    /// The release is honoured even when the sample carries no position
    /// (pointer outside the window); the last known position is used then.
    pub fn process(&mut self, raw: RawPointer, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pos = raw.pos.map(|screen_pos| (screen_pos - canvas_rect.min).to_pos2());

        if raw.pressed && !self.gesture_active {
            if let (Some(screen_pos), Some(pos)) = (raw.pos, pos) {
                if raw.over_canvas && canvas_rect.contains(screen_pos) {
                    self.gesture_active = true;
                    self.last_pos = Some(pos);
                    events.push(PointerEvent::down(pos));
                }
            }
        } else if self.gesture_active && raw.down {
            if let Some(pos) = pos.filter(|pos| self.last_pos != Some(*pos)) {
                self.last_pos = Some(pos);
                events.push(PointerEvent::drag(pos));
            }
        }

        if self.gesture_active && (raw.released || !raw.down) {
            // A press and release within one update still yields a drag-less click
            let up_pos = pos.or(self.last_pos);
            self.gesture_active = false;
            self.last_pos = None;
            if let Some(up_pos) = up_pos {
                events.push(PointerEvent::up(up_pos));
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(640.0, 360.0))
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let raw = RawPointer {
            pressed: true,
            down: true,
            pos: Some(pos2(10.0, 10.0)),
            ..Default::default()
        };
        assert!(handler.process(raw, canvas()).is_empty());
        assert!(!handler.is_gesture_active());
    }

    #[test]
    fn test_gesture_in_canvas_coordinates() {
        let mut handler = InputHandler::new();
        let press = RawPointer {
            pressed: true,
            down: true,
            pos: Some(pos2(110.0, 60.0)),
            over_canvas: true,
            ..Default::default()
        };
        assert_eq!(handler.process(press, canvas()), vec![PointerEvent::down(pos2(10.0, 10.0))]);

        // Drags keep flowing outside the canvas
        let drag = RawPointer {
            down: true,
            pos: Some(pos2(50.0, 40.0)),
            ..Default::default()
        };
        assert_eq!(handler.process(drag, canvas()), vec![PointerEvent::drag(pos2(-50.0, -10.0))]);

        let release = RawPointer {
            released: true,
            pos: Some(pos2(50.0, 40.0)),
            ..Default::default()
        };
        assert_eq!(handler.process(release, canvas()), vec![PointerEvent::up(pos2(-50.0, -10.0))]);
        assert!(!handler.is_gesture_active());
    }

    #[test]
    fn test_release_outside_window_ends_gesture() {
        let mut handler = InputHandler::new();
        let press = RawPointer {
            pressed: true,
            down: true,
            pos: Some(pos2(110.0, 60.0)),
            over_canvas: true,
            ..Default::default()
        };
        handler.process(press, canvas());

        let drag = RawPointer {
            down: true,
            pos: Some(pos2(130.0, 70.0)),
            ..Default::default()
        };
        handler.process(drag, canvas());

        // Released while the pointer is off the window: no position known
        let release = RawPointer {
            released: true,
            ..Default::default()
        };
        assert_eq!(handler.process(release, canvas()), vec![PointerEvent::up(pos2(30.0, 20.0))]);
        assert!(!handler.is_gesture_active());

        // A later press outside the canvas must not reach the tool
        let toolbar_press = RawPointer {
            pressed: true,
            down: true,
            pos: Some(pos2(5.0, 5.0)),
            ..Default::default()
        };
        assert!(handler.process(toolbar_press, canvas()).is_empty());
        assert!(!handler.is_gesture_active());
    }
}
