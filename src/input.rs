use crate::constants::DRAG_SPAWN_INTERVAL;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

#[derive(Debug)]
pub struct Pointer {
    scale: f32,
    held: bool,
    last_spawn: Option<Instant>,
}

impl Pointer {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            held: false,
            last_spawn: None,
        }
    }

    /// Centre of a terminal cell in logical units. A cell is one pixel wide
    /// and two pixels tall.
    pub fn to_logical(&self, column: u16, row: u16) -> (f32, f32) {
        ((column as f32 + 0.5) * self.scale, (row as f32 * 2.0 + 1.0) * self.scale)
    }

    /// A press always spawns; a drag with the left button held spawns at
    /// most once per [`DRAG_SPAWN_INTERVAL`].
    pub fn handle(&mut self, event: &MouseEvent, now: Instant) -> Option<(f32, f32)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.held = true;
                self.last_spawn = Some(now);
                Some(self.to_logical(event.column, event.row))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.held => {
                let ready = self
                    .last_spawn
                    .is_none_or(|last| now.duration_since(last) >= DRAG_SPAWN_INTERVAL);
                if ready {
                    self.last_spawn = Some(now);
                    Some(self.to_logical(event.column, event.row))
                } else {
                    None
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.held = false;
                None
            }
            _ => None,
        }
    }
}
