//! Input collaborator interface
//!
//! Event handlers mutate input state asynchronously between ticks; the
//! update step must see one immutable snapshot per tick so the movement and
//! collision phases cannot tear. The input collaborator builds an
//! [`InputSnapshot`] once per tick and passes it by value.

/// Current input intents, captured once at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Jump intent; `up` doubles as jump on plain keyboards.
    pub jump: bool,
    /// Vertical pointer-drag position in canvas coordinates, when dragging.
    /// Overrides the up/down keys for the paddle game.
    pub pointer_y: Option<f32>,
    /// One-shot session commands (edge-triggered by the collaborator).
    pub start: bool,
    pub pause: bool,
    pub restart: bool,
}

impl InputSnapshot {
    /// Pointer position with non-finite values filtered out.
    pub fn pointer_y(&self) -> Option<f32> {
        self.pointer_y.filter(|y| y.is_finite())
    }

    /// Horizontal intent in {-1, 0, 1}.
    pub fn move_dir(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    pub fn wants_jump(&self) -> bool {
        self.jump || self.up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_dir() {
        let mut input = InputSnapshot::default();
        assert_eq!(input.move_dir(), 0.0);
        input.left = true;
        assert_eq!(input.move_dir(), -1.0);
        input.right = true;
        assert_eq!(input.move_dir(), 0.0);
    }

    #[test]
    fn test_pointer_filters_non_finite() {
        let input = InputSnapshot {
            pointer_y: Some(f32::NAN),
            ..Default::default()
        };
        assert_eq!(input.pointer_y(), None);
        let input = InputSnapshot {
            pointer_y: Some(120.0),
            ..Default::default()
        };
        assert_eq!(input.pointer_y(), Some(120.0));
    }
}
