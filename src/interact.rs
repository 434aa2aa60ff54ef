//! Pointer-drag to phase-angle mapping.
//!
//! Two-state controller: Idle until a drag starts, Dragging until the
//! button is released. The angle captured at drag start keeps the diagram
//! glued to the pointer for the whole gesture.

use nalgebra::Vector2;

/// Maps drags around the orbit center onto the diagram's phase angle.
///
/// The phase is left unbounded rather than wrapped into [0, 2pi); trig
/// wraps naturally and normalizing mid-drag would introduce a visible jump.
#[derive(Default)]
pub struct DragController {
    anchor: Option<f64>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Enters Dragging, capturing `phase - atan2(pointer)` so the grabbed
    /// point stays under the pointer. A pointer exactly on the center has
    /// no direction; the event is ignored.
    pub fn begin(&mut self, phase: f64, pointer: Vector2<f64>) {
        if pointer.x == 0.0 && pointer.y == 0.0 {
            return;
        }
        self.anchor = Some(phase - pointer.y.atan2(pointer.x));
    }

    /// New phase for a pointer position, or None when idle or when the
    /// pointer sits exactly on the center (previous angle is retained).
    pub fn drag_to(&self, pointer: Vector2<f64>) -> Option<f64> {
        let anchor = self.anchor?;
        if pointer.x == 0.0 && pointer.y == 0.0 {
            return None;
        }
        Some(anchor + pointer.y.atan2(pointer.x))
    }

    /// Button release anywhere ends the gesture.
    pub fn end(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returning_to_drag_start_restores_phase() {
        let mut drag = DragController::new();
        let start = Vector2::new(3.0, 4.0);
        drag.begin(0.7, start);
        assert!(drag.is_dragging());
        let moved = drag.drag_to(Vector2::new(-2.0, 5.0)).unwrap();
        assert!((moved - 0.7).abs() > 1e-3);
        let restored = drag.drag_to(start).unwrap();
        assert!((restored - 0.7).abs() < 1e-12);
    }

    #[test]
    fn drag_across_branch_cut_stays_continuous() {
        let mut drag = DragController::new();
        drag.begin(0.0, Vector2::new(-10.0, -1e-6));
        let before = drag.drag_to(Vector2::new(-10.0, -1e-3)).unwrap();
        let after = drag.drag_to(Vector2::new(-10.0, 1e-3)).unwrap();
        // atan2 jumps by ~2pi across the negative x axis; the phase the
        // controller reports moves by the same amount, which renders
        // identically. No intermediate normalization is applied.
        assert!(((after - before).abs() - std::f64::consts::TAU).abs() < 1e-3);
    }

    #[test]
    fn zero_length_pointer_vector_is_a_no_op() {
        let mut drag = DragController::new();
        drag.begin(1.0, Vector2::new(0.0, 0.0));
        assert!(!drag.is_dragging());

        drag.begin(1.0, Vector2::new(1.0, 0.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.drag_to(Vector2::new(0.0, 0.0)), None);
        assert!(drag.drag_to(Vector2::new(0.0, 1.0)).is_some());
    }

    #[test]
    fn idle_controller_reports_no_phase() {
        let drag = DragController::new();
        assert_eq!(drag.drag_to(Vector2::new(1.0, 1.0)), None);
    }
}
