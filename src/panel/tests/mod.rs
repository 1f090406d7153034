//! Panel unit tests
//!
//! Tests for the persistence LCD simulation, organized by functionality.

use super::*;
use crate::input::PenInput;

// ========================================
// Test Helper Functions
// ========================================

/// Helper to build a pen input snapshot from four direction flags
pub(crate) fn held(up: bool, down: bool, left: bool, right: bool) -> PenInput {
    PenInput {
        up,
        down,
        left,
        right,
    }
}

/// Helper for a snapshot with no directions held
pub(crate) fn idle() -> PenInput {
    PenInput::new()
}

// ========================================
// Test Modules
// ========================================
