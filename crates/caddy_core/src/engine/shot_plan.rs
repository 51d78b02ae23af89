//! Shot plan data types.
//!
//! A `ShotPlan` is the fixed 13-slot row the planner produces for one hole:
//! the starting yardage, then six (club, yardage-after) pairs. Slots hold a
//! closed sentinel enumeration internally; the literal display strings
//! ("-", "Unknown", "0", "") appear only when a plan is rendered.

/// Slots per plan: 1 starting yardage + 6 * (club, yardage after).
pub const PLAN_LEN: usize = 13;

/// Strokes simulated per hole, regardless of termination.
pub const MAX_STROKES: usize = 6;

/// One cell of a shot plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSlot {
    /// Remaining distance (always > 0) before or after a stroke.
    Yardage(i32),
    /// Remaining distance has reached zero; renders as "0".
    Holed,
    /// A stroke taken with a named club.
    Club(String),
    /// A putt.
    Putt,
    /// Hole already completed, no stroke here; renders as "-".
    Inactive,
    /// No club could be chosen (empty table); renders as "Unknown".
    Unknown,
    /// Unfilled trailing slot; renders as "".
    Empty,
}

impl PlanSlot {
    /// The literal string the external presentation layer expects.
    pub fn render(&self) -> String {
        match self {
            PlanSlot::Yardage(d) => d.to_string(),
            PlanSlot::Holed => "0".to_string(),
            PlanSlot::Club(name) => name.clone(),
            PlanSlot::Putt => "Putt".to_string(),
            PlanSlot::Inactive => "-".to_string(),
            PlanSlot::Unknown => "Unknown".to_string(),
            PlanSlot::Empty => String::new(),
        }
    }

    /// Whether this slot, in a club position, represents a stroke taken.
    pub fn is_stroke(&self) -> bool {
        !matches!(self, PlanSlot::Inactive | PlanSlot::Empty)
    }
}

/// The simulated stroke-by-stroke sequence for one hole.
///
/// Always exactly [`PLAN_LEN`] slots: slot 0 is the starting yardage, slot
/// `1 + 2*s` the club for stroke `s`, slot `2 + 2*s` the yardage after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotPlan {
    slots: [PlanSlot; PLAN_LEN],
}

impl ShotPlan {
    pub(crate) fn from_slots(slots: [PlanSlot; PLAN_LEN]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[PlanSlot; PLAN_LEN] {
        &self.slots
    }

    /// Club slot for a stroke index in `0..MAX_STROKES`.
    pub fn club(&self, stroke: usize) -> &PlanSlot {
        &self.slots[1 + 2 * stroke]
    }

    /// Yardage-after slot for a stroke index in `0..MAX_STROKES`.
    pub fn yardage_after(&self, stroke: usize) -> &PlanSlot {
        &self.slots[2 + 2 * stroke]
    }

    /// Render the whole row as the literal strings the presentation layer
    /// consumes.
    pub fn render_row(&self) -> [String; PLAN_LEN] {
        std::array::from_fn(|i| self.slots[i].render())
    }
}
