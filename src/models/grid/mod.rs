//! The week grid: a fixed table of time slots by day of week.

/// Day-of-week column labels, in display order.
pub const DAYS: [&str; 6] = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi"];

/// First hour covered by the grid.
const FIRST_HOUR: u32 = 8;
/// Hour at which the last slot starts.
const LAST_HOUR: u32 = 20;

/// Hour-range row labels, "08h-09h" through "20h-21h".
pub fn time_slots() -> Vec<String> {
    (FIRST_HOUR..=LAST_HOUR)
        .map(|h| format!("{:02}h-{:02}h", h, h + 1))
        .collect()
}

/// One week's worth of free-form cell text, indexed by (time slot row,
/// day column).
///
/// Row and column labels travel with the grid so that the ordering of a
/// stored file survives a load round-trip. The shape never changes after
/// construction; only cell text does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    slots: Vec<String>,
    days: Vec<String>,
    cells: Vec<Vec<String>>,
}

impl WeekGrid {
    /// A fresh grid with the standard slot/day shape and every cell empty.
    pub fn blank() -> Self {
        let slots = time_slots();
        let days: Vec<String> = DAYS.iter().map(|d| d.to_string()).collect();
        let cells = vec![vec![String::new(); days.len()]; slots.len()];
        Self { slots, days, cells }
    }

    /// Rebuild a grid from stored labels and cell rows.
    ///
    /// Callers must ensure `cells` has one row per slot and one column per
    /// day; the store validates this while parsing.
    pub(crate) fn from_parts(
        slots: Vec<String>,
        days: Vec<String>,
        cells: Vec<Vec<String>>,
    ) -> Self {
        debug_assert_eq!(cells.len(), slots.len());
        debug_assert!(cells.iter().all(|row| row.len() == days.len()));
        Self { slots, days, cells }
    }

    pub fn slot_labels(&self) -> &[String] {
        &self.slots
    }

    pub fn day_labels(&self) -> &[String] {
        &self.days
    }

    /// Row index for a slot label, if present.
    pub fn slot_index(&self, label: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == label)
    }

    /// Column index for a day label, if present.
    pub fn day_index(&self, label: &str) -> Option<usize> {
        self.days.iter().position(|d| d == label)
    }

    pub fn cell(&self, slot: usize, day: usize) -> &str {
        &self.cells[slot][day]
    }

    pub fn cell_mut(&mut self, slot: usize, day: usize) -> &mut String {
        &mut self.cells[slot][day]
    }

    pub fn set_cell(&mut self, slot: usize, day: usize, text: impl Into<String>) {
        self.cells[slot][day] = text.into();
    }

    /// Iterate rows as (slot label, cells in day order).
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.slots
            .iter()
            .zip(self.cells.iter())
            .map(|(slot, row)| (slot.as_str(), row.as_slice()))
    }
}
