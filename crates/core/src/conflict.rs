//! Advisory double-booking checks.
//!
//! A class should have at most one lesson per `(day, period)`. Nothing in
//! the write path enforces this; these helpers let a client warn before it
//! saves, and let the API report cells that already hold several slots.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::models::{
    calendar::Weekday,
    schedule_slot::{ClassPeriod, ScheduleSlot},
};

/// An existing slot already occupying the cell a new assignment targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clash<'a> {
    pub cell: ClassPeriod,
    pub existing: &'a ScheduleSlot,
}

impl fmt::Display for Clash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class {}/{} already has a lesson on {} period {}",
            self.cell.grade, self.cell.section, self.cell.day, self.cell.period
        )
    }
}

/// Finds a slot in `known` that occupies `cell`. The slot being edited,
/// if any, is passed as `editing` and never counts against itself.
pub fn find_clash<'a>(
    known: &'a [ScheduleSlot],
    cell: ClassPeriod,
    editing: Option<&str>,
) -> Option<Clash<'a>> {
    known
        .iter()
        .filter(|slot| editing != Some(slot.id.as_str()))
        .find(|slot| slot.class_period() == cell)
        .map(|existing| Clash { cell, existing })
}

/// A timetable cell holding more than one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConflict {
    pub grade: i32,
    pub section: i32,
    pub day: Weekday,
    pub period: i32,
    pub slot_ids: Vec<String>,
}

/// Groups the slots of one class by cell and returns the cells that are
/// double-booked, ordered by day then period.
pub fn class_conflicts(slots: &[ScheduleSlot], grade: i32, section: i32) -> Vec<SlotConflict> {
    let mut cells: BTreeMap<(Weekday, i32), Vec<String>> = BTreeMap::new();
    for slot in slots.iter().filter(|slot| slot.belongs_to_class(grade, section)) {
        cells
            .entry((slot.day, slot.period))
            .or_default()
            .push(slot.id.clone());
    }

    cells
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|((day, period), slot_ids)| SlotConflict {
            grade,
            section,
            day,
            period,
            slot_ids,
        })
        .collect()
}
