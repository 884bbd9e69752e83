//! Payload validation for teachers and schedule slots.
//!
//! Bodies arrive as untyped JSON and are checked field by field against the
//! fixed shapes of [`NewTeacher`] and [`NewScheduleSlot`]. Every problem is
//! collected so a caller sees all offending fields at once. Fields outside
//! the shape are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{
        calendar::{
            FIRST_PERIOD, GRADES, LAST_PERIOD, SECTIONS, Weekday, is_valid_grade, is_valid_period,
            is_valid_section,
        },
        schedule_slot::{NewScheduleSlot, ScheduleSlotPatch},
        teacher::{NewTeacher, TeacherPatch},
    },
};

pub const SLOTS_NOT_ARRAY: &str = "Slots must be an array";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Empty when the payload itself has the wrong shape.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Validated<T> = Result<T, Vec<FieldError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    fn of(value: &'a Value) -> Validated<Self> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                errors: Vec::new(),
            }),
            other => Err(vec![FieldError::new(
                "",
                format!("Expected object, received {}", kind(other)),
            )]),
        }
    }

    fn lookup(&mut self, field: &str, presence: Presence) -> Option<&'a Value> {
        let value = self.object.get(field);
        if value.is_none() && presence == Presence::Required {
            self.errors.push(FieldError::new(field, "Required"));
        }
        value
    }

    fn reject(&mut self, field: &str, message: String) {
        self.errors.push(FieldError::new(field, message));
    }

    fn text(&mut self, field: &str, presence: Presence) -> Option<String> {
        let value = self.lookup(field, presence)?;
        match value.as_str() {
            Some(text) if text.trim().is_empty() => {
                self.reject(field, "String must contain at least 1 character(s)".to_string());
                None
            }
            Some(text) => Some(text.to_string()),
            None => {
                self.reject(field, format!("Expected string, received {}", kind(value)));
                None
            }
        }
    }

    fn integer(
        &mut self,
        field: &str,
        presence: Presence,
        accepts: fn(i32) -> bool,
        expected: &str,
    ) -> Option<i32> {
        let value = self.lookup(field, presence)?;
        let Some(number) = value.as_i64() else {
            self.reject(field, format!("Expected integer, received {}", kind(value)));
            return None;
        };
        match i32::try_from(number).ok().filter(|n| accepts(*n)) {
            Some(number) => Some(number),
            None => {
                self.reject(field, format!("Invalid value {number}, expected {expected}"));
                None
            }
        }
    }

    fn day(&mut self, field: &str, presence: Presence) -> Option<Weekday> {
        let value = self.lookup(field, presence)?;
        let parsed = value.as_str().map(str::parse::<Weekday>);
        match parsed {
            Some(Ok(day)) => Some(day),
            _ => {
                let expected = Weekday::ALL
                    .iter()
                    .map(|day| format!("'{day}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                self.reject(
                    field,
                    format!("Invalid enum value. Expected {expected}, received {value}"),
                );
                None
            }
        }
    }

    fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Validated<T> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn one_of(values: &[i32]) -> String {
    let listed = values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("one of {listed}")
}

pub fn parse_new_teacher(value: &Value) -> Validated<NewTeacher> {
    let mut fields = Fields::of(value)?;
    let name = fields.text("name", Presence::Required);
    let subject = fields.text("subject", Presence::Required);
    fields.finish(|| Some(NewTeacher { name: name?, subject: subject? }))
}

pub fn parse_teacher_patch(value: &Value) -> Validated<TeacherPatch> {
    let mut fields = Fields::of(value)?;
    let name = fields.text("name", Presence::Optional);
    let subject = fields.text("subject", Presence::Optional);
    fields.finish(|| Some(TeacherPatch { name, subject }))
}

struct SlotFields {
    teacher_id: Option<String>,
    day: Option<Weekday>,
    period: Option<i32>,
    grade: Option<i32>,
    section: Option<i32>,
}

fn slot_fields(fields: &mut Fields<'_>, presence: Presence) -> SlotFields {
    let periods = format!("an integer between {FIRST_PERIOD} and {LAST_PERIOD}");
    SlotFields {
        teacher_id: fields.text("teacherId", presence),
        day: fields.day("day", presence),
        period: fields.integer("period", presence, is_valid_period, &periods),
        grade: fields.integer("grade", presence, is_valid_grade, &one_of(&GRADES)),
        section: fields.integer("section", presence, is_valid_section, &one_of(&SECTIONS)),
    }
}

pub fn parse_new_slot(value: &Value) -> Validated<NewScheduleSlot> {
    let mut fields = Fields::of(value)?;
    let slot = slot_fields(&mut fields, Presence::Required);
    fields.finish(|| {
        Some(NewScheduleSlot {
            teacher_id: slot.teacher_id?,
            day: slot.day?,
            period: slot.period?,
            grade: slot.grade?,
            section: slot.section?,
        })
    })
}

pub fn parse_slot_patch(value: &Value) -> Validated<ScheduleSlotPatch> {
    let mut fields = Fields::of(value)?;
    let slot = slot_fields(&mut fields, Presence::Optional);
    fields.finish(|| {
        Some(ScheduleSlotPatch {
            teacher_id: slot.teacher_id,
            day: slot.day,
            period: slot.period,
            grade: slot.grade,
            section: slot.section,
        })
    })
}

/// Returns the `slots` array of a batch body.
pub fn slot_payloads(body: &Value) -> ScheduleResult<&[Value]> {
    body.get("slots")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ScheduleError::BadRequest(SLOTS_NOT_ARRAY.to_string()))
}

/// Copies `payload` with `overrides` written over it. Non-object payloads
/// are returned unchanged so that validation reports their shape.
pub fn with_overrides<const N: usize>(payload: &Value, overrides: [(&str, Value); N]) -> Value {
    let mut stamped = payload.clone();
    if let Value::Object(object) = &mut stamped {
        for (field, value) in overrides {
            object.insert(field.to_string(), value);
        }
    }
    stamped
}
