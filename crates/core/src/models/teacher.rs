use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub subject: String,
}

/// Validated fields for a teacher that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub subject: Option<String>,
}

impl Teacher {
    pub fn new(id: String, fields: NewTeacher) -> Self {
        Self {
            id,
            name: fields.name,
            subject: fields.subject,
        }
    }

    /// Overwrites the fields present in `patch`; the id never changes.
    pub fn apply(&mut self, patch: TeacherPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
    }
}
