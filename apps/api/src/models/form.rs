use serde::{Deserialize, Serialize};

use crate::models::fields::FORM_FIELDS;

/// Snapshot of the résumé form at one point in time.
///
/// Rebuilt from the incoming request on every render. All fields default to
/// empty, so a partially filled form deserializes without ceremony; unknown
/// keys (CSRF tokens and the like) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub skills: String,
    pub work_experience: String,
    pub education: String,
    pub projects: String,
    pub certifications: String,
}

impl FormState {
    /// Current value of a field by registry name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "full_name" => &self.full_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "linkedin" => &self.linkedin,
            "github" => &self.github,
            "summary" => &self.summary,
            "skills" => &self.skills,
            "work_experience" => &self.work_experience,
            "education" => &self.education,
            "projects" => &self.projects,
            "certifications" => &self.certifications,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Overwrites a field by registry name. Returns `false` for names
    /// outside the fixed field set, leaving the state untouched.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "full_name" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "address" => &mut self.address,
            "linkedin" => &mut self.linkedin,
            "github" => &mut self.github,
            "summary" => &mut self.summary,
            "skills" => &mut self.skills,
            "work_experience" => &mut self.work_experience,
            "education" => &mut self.education,
            "projects" => &mut self.projects,
            "certifications" => &mut self.certifications,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Iterates `(name, value)` pairs in registry order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FORM_FIELDS
            .iter()
            .filter_map(|spec| self.get(spec.name).map(|value| (spec.name, value)))
    }

    /// Number of fields with non-empty trimmed content.
    pub fn filled_count(&self) -> usize {
        self.fields().filter(|(_, v)| !v.trim().is_empty()).count()
    }
}
