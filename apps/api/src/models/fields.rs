//! Field registry — the fixed set of tracked résumé form fields, as data.
//!
//! The form page builds its inputs from `GET /api/v1/fields`, and the
//! renderer and progress tracker iterate the same registry, so the three
//! never disagree about which fields exist or in what order.

use serde::Serialize;

/// Widget the form page should render for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    Text,
    Textarea,
}

/// Static description of one tracked form field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    /// Icon class shown next to the value on the preview contact line.
    /// `None` for fields that never appear on the contact line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_icon: Option<&'static str>,
}

/// The fixed field set, in form order. Contact-line order is the order of
/// the contact-bearing entries below.
pub const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "full_name",
        label: "Full Name",
        widget: Widget::Text,
        contact_icon: None,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        widget: Widget::Text,
        contact_icon: Some("fas fa-envelope"),
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        widget: Widget::Text,
        contact_icon: Some("fas fa-phone"),
    },
    FieldSpec {
        name: "address",
        label: "Address",
        widget: Widget::Text,
        contact_icon: Some("fas fa-map-marker-alt"),
    },
    FieldSpec {
        name: "linkedin",
        label: "LinkedIn",
        widget: Widget::Text,
        contact_icon: Some("fab fa-linkedin"),
    },
    FieldSpec {
        name: "github",
        label: "GitHub",
        widget: Widget::Text,
        contact_icon: Some("fab fa-github"),
    },
    FieldSpec {
        name: "summary",
        label: "Professional Summary",
        widget: Widget::Textarea,
        contact_icon: None,
    },
    FieldSpec {
        name: "skills",
        label: "Skills",
        widget: Widget::Textarea,
        contact_icon: None,
    },
    FieldSpec {
        name: "work_experience",
        label: "Work Experience",
        widget: Widget::Textarea,
        contact_icon: None,
    },
    FieldSpec {
        name: "education",
        label: "Education",
        widget: Widget::Textarea,
        contact_icon: None,
    },
    FieldSpec {
        name: "projects",
        label: "Projects",
        widget: Widget::Textarea,
        contact_icon: None,
    },
    FieldSpec {
        name: "certifications",
        label: "Certifications",
        widget: Widget::Textarea,
        contact_icon: None,
    },
];
