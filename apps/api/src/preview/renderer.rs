//! Preview rendering — turns a [`FormState`] into the HTML fragment that
//! replaces the preview container after every form input event.
//!
//! Rendering is a pure function of the form state: no diffing, no retained
//! output between calls. Identical input produces a byte-identical fragment.
//! Sections appear in a fixed order and are emitted only when their backing
//! field has content.

use crate::models::fields::FORM_FIELDS;
use crate::models::form::FormState;
use crate::preview::markup::escape_html;

/// Separator between contact-line items.
pub const CONTACT_SEPARATOR: &str = " | ";

/// Free-text sections rendered after the skills block, in order. Newlines in
/// these fields are kept and turned into breaks by `pre-line` styling.
const MULTILINE_SECTIONS: &[(&str, &str)] = &[
    ("work_experience", "Work Experience"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("certifications", "Certifications"),
];

/// Renders the full preview fragment for the given form state.
pub fn render(state: &FormState) -> String {
    let mut html = String::from(r#"<div class="resume-preview-content">"#);

    if !state.full_name.is_empty() {
        html.push_str(&format!(
            r#"<h2 class="preview-name">{}</h2>"#,
            escape_html(&state.full_name)
        ));
    }

    push_contact_line(&mut html, state);

    if !state.summary.is_empty() {
        push_section_title(&mut html, "Professional Summary");
        html.push_str(&format!(
            r#"<p class="summary-text">{}</p>"#,
            escape_html(&state.summary)
        ));
    }

    if !state.skills.is_empty() {
        push_section_title(&mut html, "Skills");
        html.push_str(r#"<div class="skills-list">"#);
        for skill in split_skills(&state.skills) {
            html.push_str(&format!(
                r#"<span class="skill-badge">{}</span>"#,
                escape_html(skill)
            ));
        }
        html.push_str("</div>");
    }

    for (name, title) in MULTILINE_SECTIONS {
        let value = state.get(name).unwrap_or_default();
        if value.is_empty() {
            continue;
        }
        push_section_title(&mut html, title);
        html.push_str(&format!(
            r#"<div class="section-body" style="white-space: pre-line">{}</div>"#,
            escape_html(value)
        ));
    }

    html.push_str("</div>");
    html
}

/// Splits the comma-separated skills field into trimmed, non-empty tokens,
/// preserving their original order.
pub fn split_skills(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn push_section_title(html: &mut String, title: &str) {
    html.push_str(&format!(r#"<h3 class="section-title">{title}</h3>"#));
}

/// Contact items in registry order, each prefixed by its icon markup.
/// Whitespace-only values are skipped; the line is omitted entirely when no
/// item qualifies.
fn push_contact_line(html: &mut String, state: &FormState) {
    let items: Vec<String> = FORM_FIELDS
        .iter()
        .filter_map(|spec| {
            let icon = spec.contact_icon?;
            let value = state.get(spec.name)?;
            if value.trim().is_empty() {
                return None;
            }
            Some(format!(r#"<i class="{icon}"></i>{}"#, escape_html(value)))
        })
        .collect();

    if items.is_empty() {
        return;
    }

    html.push_str(r#"<div class="contact-line"><p>"#);
    html.push_str(&items.join(CONTACT_SEPARATOR));
    html.push_str("</p></div>");
}
