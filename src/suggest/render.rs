//! Display-string rendering for suggestion responses.

use super::types::Skill;

/// Fixed display text for an empty result
pub const NO_SUCH_SKILLS: &str = "No Such Skills";

/// Render one response's skill list into the display string
///
/// Entries are concatenated in response order with no separator between
/// them; an empty list renders as [`NO_SUCH_SKILLS`]. Rendering never
/// sorts, dedupes, or truncates.
pub fn render_skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return NO_SUCH_SKILLS.to_string();
    }

    let mut out = String::new();
    for skill in skills {
        out.push_str("Skill Name: ");
        out.push_str(&skill.name);
        out.push_str(" id: ");
        out.push_str(&skill.id);
    }
    out
}
