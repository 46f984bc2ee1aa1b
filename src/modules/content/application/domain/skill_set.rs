use super::entities::{Skill, SkillCategory};

/// Skills every rendered skill list carries, whatever the store holds.
const GUARANTEED_SKILLS: [(&str, SkillCategory, u8, &str); 4] = [
    ("Typing Skills", SkillCategory::Other, 80, "⌨️"),
    ("Tailwind CSS", SkillCategory::Frontend, 88, "🌀"),
    ("Bootstrap", SkillCategory::Frontend, 82, "🧩"),
    ("Next.js", SkillCategory::Frontend, 90, "⏭️"),
];

/// Appends each guaranteed skill that has no case-insensitive name match yet.
/// Existing entries are never replaced or reordered.
pub fn with_guaranteed_skills(mut skills: Vec<Skill>) -> Vec<Skill> {
    for (name, category, proficiency, icon) in GUARANTEED_SKILLS {
        if skills.iter().any(|s| s.has_name(name)) {
            continue;
        }

        skills.push(Skill {
            id: fallback_id(name),
            name: name.to_string(),
            category,
            proficiency,
            icon: Some(icon.to_string()),
        });
    }

    skills
}

fn fallback_id(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-fallback", slug)
}
