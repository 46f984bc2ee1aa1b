use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// Identity record shown in the hero, about and contact sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Farman Ullah")]
    pub name: String,
    #[schema(example = "MERN Stack Developer")]
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub bio: String,
    pub avatar: String,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Other => "other",
        }
    }

    /// Store values outside the enumeration are shown under `other`.
    pub fn from_store(value: &str) -> Self {
        value.parse().unwrap_or(SkillCategory::Other)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "devops" => Ok(SkillCategory::Devops),
            "other" => Ok(SkillCategory::Other),
            _ => Err(UnknownSkillCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: String,
    #[schema(example = "Node.js")]
    pub name: String,
    pub category: SkillCategory,
    /// 0 to 100
    #[schema(example = 92)]
    pub proficiency: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    pub fn clamp_proficiency(raw: i32) -> u8 {
        raw.clamp(0, 100) as u8
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    /// Human readable tenure, e.g. `1 year 3 months` or `5 months (Current)`.
    ///
    /// Entries without an end date are measured up to `today`.
    pub fn duration_label(&self, today: NaiveDate) -> String {
        let end = self.end_date.unwrap_or(today);
        let total_months = (end.year() - self.start_date.year()) * 12
            + (end.month() as i32 - self.start_date.month() as i32);
        let total_months = total_months.max(0);

        let years = total_months / 12;
        let months = total_months % 12;

        let mut parts = Vec::new();
        if years > 0 {
            parts.push(format!("{} year{}", years, plural(years)));
        }
        if months > 0 || years == 0 {
            parts.push(format!("{} month{}", months, plural(months)));
        }

        let label = parts.join(" ");
        if self.current {
            format!("{} (Current)", label)
        } else {
            label
        }
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
