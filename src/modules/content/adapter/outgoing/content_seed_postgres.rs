use sea_orm::{EntityTrait, Set, TransactionTrait};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::content_query_postgres::database_error;
use super::content_store::ContentStore;
use super::sea_orm_entity::{about, experience, projects, skills};
use crate::content::application::domain::entities::{About, Experience, Project, Skill};
use crate::content::application::domain::fallback::{
    fallback_about, fallback_experience, fallback_projects, fallback_skills,
};
use crate::content::application::ports::outgoing::ContentQueryError;

/// A complete content set to load into an empty or stale store.
#[derive(Debug, Clone)]
pub struct ContentSeed {
    pub about: About,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

impl ContentSeed {
    /// The site owner's published portfolio.
    ///
    /// Same records as the fallback set, minus "Typing Skills": the store
    /// holds only the 18 authored skills and the read path adds the
    /// guaranteed ones.
    pub fn portfolio() -> Self {
        Self {
            about: fallback_about(),
            skills: fallback_skills()
                .into_iter()
                .filter(|skill| !skill.has_name("Typing Skills"))
                .collect(),
            projects: fallback_projects(),
            experience: fallback_experience(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub skills: usize,
    pub projects: usize,
    pub experience: usize,
}

/// Replaces the whole content store in one transaction.
#[derive(Debug, Clone)]
pub struct ContentSeederPostgres {
    store: ContentStore,
}

impl ContentSeederPostgres {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    pub async fn seed(&self, seed: ContentSeed) -> Result<SeedReport, ContentQueryError> {
        let db = self.store.connection()?;
        let txn = db.begin().await.map_err(database_error)?;

        // Clear existing data
        about::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(database_error)?;
        skills::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(database_error)?;
        projects::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(database_error)?;
        experience::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(database_error)?;

        about::Entity::insert(about_model(&seed.about))
            .exec_without_returning(&txn)
            .await
            .map_err(database_error)?;

        if !seed.skills.is_empty() {
            skills::Entity::insert_many(seed.skills.iter().map(skill_model))
                .exec_without_returning(&txn)
                .await
                .map_err(database_error)?;
        }

        if !seed.projects.is_empty() {
            projects::Entity::insert_many(seed.projects.iter().map(project_model))
                .exec_without_returning(&txn)
                .await
                .map_err(database_error)?;
        }

        if !seed.experience.is_empty() {
            experience::Entity::insert_many(seed.experience.iter().map(experience_model))
                .exec_without_returning(&txn)
                .await
                .map_err(database_error)?;
        }

        txn.commit().await.map_err(database_error)?;

        let report = SeedReport {
            skills: seed.skills.len(),
            projects: seed.projects.len(),
            experience: seed.experience.len(),
        };
        info!(
            skills = report.skills,
            projects = report.projects,
            experience = report.experience,
            "Content store seeded"
        );
        Ok(report)
    }
}

fn about_model(about: &About) -> about::ActiveModel {
    let links = &about.social_links;
    about::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(about.name.clone()),
        title: Set(about.title.clone()),
        location: Set(about.location.clone()),
        email: Set(about.email.clone()),
        phone: Set(about.phone.clone()),
        bio: Set(about.bio.clone()),
        avatar: Set(about.avatar.clone()),
        github_url: Set(links.github.clone()),
        linkedin_url: Set(links.linkedin.clone()),
        twitter_url: Set(links.twitter.clone()),
        instagram_url: Set(links.instagram.clone()),
        whatsapp: Set(links.whatsapp.clone()),
    }
}

fn skill_model(skill: &Skill) -> skills::ActiveModel {
    skills::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(skill.name.clone()),
        category: Set(skill.category.as_str().to_string()),
        proficiency: Set(i32::from(skill.proficiency)),
        icon: Set(skill.icon.clone()),
    }
}

fn project_model(project: &Project) -> projects::ActiveModel {
    projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(project.title.clone()),
        description: Set(project.description.clone()),
        technologies: Set(json!(project.technologies)),
        image: Set(project.image.clone()),
        github_url: Set(project.github_url.clone()),
        live_url: Set(project.live_url.clone()),
        featured: Set(project.featured),
        created_at: Set(project.created_at.fixed_offset()),
    }
}

fn experience_model(job: &Experience) -> experience::ActiveModel {
    experience::ActiveModel {
        id: Set(Uuid::new_v4()),
        company: Set(job.company.clone()),
        position: Set(job.position.clone()),
        location: Set(job.location.clone()),
        start_date: Set(job.start_date),
        end_date: Set(job.end_date),
        current: Set(job.current),
        description: Set(json!(job.description)),
        technologies: Set(json!(job.technologies)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
    use std::sync::Arc;

    fn exec_ok(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    #[tokio::test]
    async fn test_seed_replaces_all_tables() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                exec_ok(1),
                exec_ok(18),
                exec_ok(3),
                exec_ok(2),
                exec_ok(1),
                exec_ok(18),
                exec_ok(3),
                exec_ok(2),
            ])
            .into_connection();
        let seeder = ContentSeederPostgres::new(ContentStore::from_connection(Arc::new(db)));

        let report = seeder.seed(ContentSeed::portfolio()).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                skills: 18,
                projects: 3,
                experience: 2
            }
        );
    }

    #[test]
    fn test_portfolio_seed_leaves_guaranteed_typing_skill_to_reads() {
        let seed = ContentSeed::portfolio();

        assert_eq!(seed.skills.len(), 18);
        assert!(!seed.skills.iter().any(|s| s.has_name("typing skills")));
        assert_eq!(seed.projects.len(), 3);
        assert_eq!(seed.experience.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Conn(RuntimeErr::Internal(
                "connection reset".to_string(),
            ))])
            .into_connection();
        let seeder = ContentSeederPostgres::new(ContentStore::from_connection(Arc::new(db)));

        let result = seeder.seed(ContentSeed::portfolio()).await;

        assert!(matches!(result, Err(ContentQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_seed_without_store_is_not_configured() {
        let seeder = ContentSeederPostgres::new(ContentStore::unavailable("DATABASE_URL is not set"));

        let result = seeder.seed(ContentSeed::portfolio()).await;

        assert!(matches!(result, Err(ContentQueryError::NotConfigured(_))));
    }

    #[test]
    fn test_models_keep_store_representation() {
        let skill = skill_model(&fallback_skills()[0]);
        assert_eq!(skill.category, Set("database".to_string()));
        assert_eq!(skill.proficiency, Set(88));

        let project = project_model(&fallback_projects()[1]);
        assert_eq!(
            project.technologies,
            Set(json!(["React.js", "JavaScript", "HTML/CSS"]))
        );
    }
}
