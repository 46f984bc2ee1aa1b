use std::sync::Arc;

use crate::content::application::ports::incoming::use_cases::{
    GetAboutUseCase, GetExperienceUseCase, GetProjectsUseCase, GetSkillsUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_about: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_experience: Arc<dyn GetExperienceUseCase + Send + Sync>,
}
