use actix_web::web;
use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::{
    GetAboutUseCase, GetExperienceUseCase, GetProjectsUseCase, GetSkillsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_about: Arc<dyn GetAboutUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    get_experience: Arc<dyn GetExperienceUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    relay_configured: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_about: Arc::new(StubGetAboutUseCase(None)),
            get_skills: Arc::new(StubGetSkillsUseCase(vec![])),
            get_projects: Arc::new(StubGetProjectsUseCase(vec![])),
            get_experience: Arc::new(StubGetExperienceUseCase(vec![])),
            submit_contact: Arc::new(StubSubmitContactUseCase::success()),
            relay_configured: false,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + Send + Sync + 'static) -> Self {
        self.get_about = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_get_experience(
        mut self,
        uc: impl GetExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_experience = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_relay_configured(mut self, configured: bool) -> Self {
        self.relay_configured = configured;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: ContentUseCases {
                get_about: self.get_about,
                get_skills: self.get_skills,
                get_projects: self.get_projects,
                get_experience: self.get_experience,
            },
            submit_contact_use_case: self.submit_contact,
            relay_configured: self.relay_configured,
        })
    }
}
