use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use crate::contact::application::domain::entities::{
    ContactSubmission, OutgoingMail, RelayCredentials,
};
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
use crate::contact::application::ports::outgoing::{
    MailRelay, RelayError, UnsentSubmissionLog,
};
use crate::content::application::domain::entities::{About, Experience, Project, Skill};
use crate::content::application::ports::incoming::use_cases::{
    GetAboutUseCase, GetExperienceUseCase, GetProjectsUseCase, GetSkillsUseCase,
};
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};

/* --------------------------------------------------
 * Content store
 * -------------------------------------------------- */

/// In-memory content store. `failing` makes every read return an error.
#[derive(Debug, Clone, Default)]
pub struct StubContentQuery {
    about: Option<About>,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    experience: Vec<Experience>,
    failure: Option<String>,
}

impl StubContentQuery {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_about(mut self, about: Option<About>) -> Self {
        self.about = about;
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_experience(mut self, experience: Vec<Experience>) -> Self {
        self.experience = experience;
        self
    }

    fn check(&self) -> Result<(), ContentQueryError> {
        match &self.failure {
            Some(msg) => Err(ContentQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentQuery for StubContentQuery {
    async fn find_about(&self) -> Result<Option<About>, ContentQueryError> {
        self.check()?;
        Ok(self.about.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, ContentQueryError> {
        self.check()?;
        Ok(self.skills.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        self.check()?;
        Ok(self.projects.clone())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        self.check()?;
        Ok(self.experience.clone())
    }
}

/* --------------------------------------------------
 * Content use cases
 * -------------------------------------------------- */

pub struct StubGetAboutUseCase(pub Option<About>);

#[async_trait]
impl GetAboutUseCase for StubGetAboutUseCase {
    async fn execute(&self) -> Option<About> {
        self.0.clone()
    }
}

pub struct StubGetSkillsUseCase(pub Vec<Skill>);

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Vec<Skill> {
        self.0.clone()
    }
}

pub struct StubGetProjectsUseCase(pub Vec<Project>);

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Vec<Project> {
        self.0.clone()
    }
}

pub struct StubGetExperienceUseCase(pub Vec<Experience>);

#[async_trait]
impl GetExperienceUseCase for StubGetExperienceUseCase {
    async fn execute(&self) -> Vec<Experience> {
        self.0.clone()
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSubmitContactUseCase {
    result: Result<(), SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: SubmitContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _input: SubmitContactInput) -> Result<(), SubmitContactError> {
        self.result.clone()
    }
}

/// Records sent mail; `failing` makes both calls return the error.
#[derive(Default)]
pub struct StubMailRelay {
    sent: Mutex<Vec<OutgoingMail>>,
    failure: Option<RelayError>,
}

impl StubMailRelay {
    pub fn failing(err: RelayError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(err),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailRelay for StubMailRelay {
    async fn send(
        &self,
        _credentials: &RelayCredentials,
        mail: OutgoingMail,
    ) -> Result<(), RelayError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }

    async fn test_connection(&self, _credentials: &RelayCredentials) -> Result<(), RelayError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingSubmissionLog {
    entries: Mutex<Vec<(ContactSubmission, DateTime<Utc>)>>,
}

impl RecordingSubmissionLog {
    pub fn entries(&self) -> Vec<ContactSubmission> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(s, _)| s.clone())
            .collect()
    }
}

impl UnsentSubmissionLog for RecordingSubmissionLog {
    fn record(&self, submission: &ContactSubmission, received_at: DateTime<Utc>) {
        self.entries
            .lock()
            .unwrap()
            .push((submission.clone(), received_at));
    }
}
