mod get_about_service;
mod get_experience_service;
mod get_projects_service;
mod get_skills_service;

pub use get_about_service::GetAboutService;
pub use get_experience_service::GetExperienceService;
pub use get_projects_service::GetProjectsService;
pub use get_skills_service::GetSkillsService;
