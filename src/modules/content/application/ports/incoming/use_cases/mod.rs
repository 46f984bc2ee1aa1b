mod get_about;
mod get_experience;
mod get_projects;
mod get_skills;

pub use get_about::GetAboutUseCase;
pub use get_experience::GetExperienceUseCase;
pub use get_projects::GetProjectsUseCase;
pub use get_skills::GetSkillsUseCase;
