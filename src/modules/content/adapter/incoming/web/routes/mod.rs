pub mod get_about;
pub mod get_experience;
pub mod get_portfolio;
pub mod get_projects;
pub mod get_skills;

pub use get_about::*;
pub use get_experience::*;
pub use get_portfolio::*;
pub use get_projects::*;
pub use get_skills::*;
