use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::OpenApi;

use crate::contact::adapter::incoming::web::routes::ContactRequestDto;
use crate::content::adapter::incoming::web::routes::{ExperienceResponse, PortfolioResponse};
use crate::content::application::domain::entities::{
    About, Experience, Project, Skill, SkillCategory, SocialLinks,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content and contact endpoints for the portfolio site",
    ),
    paths(
        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_about_handler,
        crate::content::adapter::incoming::web::routes::get_skills_handler,
        crate::content::adapter::incoming::web::routes::get_projects_handler,
        crate::content::adapter::incoming::web::routes::get_experience_handler,
        crate::content::adapter::incoming::web::routes::get_portfolio_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,

            // Content
            About,
            SocialLinks,
            Skill,
            SkillCategory,
            Project,
            Experience,
            ExperienceResponse,
            PortfolioResponse,

            // Contact
            ContactRequestDto,
        )
    ),
    tags(
        (name = "content", description = "Portfolio content endpoints"),
        (name = "contact", description = "Contact form relay"),
    )
)]
pub struct ApiDoc;
