pub mod entities;
pub mod fallback;
pub mod skill_set;
