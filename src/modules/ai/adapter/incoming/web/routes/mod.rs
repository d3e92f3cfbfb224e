mod enhance;
mod suggest_projects;

pub use enhance::{enhance_handler, EnhanceRequest};
pub use suggest_projects::{suggest_projects_handler, SuggestProjectsRequest};
