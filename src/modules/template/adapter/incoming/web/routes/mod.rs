mod create_template;
mod delete_template;
mod get_shared_template;
mod get_template;
mod get_user_templates;
mod update_template;

pub use create_template::{create_template_handler, CreateTemplateRequest, TemplateResponse};
pub use delete_template::{delete_template_handler, DeleteTemplateResponse};
pub use get_shared_template::get_shared_template_handler;
pub use get_template::get_template_handler;
pub use get_user_templates::{get_user_templates_handler, TemplateListResponse};
pub use update_template::{update_template_handler, UpdateTemplateRequest};
