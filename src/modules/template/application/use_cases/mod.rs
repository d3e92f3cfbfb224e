pub mod create_template;
pub mod delete_template;
pub mod fetch_shared_template;
pub mod fetch_template;
pub mod fetch_user_templates;
pub mod update_template;
