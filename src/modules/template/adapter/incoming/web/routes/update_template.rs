use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::create_template::TemplateResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::generator::application::domain::template::{Customization, Sections, Theme};
use crate::shared::api::ApiResponse;
use crate::template::application::domain::entities::Visibility;
use crate::template::application::ports::outgoing::template_repository::UpdateTemplateData;
use crate::template::application::use_cases::update_template::UpdateTemplateError;
use crate::AppState;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sections: Option<Sections>,
    pub theme: Option<Theme>,
    pub customization: Option<Customization>,
    pub visibility: Option<Visibility>,
}

#[put("/api/templates/{template_id}")]
pub async fn update_template_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTemplateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateTemplateData {
        name: req.name,
        description: req.description,
        sections: req.sections,
        theme: req.theme,
        customization: req.customization,
        visibility: req.visibility,
    };

    match data
        .update_template_use_case
        .execute(user.user_id, template_id, update)
        .await
    {
        Ok(record) => ApiResponse::success(TemplateResponse::from(record)),

        Err(UpdateTemplateError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(UpdateTemplateError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Unauthorized access")
        }

        Err(UpdateTemplateError::RepositoryError(e)) => {
            error!("Repository error updating template {}: {}", template_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::application::domain::entities::TemplateRecord;
    use crate::template::application::use_cases::update_template::IUpdateTemplateUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, test_token_provider};
    use crate::tests::support::template_fixtures::sample_template_record;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct MockUpdateTemplateUseCase {
        result: Result<(), UpdateTemplateError>,
    }

    #[async_trait]
    impl IUpdateTemplateUseCase for MockUpdateTemplateUseCase {
        async fn execute(
            &self,
            user_id: Uuid,
            _template_id: Uuid,
            data: UpdateTemplateData,
        ) -> Result<TemplateRecord, UpdateTemplateError> {
            self.result.clone().map(|_| {
                let mut record = sample_template_record(user_id);
                if let Some(name) = data.name {
                    record.name = name;
                }
                record
            })
        }
    }

    #[actix_web::test]
    async fn test_update_template_success() {
        let app_state = TestAppStateBuilder::default()
            .with_update_template(MockUpdateTemplateUseCase { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(update_template_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/templates/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4(), false)))
            .set_json(json!({ "name": "Renamed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Renamed");
    }

    #[actix_web::test]
    async fn test_update_template_forbidden_for_non_owner() {
        let app_state = TestAppStateBuilder::default()
            .with_update_template(MockUpdateTemplateUseCase {
                result: Err(UpdateTemplateError::Forbidden),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(update_template_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/templates/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4(), false)))
            .set_json(json!({ "name": "Renamed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
