use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::create_template::TemplateResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::template::application::use_cases::fetch_template::FetchTemplateError;
use crate::AppState;

#[get("/api/templates/{template_id}")]
pub async fn get_template_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();

    match data
        .fetch_template_use_case
        .execute(user.user_id, template_id)
        .await
    {
        Ok(record) => ApiResponse::success(TemplateResponse::from(record)),

        Err(FetchTemplateError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(FetchTemplateError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Unauthorized access")
        }

        Err(FetchTemplateError::RepositoryError(e)) => {
            error!("Repository error fetching template {}: {}", template_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::application::domain::entities::TemplateRecord;
    use crate::template::application::use_cases::fetch_template::IFetchTemplateUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, test_token_provider};
    use crate::tests::support::template_fixtures::sample_template_record;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct MockFetchTemplateUseCase {
        result: Result<(), FetchTemplateError>,
    }

    #[async_trait]
    impl IFetchTemplateUseCase for MockFetchTemplateUseCase {
        async fn execute(
            &self,
            requester: Uuid,
            _template_id: Uuid,
        ) -> Result<TemplateRecord, FetchTemplateError> {
            self.result
                .clone()
                .map(|_| sample_template_record(requester))
        }
    }

    async fn call(result: Result<(), FetchTemplateError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_template(MockFetchTemplateUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_template_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4(), false)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_get_template_success() {
        let (status, body) = call(Ok(())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"]["shareId"].is_string());
    }

    #[actix_web::test]
    async fn test_get_template_not_found() {
        let (status, body) = call(Err(FetchTemplateError::TemplateNotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_template_private_non_owner_forbidden() {
        let (status, body) = call(Err(FetchTemplateError::Forbidden)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}
