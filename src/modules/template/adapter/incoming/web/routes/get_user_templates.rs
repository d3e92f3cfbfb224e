use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::create_template::TemplateResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::template::application::use_cases::fetch_user_templates::FetchUserTemplatesError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct TemplateListResponse {
    pub count: usize,
    pub templates: Vec<TemplateResponse>,
}

#[get("/api/templates/user")]
pub async fn get_user_templates_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_user_templates_use_case
        .execute(user.user_id)
        .await
    {
        Ok(records) => {
            let templates: Vec<TemplateResponse> =
                records.into_iter().map(TemplateResponse::from).collect();
            ApiResponse::success(TemplateListResponse {
                count: templates.len(),
                templates,
            })
        }

        Err(FetchUserTemplatesError::RepositoryError(e)) => {
            error!("Repository error listing templates: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::application::domain::entities::TemplateRecord;
    use crate::template::application::use_cases::fetch_user_templates::IFetchUserTemplatesUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, test_token_provider};
    use crate::tests::support::template_fixtures::sample_template_record;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    struct MockFetchUserTemplatesUseCase {
        count: usize,
    }

    #[async_trait]
    impl IFetchUserTemplatesUseCase for MockFetchUserTemplatesUseCase {
        async fn execute(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<TemplateRecord>, FetchUserTemplatesError> {
            Ok((0..self.count)
                .map(|_| sample_template_record(user_id))
                .collect())
        }
    }

    #[actix_web::test]
    async fn test_lists_templates_with_count() {
        let user_id = Uuid::new_v4();

        let app_state = TestAppStateBuilder::default()
            .with_fetch_user_templates(MockFetchUserTemplatesUseCase { count: 2 })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_user_templates_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates/user")
            .insert_header(("Authorization", bearer_token(user_id, false)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["count"], 2);
        assert_eq!(body["data"]["templates"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_requires_auth() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_user_templates_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates/user")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
