use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use tracing::{error, info};
use uuid::Uuid;

use blogmentor_common::BlogMentorError;
use blogmentor_llm::blog_post_prompt;
use blogmentor_post::{parse_post, GenerationEvent};

use crate::state::AppState;
use crate::types::{GenerateReply, GenerateTopicRequest};

/// The one generic localized failure message; error detail stays in the logs
pub const GENERATION_ERROR_MESSAGE: &str =
    "멘토의 조언을 생성하는 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

#[post("/generate")]
pub async fn generate(
    req: web::Json<GenerateTopicRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let topic = req.topic.trim().to_string();
    let request_id = Uuid::new_v4();

    // Drive the submission machine; a refused submit leaves the state untouched
    {
        let mut session = state.session.write().await;
        let event = GenerationEvent::Submit {
            topic: topic.clone(),
        };
        match session.apply(&event) {
            Some(next) => *session = next,
            None if session.is_submitting() => {
                info!("Submission {} refused: already submitting", request_id);
                return Ok(HttpResponse::Conflict()
                    .json(GenerateReply::failure("이미 생성 중입니다. 잠시만 기다려 주세요.")));
            }
            None => {
                info!("Submission {} refused: empty topic", request_id);
                return Ok(HttpResponse::BadRequest()
                    .json(GenerateReply::failure("주제를 입력해 주세요.")));
            }
        }
    } // Write lock released before the network await

    info!(
        "Submission {} started - Topic length: {} chars",
        request_id,
        topic.chars().count()
    );

    let outcome = match &state.generator {
        Some(generator) => generator.generate_text(&blog_post_prompt(&topic)).await,
        // Missing credential fails locally, before any network attempt
        None => Err(BlogMentorError::config("GEMINI_API_KEY is not configured")),
    };

    let mut session = state.session.write().await;
    match outcome {
        Ok(raw) => {
            if let Some(next) = session.apply(&GenerationEvent::Completed { raw: raw.clone() }) {
                *session = next;
            }
            info!(
                "Submission {} succeeded - Response length: {} chars",
                request_id,
                raw.chars().count()
            );

            let post = parse_post(&raw);
            Ok(HttpResponse::Ok().json(GenerateReply::completed(raw, post)))
        }
        Err(e) => {
            error!("Submission {} failed: {}", request_id, e);
            if let Some(next) = session.apply(&GenerationEvent::Failed {
                message: GENERATION_ERROR_MESSAGE.to_string(),
            }) {
                *session = next;
            }

            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(GenerateReply::failure(GENERATION_ERROR_MESSAGE)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use blogmentor_common::{AppConfig, Result};
    use blogmentor_llm::TextGenerator;
    use blogmentor_post::GenerationState;
    use std::sync::Arc;

    /// Backend stub: Some(text) completes, None fails
    struct StubGenerator {
        text: Option<String>,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            match &self.text {
                Some(text) => Ok(text.clone()),
                None => Err(BlogMentorError::generation("stub failure")),
            }
        }
    }

    fn stub_state(text: Option<&str>) -> Arc<AppState> {
        let generator: Arc<dyn TextGenerator> = Arc::new(StubGenerator {
            text: text.map(str::to_string),
        });
        Arc::new(AppState::with_generator(
            AppConfig::default(),
            Some(generator),
        ))
    }

    async fn post_topic(
        state: Arc<AppState>,
        topic: &str,
    ) -> (actix_web::http::StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(generate)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({ "topic": topic }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_generate_success() {
        let state = stub_state(Some(
            "제목\n부제\n본문\n40년 현장에서 증명된 해답을 원하십니까?\n홈페이지: https://example.com",
        ));
        let (status, body) = post_topic(state.clone(), "스마트공장 도입").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["post"]["title"], "제목");
        assert_eq!(body["post"]["cta"][1]["kind"], "link");

        let session = state.session.read().await;
        assert!(matches!(&*session, GenerationState::Succeeded { .. }));
    }

    #[actix_web::test]
    async fn test_empty_topic_refused_without_transition() {
        let state = stub_state(Some("제목"));
        let (status, body) = post_topic(state.clone(), "   ").await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let session = state.session.read().await;
        assert_eq!(*session, GenerationState::Idle);
    }

    #[actix_web::test]
    async fn test_missing_credential_fails_locally() {
        let state = Arc::new(AppState::with_generator(AppConfig::default(), None));
        let (status, body) = post_topic(state.clone(), "품질 관리").await;

        assert_eq!(status, actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], GENERATION_ERROR_MESSAGE);

        let session = state.session.read().await;
        assert!(matches!(&*session, GenerationState::Failed { .. }));
    }

    #[actix_web::test]
    async fn test_failure_clears_previous_result() {
        let state = stub_state(None);
        *state.session.write().await = GenerationState::Succeeded {
            raw: "이전 결과".to_string(),
        };

        let (status, body) = post_topic(state.clone(), "해외 공장 관리").await;

        assert_eq!(status, actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], GENERATION_ERROR_MESSAGE);

        let session = state.session.read().await;
        assert_eq!(
            *session,
            GenerationState::Failed {
                message: GENERATION_ERROR_MESSAGE.to_string()
            }
        );
    }
}
