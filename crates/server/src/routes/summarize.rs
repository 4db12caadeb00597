use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::{error, info};

use textbrief_common::TextBriefError;
use textbrief_llm::SummaryRequest;

use crate::state::AppState;
use crate::types::{ErrorResponse, ValidationErrorResponse};

#[post("/text/summarize")]
pub async fn summarize(
    req: web::Json<SummaryRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    info!(
        "Processing text summarization request for {} characters",
        req.text.chars().count()
    );

    match state.summarizer.summarize(&req).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(error_response(e)),
    }
}

/// Map an error kind onto the corresponding HTTP failure response
fn error_response(error: TextBriefError) -> HttpResponse {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match error {
        TextBriefError::Validation(errors) => {
            HttpResponse::build(status).json(ValidationErrorResponse {
                title: "Validation Failed".to_string(),
                errors,
            })
        }
        TextBriefError::Provider {
            status: provider_status,
            body,
        } => {
            error!(
                "Provider request failed with status {}: {}",
                provider_status, body
            );
            HttpResponse::build(status).json(ErrorResponse {
                title: "External Service Error".to_string(),
                detail: "An error occurred while processing your request with the AI service."
                    .to_string(),
            })
        }
        TextBriefError::Network(msg) => {
            error!("Provider unreachable: {}", msg);
            HttpResponse::build(status).json(ErrorResponse {
                title: "External Service Error".to_string(),
                detail: "The AI service could not be reached. Please try again later.".to_string(),
            })
        }
        TextBriefError::Timeout => {
            error!("Timeout occurred during text summarization");
            HttpResponse::build(status).json(ErrorResponse {
                title: "Request Timeout".to_string(),
                detail: "The request took too long to process. Please try again.".to_string(),
            })
        }
        other => {
            error!("Unexpected error during text summarization: {}", other);
            HttpResponse::build(status).json(ErrorResponse {
                title: "Internal Server Error".to_string(),
                detail: "An unexpected error occurred while processing your request.".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbrief_common::FieldError;

    #[test]
    fn test_error_status_mapping() {
        let resp = error_response(TextBriefError::Validation(vec![FieldError::new(
            "text",
            "Text is required",
        )]));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = error_response(TextBriefError::Provider {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = error_response(TextBriefError::network("refused"));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = error_response(TextBriefError::Timeout);
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

        let resp = error_response(TextBriefError::malformed_reply("no content"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
