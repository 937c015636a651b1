//! HTTP error response conversion.
//!
//! Every handler failure funnels through [`ApiError`], which renders the
//! platform-wide envelope: validation failures become a 400 with itemized
//! per-field details, logical absence becomes a 404, and anything else is a
//! 500 carrying the underlying message.

use atrium_core::AppError;
use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// One violated field in a validation failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Uniform error envelope: `{ success: false, error, details? }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Wrapper type for [`AppError`] to implement `IntoResponse`; required by
/// the orphan rules since `AppError` lives in atrium-core.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let mut violation = ValidationError::new("body");
        violation.message = Some(rejection.body_text().into());
        let mut errors = ValidationErrors::new();
        errors.add("body", violation);
        ApiError(AppError::Validation(errors))
    }
}

/// JSON body extractor that renders malformed or mistyped payloads through
/// the same envelope as field validation failures, rather than axum's
/// plain-text 422 rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

fn collect_details(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = match prefix {
            Some(p) => format!("{}.{}", p, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", name));
                    out.push(FieldError {
                        field: name.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_details(Some(&name), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_details(Some(&format!("{}[{}]", name, index)), nested, out);
                }
            }
        }
    }
}

/// Flatten a validation failure into the itemized `details` array.
pub fn validation_details(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut details = Vec::new();
    collect_details(None, errors, &mut details);
    details
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation(ref errors) => {
                tracing::debug!(error = %self.0, "Request failed validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        success: false,
                        error: "Validation error".to_string(),
                        details: Some(validation_details(errors)),
                    }),
                )
                    .into_response()
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    success: false,
                    error: message,
                    details: None,
                }),
            )
                .into_response(),
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    success: false,
                    error: self.0.to_string(),
                    details: None,
                }),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, error_type = other.error_type(), "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        success: false,
                        error: other.to_string(),
                        details: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::models::CreateOrganizationRequest;
    use validator::Validate;

    #[test]
    fn details_name_every_violated_field() {
        let request: CreateOrganizationRequest = serde_json::from_value(serde_json::json!({
            "name": "A",
            "domain": "ab",
            "plan": "Starter",
            "users": 5,
            "status": "Active"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let details = validation_details(&errors);

        let fields: Vec<&str> = details.iter().map(|d| d.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"domain"));
    }
}
