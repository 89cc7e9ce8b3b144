//! JSON body extractor that checks field types and `validator` rules
//! before the handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tagnotes_core::error::CoreError;
use tagnotes_core::validation::{
    collect_violations, merge_violations, shape_violations, strip_fields, BodyShape,
};
use validator::Validate;

use crate::error::AppError;

/// A deserialized and validated JSON request body.
///
/// - Syntactically malformed JSON or a wrong content type produce
///   [`AppError::BadRequest`].
/// - Mistyped fields (including explicit `null`) and rule violations are
///   reported together as [`CoreError::Validation`], one entry per field.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateNote>) -> AppResult<Json<Note>> {
///     // `input` already satisfies its `#[validate]` rules here.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + BodyShape,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let shape = shape_violations(&body, T::FIELDS);
        let Some(object) = body.as_object_mut() else {
            return Err(CoreError::Validation(shape).into());
        };
        strip_fields(object, &shape);

        let value: T = serde_json::from_value(body)
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        let rules = match value.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_violations(&errors),
        };
        if !shape.is_empty() || !rules.is_empty() {
            return Err(CoreError::Validation(merge_violations(shape, rules)).into());
        }

        Ok(Self(value))
    }
}
