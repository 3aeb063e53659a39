use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{Coords, Reporter};

/// Request DTO for submitting a report
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    /// Issue category; empty or missing means "Other"
    #[validate(length(max = 100, message = "Category must not exceed 100 characters"))]
    #[schema(example = "Pothole")]
    pub category: Option<String>,

    #[validate(length(max = 10000, message = "Description must not exceed 10000 characters"))]
    pub description: Option<String>,

    pub coords: Option<Coords>,

    #[validate(length(max = 1000, message = "Address must not exceed 1000 characters"))]
    pub address: Option<String>,

    /// Defaults to an anonymous "Citizen" reporter
    pub reporter: Option<Reporter>,

    /// Embedded photo as `data:<mime>;base64,<body>`; anything else is ignored
    #[schema(value_type = Option<String>, example = "data:image/png;base64,iVBORw0KGgo=")]
    pub photo_data_url: Option<Value>,
}

/// Request DTO for patching a report
///
/// Fields are applied independently in the order status, department, review.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReportDto {
    #[validate(length(max = 100, message = "Status must not exceed 100 characters"))]
    #[schema(example = "In Progress")]
    pub status: Option<String>,

    #[validate(length(max = 100, message = "Department must not exceed 100 characters"))]
    pub department: Option<String>,

    pub review: Option<ReviewInputDto>,
}

/// Citizen review as submitted; ignored unless `rating` is a number
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReviewInputDto {
    #[schema(value_type = Option<f64>, example = 4)]
    pub rating: Option<Value>,

    #[schema(value_type = Option<String>)]
    pub comment: Option<Value>,
}

impl ReviewInputDto {
    /// Numeric rating, if one was supplied
    pub fn numeric_rating(&self) -> Option<f64> {
        self.rating.as_ref().and_then(Value::as_f64)
    }
}

/// Coerce a review comment to text.
///
/// Missing, null, `false`, `0` and `""` become empty; strings pass through;
/// anything else becomes its JSON text.
pub fn coerce_comment(comment: Option<&Value>) -> String {
    match comment {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}
