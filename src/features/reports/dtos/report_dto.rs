use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{NewReport, Report};

/// Fixed message returned whenever the submission payload is incomplete
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "All fields (description, category, latitude, longitude, image) are required.";

/// Request DTO for submitting a report
///
/// Every field is optional at the parsing layer so that an incomplete payload
/// is answered with the fixed required-fields message instead of a
/// deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: Option<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    /// Image URL or encoded reference
    #[validate(length(min = 1, message = "image is required"))]
    pub image: Option<String>,
}

impl CreateReportDto {
    /// Collapse the payload into a complete record.
    ///
    /// A field is rejected when it is absent, null, an empty string, or a
    /// zero coordinate. Returns `None` as soon as any field fails.
    pub fn into_record(self) -> Option<NewReport> {
        Some(NewReport {
            description: self.description.filter(|s| !s.is_empty())?,
            category: self.category.filter(|s| !s.is_empty())?,
            latitude: self.latitude.filter(|v| *v != 0.0)?,
            longitude: self.longitude.filter(|v| *v != 0.0)?,
            image: self.image.filter(|s| !s.is_empty())?,
        })
    }
}

/// Response DTO for a persisted report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            description: r.description,
            category: r.category,
            latitude: r.latitude,
            longitude: r.longitude,
            image: r.image,
            created_at: r.created_at,
        }
    }
}

/// Response DTO for a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportCreatedResponseDto {
    pub message: String,
    pub report: ReportResponseDto,
}

/// Response DTO for the report listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportListResponseDto {
    pub reports: Vec<ReportResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_dto() -> CreateReportDto {
        CreateReportDto {
            description: Some("pothole".to_string()),
            category: Some("road".to_string()),
            latitude: Some(1.5),
            longitude: Some(2.5),
            image: Some("http://x/img.png".to_string()),
        }
    }

    #[test]
    fn complete_payload_collapses_into_record() {
        let record = complete_dto().into_record().unwrap();

        assert_eq!(record.description, "pothole");
        assert_eq!(record.category, "road");
        assert_eq!(record.latitude, 1.5);
        assert_eq!(record.longitude, 2.5);
        assert_eq!(record.image, "http://x/img.png");
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut dto = complete_dto();
        dto.category = None;
        assert!(dto.into_record().is_none());

        let mut dto = complete_dto();
        dto.image = None;
        assert!(dto.into_record().is_none());
    }

    #[test]
    fn empty_string_is_rejected() {
        let mut dto = complete_dto();
        dto.description = Some(String::new());
        assert!(dto.into_record().is_none());
    }

    #[test]
    fn zero_coordinate_is_rejected() {
        let mut dto = complete_dto();
        dto.latitude = Some(0.0);
        assert!(dto.into_record().is_none());

        let mut dto = complete_dto();
        dto.longitude = Some(0.0);
        assert!(dto.into_record().is_none());
    }

    #[test]
    fn absent_json_keys_deserialize_as_none() {
        let dto: CreateReportDto = serde_json::from_str(r#"{"description":"pothole"}"#).unwrap();

        assert_eq!(dto.description.as_deref(), Some("pothole"));
        assert!(dto.category.is_none());
        assert!(dto.latitude.is_none());
        assert!(dto.longitude.is_none());
        assert!(dto.image.is_none());
    }

    #[test]
    fn null_json_values_deserialize_as_none() {
        let dto: CreateReportDto =
            serde_json::from_str(r#"{"description":null,"category":"road"}"#).unwrap();

        assert!(dto.description.is_none());
        assert_eq!(dto.category.as_deref(), Some("road"));
    }

    #[test]
    fn empty_strings_fail_field_validation() {
        let mut dto = complete_dto();
        dto.description = Some(String::new());
        assert!(dto.validate().is_err());

        assert!(complete_dto().validate().is_ok());
    }
}
