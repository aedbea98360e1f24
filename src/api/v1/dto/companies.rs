/*
 * Responsibility
 * - Companies の request/response DTO
 * - validate() で欠落フィールドと type の妥当性をまとめて検査し、CompanyInput に変換する
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CompanyInput, CompanyType};

// companies.name is VARCHAR(255)
pub const MAX_NAME_CHARS: usize = 255;

/// Body of `POST /companies` and `PATCH /companies/{id}`.
///
/// Every field is optional at the serde level so that all missing fields can
/// be reported in one message instead of failing on the first one.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub employees: Option<i32>,
    pub registered: Option<bool>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
}

impl CompanyRequest {
    pub fn validate(self) -> Result<CompanyInput, AppError> {
        let mut missing = Vec::new();
        let name = self.name.filter(|n| !n.trim().is_empty());
        if name.is_none() {
            missing.push("name");
        }
        if self.employees.is_none() {
            missing.push("employees");
        }
        if self.registered.is_none() {
            missing.push("registered");
        }
        if self.company_type.is_none() {
            missing.push("type");
        }

        let (Some(name), Some(employees), Some(registered), Some(raw_type)) =
            (name, self.employees, self.registered, self.company_type)
        else {
            return Err(AppError::bad_request(format!(
                "field validation error, missing fields: [{}]",
                missing.join(", ")
            )));
        };

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(AppError::bad_request(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        let description = self.description.unwrap_or_default();
        if employees < 0 {
            return Err(AppError::bad_request("employees cannot be negative"));
        }

        let company_type = raw_type.parse::<CompanyType>().map_err(|_| {
            AppError::bad_request(format!(
                "invalid company type, must be one of these: {}",
                CompanyType::allowed_list()
            ))
        })?;

        Ok(CompanyInput {
            name,
            description,
            employees,
            registered,
            company_type,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CompanyRequest {
        serde_json::from_value(json).unwrap()
    }

    fn full() -> serde_json::Value {
        serde_json::json!({
            "name": "Acme",
            "description": "anvils and rockets",
            "employees": 40,
            "registered": true,
            "type": "Corporation",
        })
    }

    #[test]
    fn complete_request_becomes_input() {
        let input = request(full()).validate().unwrap();

        assert_eq!(input.name, "Acme");
        assert_eq!(input.employees, 40);
        assert!(input.registered);
        assert_eq!(input.company_type, CompanyType::Corporation);
    }

    #[test]
    fn description_is_optional() {
        let mut json = full();
        json.as_object_mut().unwrap().remove("description");

        let input = request(json).validate().unwrap();

        assert_eq!(input.description, "");
    }

    #[test]
    fn all_missing_fields_are_listed_together() {
        let err = CompanyRequest::default().validate().unwrap_err();

        assert!(err.is_bad_request());
        assert_eq!(
            err.to_string(),
            "field validation error, missing fields: [name, employees, registered, type]"
        );
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut json = full();
        json["name"] = serde_json::json!("   ");

        let err = request(json).validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "field validation error, missing fields: [name]"
        );
    }

    #[test]
    fn unknown_type_lists_the_allowed_values() {
        let mut json = full();
        json["type"] = serde_json::json!("Partnership");

        let err = request(json).validate().unwrap_err();

        assert!(err.is_bad_request());
        assert_eq!(
            err.to_string(),
            "invalid company type, must be one of these: [Corporation, Cooperative, NonProfit, SoleProprietorship]"
        );
    }

    #[test]
    fn negative_headcount_is_rejected() {
        let mut json = full();
        json["employees"] = serde_json::json!(-1);
        let err = request(json).validate().unwrap_err();

        assert!(err.is_bad_request());
        assert_eq!(err.to_string(), "employees cannot be negative");
    }

    #[test]
    fn name_longer_than_the_column_is_rejected() {
        let mut json = full();
        json["name"] = serde_json::json!("n".repeat(MAX_NAME_CHARS + 1));

        let err = request(json).validate().unwrap_err();

        assert!(err.is_bad_request());
        assert_eq!(err.to_string(), "name must be at most 255 characters");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut json = full();
        json["name"] = serde_json::json!("é".repeat(MAX_NAME_CHARS));

        let input = request(json).validate().unwrap();

        assert_eq!(input.name.chars().count(), MAX_NAME_CHARS);
    }
}
