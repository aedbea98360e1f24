use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    Corporation,
    Cooperative,
    NonProfit,
    SoleProprietorship,
}

impl CompanyType {
    pub const ALL: [CompanyType; 4] = [
        CompanyType::Corporation,
        CompanyType::Cooperative,
        CompanyType::NonProfit,
        CompanyType::SoleProprietorship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Corporation => "Corporation",
            CompanyType::Cooperative => "Cooperative",
            CompanyType::NonProfit => "NonProfit",
            CompanyType::SoleProprietorship => "SoleProprietorship",
        }
    }

    /// `[Corporation, Cooperative, ...]`, used in validation messages.
    pub fn allowed_list() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(CompanyType::as_str).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown company type: {0}")]
pub struct UnknownCompanyType(pub String);

impl FromStr for CompanyType {
    type Err = UnknownCompanyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownCompanyType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub employees: i32,
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

/// Validated fields for create/update. Built by the request DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInput {
    pub name: String,
    pub description: String,
    pub employees: i32,
    pub registered: bool,
    pub company_type: CompanyType,
}

impl CompanyInput {
    pub fn into_company(self, id: Uuid) -> Company {
        Company {
            id,
            name: self.name,
            description: self.description,
            employees: self.employees,
            registered: self.registered,
            company_type: self.company_type,
        }
    }
}
