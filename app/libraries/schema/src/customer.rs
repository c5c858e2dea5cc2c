use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {field} label: {label}")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionType {
    Basic,
    Standard,
    Premium,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }
}

impl FromStr for SubscriptionType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(Self::Basic),
            "Standard" => Ok(Self::Standard),
            "Premium" => Ok(Self::Premium),
            other => Err(UnknownLabel {
                field: "subscription_type",
                label: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Other" => Ok(Self::Other),
            other => Err(UnknownLabel {
                field: "gender",
                label: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractLength {
    Monthly,
    Quarterly,
    Yearly,
}

impl ContractLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }
}

impl FromStr for ContractLength {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monthly" => Ok(Self::Monthly),
            "Quarterly" => Ok(Self::Quarterly),
            "Yearly" => Ok(Self::Yearly),
            other => Err(UnknownLabel {
                field: "contract_length",
                label: other.to_owned(),
            }),
        }
    }
}

/// One validated customer submission. The persisted row also carries a
/// `created_at` timestamp assigned by the storage sink, never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub age: i64,
    pub subscription_type: SubscriptionType,
    pub gender: Gender,
    pub contract_length: ContractLength,
    pub usage_frequency: i64,
    pub total_spend: f64,
    pub support_calls: i64,
}

impl CustomerRecord {
    #[inline]
    pub fn insert_query() -> &'static str {
        "INSERT INTO app.customer_records \
         (age, subscription_type, gender, contract_length, usage_frequency, total_spend, support_calls, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
    }
}
