use app_error::AppError;
use app_schema::customer::{ContractLength, CustomerRecord, Gender, SubscriptionType};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body shared by `/predict` and `/record`: the seven customer
/// attributes, categorical fields as their human-readable labels.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct PostPredictInput {
    #[validate(range(min = 10, max = 100))]
    pub age: i64,
    pub subscription_type: String,
    pub gender: String,
    pub contract_length: String,
    #[validate(range(min = 0, max = 500))]
    pub usage_frequency: i64,
    #[validate(range(min = 0.0))]
    pub total_spend: f64,
    #[validate(range(min = 0, max = 500))]
    pub support_calls: i64,
}

impl PostPredictInput {
    /// Gate to the rest of the pipeline: storage, encoding, and inference
    /// never see an input that fails here. The error names every violated
    /// field.
    pub fn parse(&self) -> Result<CustomerRecord, AppError> {
        let mut invalid: Vec<String> = Vec::new();
        if let Err(errors) = self.validate() {
            invalid.extend(errors.field_errors().keys().map(|k| k.to_string()));
        }
        if !self.total_spend.is_finite() {
            invalid.push("total_spend".to_owned());
        }
        let subscription_type = self.subscription_type.parse::<SubscriptionType>();
        let gender = self.gender.parse::<Gender>();
        let contract_length = self.contract_length.parse::<ContractLength>();
        if subscription_type.is_err() {
            invalid.push("subscription_type".to_owned());
        }
        if gender.is_err() {
            invalid.push("gender".to_owned());
        }
        if contract_length.is_err() {
            invalid.push("contract_length".to_owned());
        }
        match (subscription_type, gender, contract_length) {
            (Ok(subscription_type), Ok(gender), Ok(contract_length)) if invalid.is_empty() => {
                Ok(CustomerRecord {
                    age: self.age,
                    subscription_type,
                    gender,
                    contract_length,
                    usage_frequency: self.usage_frequency,
                    total_spend: self.total_spend,
                    support_calls: self.support_calls,
                })
            }
            _ => {
                invalid.sort();
                invalid.dedup();
                Err(AppError::validation(&invalid))
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PostPredictOutput {
    pub status: String,
    pub predicted_tenure: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_input() -> PostPredictInput {
        PostPredictInput {
            age: 30,
            subscription_type: "Premium".to_owned(),
            gender: "Female".to_owned(),
            contract_length: "Yearly".to_owned(),
            usage_frequency: 50,
            total_spend: 1000.0,
            support_calls: 50,
        }
    }

    #[test]
    fn check_valid_input_parses() {
        let record = valid_input().parse().unwrap();
        assert_eq!(record.age, 30);
        assert_eq!(record.subscription_type, SubscriptionType::Premium);
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.contract_length, ContractLength::Yearly);
    }

    #[test]
    fn check_age_boundaries() {
        for age in [10, 100] {
            let mut input = valid_input();
            input.age = age;
            assert!(input.parse().is_ok(), "age {} must be accepted", age);
        }
        for age in [9, 101] {
            let mut input = valid_input();
            input.age = age;
            let err = input.parse().unwrap_err();
            assert!(err.message.contains("age"), "age {} must be rejected", age);
        }
    }

    #[test]
    fn check_usage_frequency_boundaries() {
        for usage in [0, 500] {
            let mut input = valid_input();
            input.usage_frequency = usage;
            assert!(input.parse().is_ok(), "usage {} must be accepted", usage);
        }
        for usage in [-1, 501] {
            let mut input = valid_input();
            input.usage_frequency = usage;
            let err = input.parse().unwrap_err();
            assert!(err.message.contains("usage_frequency"));
        }
    }

    #[test]
    fn check_support_calls_boundaries() {
        for calls in [-1, 501] {
            let mut input = valid_input();
            input.support_calls = calls;
            assert!(input.parse().is_err());
        }
    }

    #[test]
    fn check_negative_spend_rejected() {
        let mut input = valid_input();
        input.total_spend = -0.01;
        let err = input.parse().unwrap_err();
        assert!(err.message.contains("total_spend"));
    }

    #[test]
    fn check_unknown_subscription_rejected() {
        let mut input = valid_input();
        input.subscription_type = "Gold".to_owned();
        let err = input.parse().unwrap_err();
        assert_eq!(err.status.as_u16(), 422);
        assert_eq!(err.code, app_error::VALIDATION_ERROR_CODE);
        assert!(err.message.contains("subscription_type"));
    }

    #[test]
    fn check_multiple_violations_all_reported() {
        let mut input = valid_input();
        input.age = 5;
        input.gender = "Unknown".to_owned();
        let err = input.parse().unwrap_err();
        assert!(err.message.contains("age"));
        assert!(err.message.contains("gender"));
    }
}
