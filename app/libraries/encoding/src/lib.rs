use app_schema::customer::CustomerRecord;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const FEATURE_LEN: usize = 7;

/// Model input in the fixed training order:
/// [age, subscription, gender, contract, usage, spend, support calls].
pub type FeatureVector = [f64; FEATURE_LEN];

#[derive(Debug, Clone, Error, PartialEq)]
#[error("no code for {field} label {label:?} in encoding table v{version}")]
pub struct EncodingError {
    pub field: &'static str,
    pub label: String,
    pub version: u32,
}

/// Categorical label -> integer code lookup, versioned as a unit with the
/// predictive artifact. The codes are not self-describing: a table that
/// drifts from the one used at training time produces silently wrong
/// predictions, which is why artifacts embed `fingerprint()` and the model
/// loader refuses a mismatch.
#[derive(Debug, Clone, Copy)]
pub struct EncodingTable {
    pub version: u32,
    pub subscription_type: &'static [(&'static str, f64)],
    pub gender: &'static [(&'static str, f64)],
    pub contract_length: &'static [(&'static str, f64)],
}

/// Table the current artifact generation was trained with. Any change to the
/// labels or codes must become a new table with a new version.
pub const ENCODING_V1: EncodingTable = EncodingTable {
    version: 1,
    subscription_type: &[("Basic", 0.0), ("Standard", 1.0), ("Premium", 2.0)],
    gender: &[("Male", 0.0), ("Female", 1.0), ("Other", 2.0)],
    contract_length: &[("Monthly", 0.0), ("Quarterly", 1.0), ("Yearly", 2.0)],
};

impl EncodingTable {
    fn code(
        &self,
        field: &'static str,
        table: &[(&'static str, f64)],
        label: &str,
    ) -> Result<f64, EncodingError> {
        table
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, code)| *code)
            .ok_or_else(|| EncodingError {
                field,
                label: label.to_owned(),
                version: self.version,
            })
    }

    /// Pure function of the record; element order must match the training
    /// pipeline exactly.
    pub fn encode(&self, record: &CustomerRecord) -> Result<FeatureVector, EncodingError> {
        Ok([
            record.age as f64,
            self.code(
                "subscription_type",
                self.subscription_type,
                record.subscription_type.as_str(),
            )?,
            self.code("gender", self.gender, record.gender.as_str())?,
            self.code(
                "contract_length",
                self.contract_length,
                record.contract_length.as_str(),
            )?,
            record.usage_frequency as f64,
            record.total_spend,
            record.support_calls as f64,
        ])
    }

    fn canonical(&self) -> String {
        let mut out = format!("version={}", self.version);
        for (name, table) in [
            ("subscription_type", self.subscription_type),
            ("gender", self.gender),
            ("contract_length", self.contract_length),
        ] {
            let cells = table
                .iter()
                .map(|(label, code)| format!("{}:{}", label, code))
                .collect::<Vec<String>>();
            out.push_str(&format!(";{}={}", name, cells.join(",")));
        }
        out
    }

    /// Stable identity of this table. Artifacts carry the fingerprint of the
    /// table they were trained against so drift is caught at load time.
    pub fn fingerprint(&self) -> String {
        format!("sha256:{:x}", Sha256::digest(self.canonical().as_bytes()))
    }
}
