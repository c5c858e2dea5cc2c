use app_encoding::{EncodingTable, FEATURE_LEN, FeatureVector};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact has {found} weights, expected 7")]
    WeightCount { found: usize },
    #[error("model artifact weight {index} is not finite")]
    BadWeight { index: usize },
    #[error(
        "model artifact was trained against encoder {artifact}, runtime encoder is {runtime}"
    )]
    EncoderMismatch { artifact: String, runtime: String },
    #[error("inference produced a non-finite value")]
    NonFinite,
}

/// Opaque mapping from a feature vector to a tenure estimate in months.
/// Implementations must be pure with respect to the process lifetime: loaded
/// once at startup, read-only afterwards.
pub trait Predictor: Send + Sync {
    fn infer(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// On-disk artifact bundle. `encoding_fingerprint` ties the weights to the
/// exact categorical encoding they were trained with.
#[derive(Debug, Deserialize)]
struct TenureArtifact {
    version: u32,
    encoding_fingerprint: String,
    weights: Vec<f64>,
    intercept: f64,
}

/// Linear tenure model: `weights . features + intercept`.
#[derive(Debug)]
pub struct TenureModel {
    version: u32,
    weights: [f64; FEATURE_LEN],
    intercept: f64,
}

impl TenureModel {
    /// Loads and verifies an artifact. Every failure here is fatal to
    /// startup: the service must not come up with a missing or drifted model.
    pub fn load(path: impl AsRef<Path>, encoder: &EncodingTable) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path)?;
        let artifact: TenureArtifact = serde_json::from_str(&raw)?;

        let runtime_fingerprint = encoder.fingerprint();
        if artifact.encoding_fingerprint != runtime_fingerprint {
            return Err(ModelError::EncoderMismatch {
                artifact: artifact.encoding_fingerprint,
                runtime: runtime_fingerprint,
            });
        }

        let weights: [f64; FEATURE_LEN] = artifact
            .weights
            .as_slice()
            .try_into()
            .map_err(|_| ModelError::WeightCount {
                found: artifact.weights.len(),
            })?;
        if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
            return Err(ModelError::BadWeight { index });
        }

        Ok(Self {
            version: artifact.version,
            weights,
            intercept: artifact.intercept,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

impl Predictor for TenureModel {
    fn infer(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let estimate = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        if !estimate.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use app_encoding::ENCODING_V1;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_artifact(weights: &str, fingerprint: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":1,"encoding_fingerprint":"{}","weights":{},"intercept":2.0}}"#,
            fingerprint, weights
        )
        .unwrap();
        file
    }

    #[test]
    fn check_load_and_infer() {
        let file = write_artifact(
            "[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5]",
            &ENCODING_V1.fingerprint(),
        );
        let model = TenureModel::load(file.path(), &ENCODING_V1).unwrap();
        assert_eq!(model.version(), 1);
        let estimate = model
            .infer(&[30.0, 2.0, 1.0, 2.0, 50.0, 1000.0, 50.0])
            .unwrap();
        // 1.0 * 30 + 0.5 * 50 + intercept 2.0
        assert_eq!(estimate, 57.0);
    }

    #[test]
    fn check_stale_fingerprint_refused() {
        let file = write_artifact("[0, 0, 0, 0, 0, 0, 0]", "sha256:0000");
        match TenureModel::load(file.path(), &ENCODING_V1) {
            Err(ModelError::EncoderMismatch { artifact, .. }) => {
                assert_eq!(artifact, "sha256:0000")
            }
            other => panic!("expected EncoderMismatch, got {:?}", other),
        }
    }

    #[test]
    fn check_wrong_weight_count_refused() {
        let file = write_artifact("[1.0, 2.0]", &ENCODING_V1.fingerprint());
        match TenureModel::load(file.path(), &ENCODING_V1) {
            Err(ModelError::WeightCount { found }) => assert_eq!(found, 2),
            other => panic!("expected WeightCount, got {:?}", other),
        }
    }

    #[test]
    fn check_missing_file_refused() {
        assert!(TenureModel::load("does-not-exist.json", &ENCODING_V1).is_err());
    }

    #[test]
    fn check_shipped_artifact_loads() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../../artifacts/tenure_model.json"
        );
        let model = TenureModel::load(path, &ENCODING_V1).unwrap();
        let estimate = model
            .infer(&[30.0, 2.0, 1.0, 2.0, 50.0, 1000.0, 50.0])
            .unwrap();
        assert!(estimate.is_finite());
    }
}
