use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use super::{InferenceError, SymptomModel};

/// Fitted tf-idf + linear classifier exported as JSON by the training run
///
/// `coefficients` holds one row per class, or a single row for a binary
/// model where a positive decision score selects `classes[1]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
}

/// Single-label symptom classifier adapter
///
/// Reimplements the fitted vectorize-then-score pipeline: lowercase word
/// tokens of at least two characters, term frequency times idf, L2
/// normalization, then linear decision scores over the class set.
pub struct SymptomClassifier {
    artifact: ClassifierArtifact,
}

impl SymptomClassifier {
    /// Load and validate the artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();

        tracing::info!(path = %path.display(), "Loading symptom classifier");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
        let artifact: ClassifierArtifact = serde_json::from_str(&contents)
            .map_err(|e| InferenceError::ArtifactLoad(format!("parse artifact: {}", e)))?;

        let classifier = Self::from_artifact(artifact)?;

        tracing::info!(
            classes = classifier.artifact.classes.len(),
            vocabulary = classifier.artifact.vocabulary.len(),
            "Symptom classifier loaded"
        );

        Ok(classifier)
    }

    /// Build a classifier from an in-memory artifact
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, InferenceError> {
        let n_features = artifact.vocabulary.len();
        let n_classes = artifact.classes.len();

        if n_classes < 2 {
            return Err(InferenceError::ArtifactLoad(format!(
                "expected at least 2 classes, got {}",
                n_classes
            )));
        }
        if artifact.idf.len() != n_features {
            return Err(InferenceError::ArtifactLoad(format!(
                "idf length {} does not match vocabulary size {}",
                artifact.idf.len(),
                n_features
            )));
        }
        // A binary model carries a single coefficient row
        let expected_rows = if n_classes == 2 { 1 } else { n_classes };
        if artifact.coefficients.len() != expected_rows
            || artifact.intercepts.len() != expected_rows
        {
            return Err(InferenceError::ArtifactLoad(format!(
                "expected {} coefficient rows for {} classes, got {} (intercepts: {})",
                expected_rows,
                n_classes,
                artifact.coefficients.len(),
                artifact.intercepts.len()
            )));
        }
        if let Some(row) = artifact
            .coefficients
            .iter()
            .find(|row| row.len() != n_features)
        {
            return Err(InferenceError::ArtifactLoad(format!(
                "coefficient row length {} does not match vocabulary size {}",
                row.len(),
                n_features
            )));
        }

        Ok(Self { artifact })
    }

    /// tf·idf feature vector with L2 normalization
    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut features = vec![0.0f32; self.artifact.idf.len()];

        for token in tokenize(text) {
            if let Some(&index) = self.artifact.vocabulary.get(&token) {
                features[index] += 1.0;
            }
        }
        for (value, idf) in features.iter_mut().zip(&self.artifact.idf) {
            *value *= idf;
        }

        let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in features.iter_mut() {
                *value /= norm;
            }
        }
        features
    }
}

impl SymptomModel for SymptomClassifier {
    fn predict(&self, symptoms: &str) -> Result<String, InferenceError> {
        let features = self.vectorize(symptoms);

        let scores: Vec<f32> = self
            .artifact
            .coefficients
            .iter()
            .zip(&self.artifact.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(&features)
                    .map(|(w, x)| w * x)
                    .sum::<f32>()
                    + intercept
            })
            .collect();

        let label = if scores.len() == 1 {
            // Binary decision: positive score selects the second class
            if scores[0] > 0.0 {
                &self.artifact.classes[1]
            } else {
                &self.artifact.classes[0]
            }
        } else {
            let best = scores
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
                .map(|(index, _)| index)
                .unwrap_or(0);
            &self.artifact.classes[best]
        };

        tracing::debug!(label = %label, "Classified symptoms");
        Ok(label.clone())
    }
}

/// Lowercase word tokens of at least two characters, the same token
/// pattern the vectorizer was fitted with
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_single_chars_and_punctuation() {
        assert_eq!(tokenize("I have a mild fever!"), vec!["have", "mild", "fever"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Fever, COUGH"), vec!["fever", "cough"]);
    }
}
