//! Sentiment classifier contract
//!
//! The pipeline only needs a synchronous function from text to a
//! [`Classification`]. How the label is derived is up to the implementation;
//! [`PolarityClassifier`] is a rule-based one shipped with the crate.

pub mod polarity;

pub use polarity::{PolarityClassifier, PolarityTable};

use std::sync::Arc;

use crate::error::ClassifierError;
use crate::types::Classification;

/// Text-to-sentiment capability
pub trait Classifier: Send + Sync {
    /// Classify one sentence or clause
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(text)
    }
}

impl<C: Classifier + ?Sized> Classifier for Arc<C> {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(text)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(text)
    }
}

/// Adapter turning a closure into a [`Classifier`]
pub struct FnClassifier<F>(F);

impl<F> FnClassifier<F>
where
    F: Fn(&str) -> Result<Classification, ClassifierError> + Send + Sync,
{
    /// Wrap a closure
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Classifier for FnClassifier<F>
where
    F: Fn(&str) -> Result<Classification, ClassifierError> + Send + Sync,
{
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        (self.0)(text)
    }
}

impl<F> std::fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnClassifier").field(&"<fn>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_fn_classifier() {
        let clf = FnClassifier::new(|text: &str| {
            Ok(Classification::certain(if text.contains("ok") {
                Sentiment::Positive
            } else {
                Sentiment::Neutral
            }))
        });
        assert_eq!(clf.classify("ok").unwrap().label, Sentiment::Positive);
        assert_eq!(clf.classify("hmm").unwrap().label, Sentiment::Neutral);
    }

    #[test]
    fn test_trait_object_through_arc() {
        let clf: Arc<dyn Classifier> = Arc::new(FnClassifier::new(|_: &str| {
            Err(ClassifierError::Rejected("offline".to_string()))
        }));
        let err = clf.classify("anything").unwrap_err();
        assert_eq!(err.to_string(), "classifier rejected input: offline");
    }
}
