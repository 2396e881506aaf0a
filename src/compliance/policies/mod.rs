mod status_classifier;

pub use status_classifier::{StatusClassifier, HEALTHY_THRESHOLD, WARNING_THRESHOLD};
