mod topic_classifier;

pub use topic_classifier::*;
