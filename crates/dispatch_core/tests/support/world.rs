#![allow(dead_code)]

use dispatch_core::matching::{MatchingAlgorithm, MatchingAlgorithmType};
use dispatch_core::{DispatchConfig, DispatchRegistry, TripStartPolicy};

/// Builder for registries with non-default configuration.
#[derive(Debug, Default)]
pub struct TestRegistryBuilder {
    config: DispatchConfig,
    matcher: Option<Box<dyn MatchingAlgorithm>>,
}

impl TestRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matching(mut self, matching: MatchingAlgorithmType) -> Self {
        self.config = self.config.with_matching(matching);
        self
    }

    pub fn with_matcher(mut self, matcher: impl MatchingAlgorithm + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    pub fn confirm_before_start(mut self) -> Self {
        self.config = self.config.with_trip_start(TripStartPolicy::OnConfirm);
        self
    }

    pub fn build(self) -> DispatchRegistry {
        let registry = DispatchRegistry::with_config(self.config);
        match self.matcher {
            Some(matcher) => registry.with_matcher(matcher),
            None => registry,
        }
    }
}
