/*!
 * Mock title generator for testing.
 *
 * Provides a mock implementation of the TitleGenerator port that simulates
 * different behaviors:
 * - `MockTitleGenerator::working()` - Always succeeds with a fixed title
 * - `MockTitleGenerator::failing()` - Always fails with an error
 * - `MockTitleGenerator::empty()` - Succeeds but returns whitespace output
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ytchapters::errors::ProviderError;
use ytchapters::providers::{TitleGenerator, TitleRequest};

/// Behavior mode for the mock generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a fixed title
    Working,
    /// Always fails with an error
    Failing,
    /// Returns whitespace-only output
    Empty,
}

/// Mock title generator for testing titling behavior
#[derive(Debug)]
pub struct MockTitleGenerator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of generate calls received
    request_count: Arc<AtomicUsize>,
    /// Prompts received, in call order
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTitleGenerator {
    /// Create a new mock generator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock generator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock generator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns whitespace-only output
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Handle for asserting on the number of calls after the mock is boxed
    pub fn request_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.request_count)
    }

    /// Handle for asserting on received prompts after the mock is boxed
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl TitleGenerator for MockTitleGenerator {
    async fn generate(&self, request: TitleRequest) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(request.prompt.clone());

        match self.behavior {
            MockBehavior::Working => Ok("Sample Chapter Title".to_string()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock generator failure".to_string(),
            )),
            MockBehavior::Empty => Ok("   \n".to_string()),
        }
    }

    async fn test_connection(&self, _model: &str) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock generator failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
