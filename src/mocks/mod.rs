//! Mock implementations for testing
//!
//! Recording stand-ins for the transport and auth seams, so services and the
//! dataset/training/inference layers can be exercised without HTTP calls.

mod mock_auth;
mod mock_transport;

pub use mock_auth::MockAuthManager;
pub use mock_transport::{MockHttpTransport, MockRequest};

use crate::client::{OpenTrainClient, OpenTrainClientBuilder, OpenTrainConfig};
use std::sync::Arc;

/// A client wired to the given mock transport.
pub fn mock_client(transport: &MockHttpTransport, config: OpenTrainConfig) -> Arc<dyn OpenTrainClient> {
    OpenTrainClientBuilder::new()
        .with_config(config)
        .with_transport(Arc::new(transport.clone()))
        .with_auth_manager(Arc::new(MockAuthManager::new()))
        .build()
        .expect("mock client builds")
}

/// Config suitable for tests, staging files under `cache_dir`.
pub fn test_config(cache_dir: &std::path::Path) -> OpenTrainConfig {
    OpenTrainConfig::new("sk-test-key-123")
        .with_cache_dir(cache_dir)
        .with_delete_retry(crate::client::DeleteRetryPolicy {
            max_attempts: 3,
            delay: std::time::Duration::from_millis(1),
        })
}
