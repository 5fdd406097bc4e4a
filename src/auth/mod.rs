mod auth_manager;

pub use auth_manager::{apply_organization, ApiKeyAuthManager, AuthManager, ORGANIZATION_HEADER};
