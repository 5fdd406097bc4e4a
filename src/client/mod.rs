mod advisory;
mod client_impl;
mod config;
mod factory;

pub use advisory::{Advisories, NONZERO_TEMPERATURE, PAID_DOWNLOAD};
pub use client_impl::OpenTrainClientImpl;
pub use config::{default_cache_dir, DeleteRetryPolicy, OpenTrainConfig};
pub use factory::OpenTrainClientBuilder;

use crate::errors::OpenTrainResult;
use crate::services::{
    completions::CompletionService, files::FileService, fine_tunes::FineTuneService,
};
use async_trait::async_trait;

#[async_trait]
pub trait OpenTrainClient: Send + Sync {
    fn files(&self) -> &dyn FileService;
    fn fine_tunes(&self) -> &dyn FineTuneService;
    fn completions(&self) -> &dyn CompletionService;

    fn config(&self) -> &OpenTrainConfig;

    /// Emit-once warnings shared by every handle built on this client.
    fn advisories(&self) -> &Advisories;

    async fn health_check(&self) -> OpenTrainResult<bool>;
}
