//! Batch executor - drives one request per input item

use std::sync::Arc;

use tootbatch_domain::{ExecutionContext, Item, OutputRecord, ResourceOperation, Result, Route};
use tracing::{debug, info, instrument};

use super::normalizer::normalize;
use super::policy::{BatchAccumulator, BatchOutcome, FailurePolicy};
use crate::credentials::CredentialProvider;
use crate::dispatch::Dispatcher;
use crate::params::{ParameterResolver, ParameterSchema};
use crate::routing::RequestBuilder;

/// Input to a single batch run
pub struct BatchRequest<'a> {
    pub selection: ResourceOperation,
    pub items: &'a [Item],
    pub resolver: &'a dyn ParameterResolver,
    pub policy: FailurePolicy,
}

/// Runs a batch strictly sequentially: item `i + 1` is not started until
/// item `i` has produced its records or its error.
pub struct BatchExecutor {
    dispatcher: Arc<dyn Dispatcher>,
    credentials: Arc<dyn CredentialProvider>,
}

impl BatchExecutor {
    pub fn new(dispatcher: Arc<dyn Dispatcher>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { dispatcher, credentials }
    }

    /// Run the batch.
    ///
    /// Credentials are resolved once, before the first item; failing to
    /// resolve them fails the whole batch regardless of policy.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Abort`], the first item failure is returned and
    /// no later item is processed. Output accumulated so far is discarded.
    #[instrument(skip_all, fields(selection = %request.selection, items = request.items.len()))]
    pub async fn run(&self, request: BatchRequest<'_>) -> Result<BatchOutcome> {
        let context = self.credentials.execution_context().await?;
        let mut accumulator = BatchAccumulator::new(request.policy);

        for index in 0..request.items.len() {
            let result =
                self.process_item(&context, &request.selection, request.resolver, index).await;
            accumulator.absorb(index, result)?;
        }

        let outcome = accumulator.finish();
        info!(
            items = outcome.items_processed,
            records = outcome.records.len(),
            failures = outcome.failures.len(),
            "batch completed"
        );
        Ok(outcome)
    }

    /// Resolve parameters, build, dispatch and normalize one item.
    pub async fn process_item(
        &self,
        context: &ExecutionContext,
        selection: &ResourceOperation,
        resolver: &dyn ParameterResolver,
        index: usize,
    ) -> Result<Vec<OutputRecord>> {
        let action = Route::resolve(selection)?.action();
        debug!(index, action, "processing item");

        let params = ParameterSchema::resolve(selection, resolver, index)?;
        let spec = RequestBuilder::build(selection, &params)?;
        let raw = self.dispatcher.send(context, &spec).await?;
        Ok(normalize(raw, index))
    }
}
