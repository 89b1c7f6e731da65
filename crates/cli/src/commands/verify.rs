//! `tootbatch verify` - check the configured credentials

use serde_json::Value;

use crate::context::AppContext;

pub async fn verify(ctx: &AppContext) -> anyhow::Result<Value> {
    let context = ctx.credentials.execution_context().await?;
    Ok(ctx.verifier.verify(&context).await?)
}
