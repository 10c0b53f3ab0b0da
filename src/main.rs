/*
 * Responsibility
 * - tokio runtime entrypoint
 * - delegates to app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    token_inspector::app::run().await
}
