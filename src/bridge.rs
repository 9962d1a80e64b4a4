use async_trait::async_trait;
use serde_json::Value;

/// Seam to the native command host. One named command with a single
/// structured argument object, returning a JSON result or a rejection
/// value of unspecified shape. Implementations bind this to the actual
/// inter-process bridge.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, Value>;
}
