use crate::actor::SessionRegistry;
use crate::api::commands::{parse_request, Operation, Request};
use crate::api::errors::ApiError;

/// Выполнить уже разобранную операцию и вернуть текстовый отчёт.
pub async fn dispatch(
    registry: &SessionRegistry,
    operation: Operation,
) -> Result<String, ApiError> {
    match operation {
        Operation::CreateSession {
            name,
            opening_funds,
        } => Ok(registry.create_session(&name, opening_funds).await.to_string()),
        Operation::Session { name, command } => {
            let report = registry.submit(&name, command).await?;
            Ok(report.to_string())
        }
    }
}

/// Полный путь запроса: разбор строковых параметров, затем выполнение.
pub async fn handle_request(
    registry: &SessionRegistry,
    request: &Request,
) -> Result<String, ApiError> {
    let operation = parse_request(request)?;
    dispatch(registry, operation).await
}
