use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Строка в консоли: время, длительность, размер ответа, статус, метод и путь.
/// Ответы с ошибкой дополнительно попадают в лог-файл.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {} -> unreadable response body: {}", method, path, e);
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed = start.elapsed().as_millis();
    // cyan for success, yellow otherwise
    let color = if parts.status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>9} | {} {:>6} {}",
        color,
        Local::now().format("%H:%M:%S"),
        elapsed,
        format_number(bytes.len() as u64),
        status,
        method,
        path
    );
    if !parts.status.is_success() {
        tracing::info!("{} {} -> {} in {}ms", method, path, status, elapsed);
    }

    Response::from_parts(parts, Body::from(bytes))
}
