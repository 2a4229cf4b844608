use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Размер ответа в человекочитаемом виде
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Простой middleware для логирования запросов
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{} {} -> {} | body read failed: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let timestamp = chrono::Utc::now().format("%H:%M:%S");
    tracing::info!(
        "{} | {:>5}ms | {:>9} | {} {:>6} {}",
        timestamp,
        start.elapsed().as_millis(),
        format_size(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}
