use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Форматирует число с разделителями тысяч (точками)
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Middleware для логирования запросов: статус, метод, путь, размер и время ответа
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
            tracing::warn!(
                "{} {} {} | body error: {} | {}ms",
                parts.status.as_u16(),
                method,
                uri.path(),
                e,
                start.elapsed().as_millis()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        "{} {:>6} {} | {:>12} B | {:>5}ms",
        parts.status.as_u16(),
        method,
        uri.path(),
        format_number(bytes.len()),
        start.elapsed().as_millis()
    );

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }
}
