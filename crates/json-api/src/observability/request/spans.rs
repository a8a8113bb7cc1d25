//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_route(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

/// Collapse numeric path segments so every item, order or booking shares one
/// metrics label.
fn normalise_route(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_become_placeholders() {
        let names = request_span_name("DELETE", "/cart/items/42");

        assert_eq!(names.route, "/cart/items/{id}");
        assert_eq!(names.span_name, "DELETE /cart/items/{id}");
    }

    #[test]
    fn nested_ids_are_all_replaced() {
        assert_eq!(
            normalise_route("/restaurants/3/bookings"),
            "/restaurants/{id}/bookings"
        );
        assert_eq!(normalise_route("/orders/17"), "/orders/{id}");
    }

    #[test]
    fn named_segments_and_root_are_kept() {
        assert_eq!(normalise_route("/"), "/");
        assert_eq!(normalise_route("/search"), "/search");
        assert_eq!(normalise_route("/items/pad-thai-2"), "/items/pad-thai-2");
    }
}
