//! Correlation fields carried in HTTP headers.

use http::HeaderMap;

use crate::ports::CorrelationSource;

impl CorrelationSource for HeaderMap {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}
