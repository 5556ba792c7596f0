use poem::middleware::Cors;

use super::env::{Lookup, string_or};

/// Initialize CORS middleware for the front end
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:3000")
pub fn init_cors(lookup: Lookup) -> Cors {
    let allowed_origins = string_or(lookup, "CORS_ALLOWED_ORIGINS", "http://localhost:3000");

    let origins: Vec<String> = allowed_origins
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}
