//! Convenience encodings of generated patterns.
//!
//! Thin wrappers over [`generate`](crate::pattern::generate) for callers
//! embedding the output directly in stylesheets or markup.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;
use crate::pattern::{generate, Options};

/// Generate a pattern and return the SVG text Base64-encoded.
pub fn base64_string(seed: &str, options: Options) -> Result<String> {
    Ok(STANDARD.encode(generate(seed, options)?))
}

/// Generate a pattern and wrap it as a CSS background value:
/// `url(data:image/svg+xml;base64,...);`
pub fn uri_image(seed: &str, options: Options) -> Result<String> {
    Ok(format!(
        "url(data:image/svg+xml;base64,{});",
        base64_string(seed, options)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn options() -> Options {
        Options::new()
            .with_generator("hexagons")
            .with_hash("0000000000000000000000000000000000000000")
    }

    #[test]
    fn test_base64_round_trips() {
        let svg = generate("seed", options()).unwrap();
        let encoded = base64_string("seed", options()).unwrap();

        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), svg);
    }

    #[test]
    fn test_uri_image_shape() {
        let uri = uri_image("seed", options()).unwrap();
        assert!(uri.starts_with("url(data:image/svg+xml;base64,"));
        assert!(uri.ends_with(");"));
    }

    #[test]
    fn test_errors_pass_through() {
        let result = base64_string("seed", Options::new().with_generator("Bogus"));
        assert!(result.is_err());
    }
}
