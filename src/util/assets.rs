use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const UNITS_DATASET: &str = "units.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty stylesheet.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("main.css").unwrap_or_default())
        .as_str()
}

/// Returns an inline SVG data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            load_text("favicon.svg")
                .map(|svg| format!("data:image/svg+xml,{}", escape_svg(&svg)))
                .unwrap_or_default()
        })
        .as_str()
}

/// Raw bytes of an embedded asset, `None` when it was not bundled.
pub fn asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(name.trim_start_matches('/')).map(|file| file.data)
}

fn load_text(name: &str) -> Option<String> {
    let bytes = asset_bytes(name)?;
    match String::from_utf8(bytes.into_owned()) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!("embedded asset {name} is not valid UTF-8: {err}");
            None
        }
    }
}

/// Minimal escaping that keeps an SVG valid inside a `data:` URI.
fn escape_svg(svg: &str) -> String {
    svg.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "'")
        .replace('%', "%25")
        .replace('#', "%23")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_dataset_and_styles() {
        assert!(asset_bytes(UNITS_DATASET).is_some());
        assert!(asset_bytes("/main.css").is_some());
        assert!(asset_bytes("missing.css").is_none());
    }

    #[test]
    fn favicon_is_inline_svg() {
        let uri = favicon_data_uri();
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(!uri.contains('#'));
    }
}
