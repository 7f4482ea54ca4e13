//! Extension bundles shipped with the engine.

pub mod directives;

use crate::highlight::languages::HighlightingBundle;
use crate::parsing::ExtensionBundle;

pub use directives::DirectivesBundle;

/// Names accepted by [`by_name`].
pub const AVAILABLE: [&str; 2] = ["directives", "highlighting"];

/// Looks up a built-in bundle by its configuration name.
pub fn by_name(name: &str) -> Option<Box<dyn ExtensionBundle>> {
    match name.to_ascii_lowercase().as_str() {
        "directives" => Some(Box::new(DirectivesBundle)),
        "highlighting" => Some(Box::new(HighlightingBundle)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_bundle_resolves() {
        for name in AVAILABLE {
            let bundle = by_name(name).expect("bundle should exist");
            assert_eq!(bundle.name(), name);
        }
        assert!(by_name("nope").is_none());
    }
}
