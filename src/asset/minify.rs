//! Minified bodies for inline `<style>` and `<script>` tags.
//!
//! Parse failures are logged and reported as `None`; the caller then
//! inlines the trimmed source as-is.

use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::AssetKind;
use crate::debug;

/// Minify `source` of an asset of `kind` read from `path`.
pub fn minify(kind: AssetKind, path: &Path, source: &str) -> Option<String> {
    let result = match kind {
        AssetKind::Stylesheet => stylesheet(path, source),
        AssetKind::Script => script(source),
    };
    if let Err(reason) = &result {
        debug!("minify"; "inlining {} unminified: {}", path.display(), reason);
    }
    result.ok()
}

fn stylesheet(path: &Path, source: &str) -> Result<String, String> {
    let options = ParserOptions {
        filename: path.display().to_string(),
        ..ParserOptions::default()
    };
    let sheet = StyleSheet::parse(source, options).map_err(|err| err.to_string())?;
    let printer = PrinterOptions {
        minify: true,
        ..PrinterOptions::default()
    };
    sheet
        .to_css(printer)
        .map(|out| out.code)
        .map_err(|err| err.to_string())
}

fn script(source: &str) -> Result<String, String> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if !parsed.errors.is_empty() {
        return Err(format!("{} parse error(s)", parsed.errors.len()));
    }

    let mut program = parsed.program;
    let minified = Minifier::new(MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    })
    .minify(&allocator, &mut program);

    let codegen = CodegenOptions {
        minify: true,
        comments: CommentOptions::disabled(),
        ..CodegenOptions::default()
    };
    Ok(Codegen::new()
        .with_options(codegen)
        .with_scoping(minified.scoping)
        .build(&program)
        .code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(name: &str) -> &Path {
        Path::new(name)
    }

    #[test]
    fn test_stylesheet() {
        let out = minify(
            AssetKind::Stylesheet,
            path("notification.css"),
            ".notification {\n  display: flex;\n}\n",
        );
        assert_eq!(out.as_deref(), Some(".notification{display:flex}"));
    }

    #[test]
    fn test_script_keeps_behavior() {
        let out = minify(
            AssetKind::Script,
            path("notification.js"),
            "function greet() {\n  console.log('hi');\n}\ngreet();\n",
        )
        .unwrap();
        assert!(out.contains("console.log"));
    }

    #[test]
    fn test_invalid_script() {
        assert!(minify(AssetKind::Script, path("broken.js"), "function (").is_none());
    }
}
