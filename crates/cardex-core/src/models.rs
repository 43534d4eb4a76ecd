use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One product entry extracted from the listing page.
///
/// Field order matters: serde serializes struct fields in declaration
/// order, and downstream consumers of the output file rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Uppercased first character of `name`, used by the listing index.
    pub starting_letter: String,
    pub description: String,
    pub demo_url: Vec<String>,
    pub support_url: String,
    pub community_url: String,
}

impl Product {
    /// Builds a record, deriving `starting_letter` from the name.
    ///
    /// Fails if the name has no characters to take the letter from.
    pub fn new(
        name: String,
        description: String,
        demo_url: Vec<String>,
        support_url: String,
        community_url: String,
    ) -> Result<Self, AppError> {
        let initial = name
            .chars()
            .next()
            .ok_or_else(|| AppError::MissingText("product name is empty".into()))?;
        let starting_letter: String = initial.to_uppercase().collect();

        Ok(Self {
            name,
            starting_letter,
            description,
            demo_url,
            support_url,
            community_url,
        })
    }
}

/// Renders a product sequence as a 4-space pretty-printed JSON array.
pub fn render_json(products: &[Product]) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    products.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes the product array to `path`, overwriting any existing file.
pub fn write_products(path: &Path, products: &[Product]) -> Result<(), AppError> {
    let json = render_json(products)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(
            "Fortify".into(),
            "Static analysis tool".into(),
            vec!["https://www.microfocus.com/trial/fortify".into()],
            "https://www.microfocus.com/support/fortify".into(),
            String::new(),
        )
        .unwrap()
    }

    #[test]
    fn starting_letter_is_uppercased_first_char() {
        let p = Product::new("widget".into(), "w".into(), vec![], String::new(), String::new())
            .unwrap();
        assert_eq!(p.starting_letter, "W");
    }

    #[test]
    fn empty_name_is_an_error() {
        let err = Product::new(String::new(), "d".into(), vec![], String::new(), String::new())
            .unwrap_err();
        assert!(matches!(err, AppError::MissingText(_)));
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let products = vec![sample()];
        let bytes = render_json(&products).unwrap();
        let parsed: Vec<Product> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, products);
    }

    #[test]
    fn empty_sequence_renders_as_empty_array() {
        let bytes = render_json(&[]).unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn rendered_json_uses_four_space_indent() {
        let json = String::from_utf8(render_json(&[sample()]).unwrap()).unwrap();
        assert!(json.contains("\n    {"));
        assert!(json.contains("\n        \"name\": \"Fortify\""));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "stale").unwrap();

        write_products(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
