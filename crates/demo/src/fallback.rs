//! Built-in catalog used when the API cannot be reached.
//!
//! Browsing stays usable offline with a handful of staples; anything that
//! must touch the server (checkout, adding a live product) still fails.

use crate::gateway::{CategoryDto, ProductDto};

fn product(
    id: &str,
    name: &str,
    price: &str,
    unit: &str,
    rating: f32,
    category: &str,
) -> ProductDto {
    ProductDto {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        unit: unit.to_string(),
        image: format!("/images/products/{id}.jpg"),
        rating,
        category: category.to_string(),
    }
}

pub(crate) fn products() -> Vec<ProductDto> {
    vec![
        product(
            "organic-bananas",
            "Organic Bananas",
            "$2.99",
            "per bunch",
            4.7,
            "fruits-vegetables",
        ),
        product(
            "whole-milk",
            "Whole Milk",
            "$3.79",
            "per gallon",
            4.8,
            "dairy-eggs",
        ),
        product(
            "sourdough-loaf",
            "Sourdough Loaf",
            "$5.49",
            "per loaf",
            4.6,
            "bakery",
        ),
        product(
            "sparkling-water",
            "Sparkling Water",
            "$1.29",
            "per litre",
            4.1,
            "beverages",
        ),
    ]
}

pub(crate) fn categories() -> Vec<CategoryDto> {
    [
        ("fruits-vegetables", "Fruits & Vegetables", "🥦"),
        ("dairy-eggs", "Dairy & Eggs", "🥚"),
        ("bakery", "Bakery", "🥐"),
        ("beverages", "Beverages", "🥤"),
    ]
    .into_iter()
    .map(|(id, name, icon)| CategoryDto {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
