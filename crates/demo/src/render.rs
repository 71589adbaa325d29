//! Table rendering for the terminal.

use tabled::{Table, Tabled};

use storefront::cart::CartLine;
use storefront::prices::{format_amount, parse_display_price};

use crate::gateway::{CategoryDto, ProductDto};

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Rating")]
    rating: f32,
    #[tabled(rename = "Category")]
    category: String,
}

pub(crate) fn product_table(products: &[ProductDto]) -> String {
    Table::new(products.iter().map(|product| ProductRow {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price.clone(),
        unit: product.unit.clone(),
        rating: product.rating,
        category: product.category.clone(),
    }))
    .to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

pub(crate) fn category_table(categories: &[CategoryDto]) -> String {
    Table::new(categories.iter().map(|category| CategoryRow {
        id: category.id.clone(),
        name: category.name.clone(),
        icon: category.icon.clone(),
    }))
    .to_string()
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

pub(crate) fn cart_table(lines: &[CartLine]) -> String {
    Table::new(lines.iter().map(|line| CartRow {
        line: line.uuid.to_string(),
        name: line.name.clone(),
        price: line.price.clone(),
        quantity: line.quantity,
        subtotal: parse_display_price(&line.price).map_or_else(
            |_unparsable| "-".to_string(),
            |unit| format_amount(unit * rust_decimal::Decimal::from(line.quantity)),
        ),
    }))
    .to_string()
}
