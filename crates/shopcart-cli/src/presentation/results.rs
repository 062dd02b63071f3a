//! Rendering of the form fields and the search results table.

use shopcart_core::CartItem;

use crate::form::{FormField, FormState};

use super::tables::truncate_string;

const TABLE_WIDTH: usize = 74;

/// Render the form fields, one per line in display order.
pub fn render_form(state: &FormState) -> String {
    let mut out = String::new();
    for field in FormField::ALL {
        out.push_str(&format!("{:<13}{}\n", field.name(), state.get(field)));
    }
    out
}

/// Render search results as a table: five fixed columns, one row per
/// item, in the order the items were returned.
pub fn render_results(items: &[CartItem]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<12} {:<24} {:<10} {:<10}\n",
        "Customer ID", "Product ID", "Name", "Quantity", "Price"
    ));
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for item in items {
        out.push_str(&format!(
            "{:<12} {:<12} {:<24} {:<10} {:<10}\n",
            truncate_string(&item.customer_id, 11),
            truncate_string(&item.product_id, 11),
            truncate_string(&item.name, 23),
            truncate_string(&item.quantity, 9),
            truncate_string(&item.price, 9),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(customer_id: &str, name: &str) -> CartItem {
        CartItem {
            customer_id: customer_id.to_string(),
            product_id: "17".to_string(),
            name: name.to_string(),
            quantity: "2".to_string(),
            price: "3.5".to_string(),
        }
    }

    #[test]
    fn test_render_form_lists_fields_in_order() {
        let mut state = FormState::default();
        state.customer_id = "301".to_string();
        state.price = "3.5".to_string();

        let rendered = render_form(&state);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("customer_id"));
        assert!(lines[0].ends_with("301"));
        assert!(lines[4].starts_with("price"));
    }

    #[test]
    fn test_render_results_one_row_per_item_in_order() {
        let rendered = render_results(&[item("1", "soap"), item("2", "tea"), item("3", "jam")]);
        let lines: Vec<&str> = rendered.lines().collect();

        // Header, separator, then exactly one row per item
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Customer ID"));
        assert!(lines[0].contains("Price"));
        assert!(lines[2].starts_with('1'));
        assert!(lines[2].contains("soap"));
        assert!(lines[3].starts_with('2'));
        assert!(lines[4].starts_with('3'));
    }

    #[test]
    fn test_render_results_truncates_long_multibyte_name() {
        // Server data is opaque; a long multibyte product name must render,
        // truncated, instead of panicking on a char boundary
        let rendered = render_results(&[item("1", "aaaaaaaaaaaaaaaaaaa日本語の石鹸ブランド")]);
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.contains("aaaaaaaaaaaaaaaaaaa日..."));
    }

    #[test]
    fn test_render_results_empty_has_only_header() {
        let rendered = render_results(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_render_results_columns_in_fixed_order() {
        let rendered = render_results(&[item("1", "soap")]);
        let header = rendered.lines().next().unwrap();
        let customer = header.find("Customer ID").unwrap();
        let product = header.find("Product ID").unwrap();
        let name = header.find("Name").unwrap();
        let quantity = header.find("Quantity").unwrap();
        let price = header.find("Price").unwrap();
        assert!(customer < product && product < name && name < quantity && quantity < price);
    }
}
