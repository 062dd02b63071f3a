//! Form field state.

use std::str::FromStr;

use shopcart_core::CartItem;

/// The five named form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// `customer_id`
    CustomerId,
    /// `product_id`
    ProductId,
    /// `name`
    Name,
    /// `quantity`
    Quantity,
    /// `price`
    Price,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::CustomerId,
        Self::ProductId,
        Self::Name,
        Self::Quantity,
        Self::Price,
    ];

    /// The field's form name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CustomerId => "customer_id",
            Self::ProductId => "product_id",
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::Price => "price",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer_id" => Ok(Self::CustomerId),
            "product_id" => Ok(Self::ProductId),
            "name" => Ok(Self::Name),
            "quantity" => Ok(Self::Quantity),
            "price" => Ok(Self::Price),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

/// Current values of the form fields.
///
/// All values are opaque strings, exactly as a form input would hold
/// them; an empty string is an empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Customer identifier (cart key)
    pub customer_id: String,
    /// Product identifier
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Quantity in the cart
    pub quantity: String,
    /// Unit price
    pub price: String,
}

impl FormState {
    /// Overwrite every field from an item returned by the API.
    pub fn populate(&mut self, item: &CartItem) {
        self.customer_id = item.customer_id.clone();
        self.product_id = item.product_id.clone();
        self.name = item.name.clone();
        self.quantity = item.quantity.clone();
        self.price = item.price.clone();
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the fields as a cart item for a request body.
    pub fn to_item(&self) -> CartItem {
        CartItem {
            customer_id: self.customer_id.clone(),
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
        }
    }

    /// Read one field by name.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CustomerId => &self.customer_id,
            FormField::ProductId => &self.product_id,
            FormField::Name => &self.name,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
        }
    }

    /// Write one field by name.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::CustomerId => self.customer_id = value,
            FormField::ProductId => self.product_id = value,
            FormField::Name => self.name = value,
            FormField::Quantity => self.quantity = value,
            FormField::Price => self.price = value,
        }
    }
}
