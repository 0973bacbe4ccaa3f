use serde::{Deserialize, Serialize};

/// The six per-product fields read from a listing card, in export column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Title,
    Price,
    SellerLocation,
    Discount,
    ProductsSold,
    NumberOfReviews,
}

impl ProductField {
    /// All fields in extraction and column order.
    pub const ALL: [ProductField; 6] = [
        ProductField::Title,
        ProductField::Price,
        ProductField::SellerLocation,
        ProductField::Discount,
        ProductField::ProductsSold,
        ProductField::NumberOfReviews,
    ];

    /// Header used for this field in the CSV artifact and console table.
    #[must_use]
    pub fn column_header(self) -> &'static str {
        match self {
            ProductField::Title => "Title",
            ProductField::Price => "Price",
            ProductField::SellerLocation => "Seller Location",
            ProductField::Discount => "Discount",
            ProductField::ProductsSold => "Products Sold",
            ProductField::NumberOfReviews => "Number of Reviews",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductField::Title => write!(f, "title"),
            ProductField::Price => write!(f, "price"),
            ProductField::SellerLocation => write!(f, "seller_location"),
            ProductField::Discount => write!(f, "discount"),
            ProductField::ProductsSold => write!(f, "products_sold"),
            ProductField::NumberOfReviews => write!(f, "number_of_reviews"),
        }
    }
}

/// One product card as rendered by the listing site.
///
/// Every value is the element's displayed text, kept verbatim (`"₱1,299.00"`,
/// `"-35%"`, `"1.2K sold"`). A field that could not be read is the empty
/// string; it is never dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Seller Location")]
    pub seller_location: String,
    #[serde(rename = "Discount")]
    pub discount: String,
    #[serde(rename = "Products Sold")]
    pub products_sold: String,
    #[serde(rename = "Number of Reviews")]
    pub number_of_reviews: String,
}

impl ProductRecord {
    /// Returns the value held for `field`.
    #[must_use]
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Price => &self.price,
            ProductField::SellerLocation => &self.seller_location,
            ProductField::Discount => &self.discount,
            ProductField::ProductsSold => &self.products_sold,
            ProductField::NumberOfReviews => &self.number_of_reviews,
        }
    }

    /// Stores `value` for `field`. Used while a card is being assembled,
    /// before the record is appended to a session.
    pub fn set(&mut self, field: ProductField, value: String) {
        let slot = match field {
            ProductField::Title => &mut self.title,
            ProductField::Price => &mut self.price,
            ProductField::SellerLocation => &mut self.seller_location,
            ProductField::Discount => &mut self.discount,
            ProductField::ProductsSold => &mut self.products_sold,
            ProductField::NumberOfReviews => &mut self.number_of_reviews,
        };
        *slot = value;
    }

    /// Values in column order, matching [`ProductField::ALL`].
    #[must_use]
    pub fn values(&self) -> [&str; 6] {
        ProductField::ALL.map(|field| self.get(field))
    }
}
