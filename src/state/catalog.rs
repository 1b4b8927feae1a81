//! Mock product catalog shown on the sales screen.
//!
//! Static demo data; selling never mutates stock.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::util::search::matches_query;

/// Product families used by the catalog filter chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Sombreros,
    Botas,
    Accesorios,
}

/// Filter chips above the catalog grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Sombreros,
    Botas,
    Accesorios,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Sombreros,
        CategoryFilter::Botas,
        CategoryFilter::Accesorios,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Sombreros => "Sombreros",
            CategoryFilter::Botas => "Botas",
            CategoryFilter::Accesorios => "Accesorios",
        }
    }

    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Sombreros => category == Category::Sombreros,
            CategoryFilter::Botas => category == Category::Botas,
            CategoryFilter::Accesorios => category == Category::Accesorios,
        }
    }
}

/// Stock for one size of a multi-size product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeVariant {
    pub size: u32,
    pub stock: u32,
}

/// A sellable product in the demo catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category: Category,
    pub sku: String,
    /// Empty for single-size products.
    pub variants: Vec<SizeVariant>,
}

impl Product {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Visual stock level behind the catalog badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    Healthy,
    Low,
    Out,
}

/// Badge level for a stock figure: above ten is healthy, anything left
/// is low, zero is out.
pub fn stock_level(stock: u32) -> StockLevel {
    if stock > 10 {
        StockLevel::Healthy
    } else if stock > 0 {
        StockLevel::Low
    } else {
        StockLevel::Out
    }
}

/// Apply the search box and category chips the way the catalog grid does:
/// the query must match name or SKU, and the chip must match the family.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| {
            let matches_search =
                matches_query(&product.name, query) || matches_query(&product.sku, query);
            matches_search && category.matches(product.category)
        })
        .collect()
}

/// The six demo products sold at the register.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_owned(),
            name: "Sombrero Texana Premium".to_owned(),
            price: 1299.99,
            stock: 15,
            category: Category::Sombreros,
            sku: "SOM-001".to_owned(),
            variants: Vec::new(),
        },
        Product {
            id: "2".to_owned(),
            name: "Botas Cuadra Avestruz".to_owned(),
            price: 3499.99,
            stock: 8,
            category: Category::Botas,
            sku: "BOT-002".to_owned(),
            variants: vec![
                SizeVariant { size: 26, stock: 2 },
                SizeVariant { size: 27, stock: 0 },
                SizeVariant { size: 28, stock: 3 },
                SizeVariant { size: 29, stock: 2 },
                SizeVariant { size: 30, stock: 1 },
            ],
        },
        Product {
            id: "3".to_owned(),
            name: "Cinturón Piel de Res".to_owned(),
            price: 599.99,
            stock: 25,
            category: Category::Accesorios,
            sku: "CIN-003".to_owned(),
            variants: Vec::new(),
        },
        Product {
            id: "4".to_owned(),
            name: "Sombrero Vaquero Clásico".to_owned(),
            price: 899.99,
            stock: 20,
            category: Category::Sombreros,
            sku: "SOM-004".to_owned(),
            variants: Vec::new(),
        },
        Product {
            id: "5".to_owned(),
            name: "Botas Vaqueras Clásicas".to_owned(),
            price: 2199.99,
            stock: 12,
            category: Category::Botas,
            sku: "BOT-005".to_owned(),
            variants: vec![
                SizeVariant { size: 25, stock: 1 },
                SizeVariant { size: 26, stock: 3 },
                SizeVariant { size: 27, stock: 4 },
                SizeVariant { size: 28, stock: 2 },
                SizeVariant { size: 29, stock: 2 },
            ],
        },
        Product {
            id: "6".to_owned(),
            name: "Hebilla Grande Plata".to_owned(),
            price: 449.99,
            stock: 18,
            category: Category::Accesorios,
            sku: "HEB-006".to_owned(),
            variants: Vec::new(),
        },
    ]
}
