//! Catalog records. JSON keys use the exported field names clients already consume (`ID`, `CategoryID`, ...).

use serde::{Deserialize, Serialize};

/// A Category describes a group of Products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// A Product for sale. `category` is only populated by eager-loading reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Inventory")]
    pub inventory: i32,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "CategoryID")]
    pub category_id: Option<i32>,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    #[sqlx(skip)]
    pub category: Option<Category>,
}

/// Create payload. Absent fields take their zero value; `ID` and `Category` in the body are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Inventory")]
    pub inventory: i32,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "CategoryID")]
    pub category_id: Option<i32>,
}

impl NewProduct {
    /// The stored record once storage has assigned `id`.
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            inventory: self.inventory,
            tags: self.tags,
            category_id: self.category_id,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_serializes_with_exported_names() {
        let p = Product {
            id: 3,
            name: "Playstation".into(),
            description: "Console".into(),
            image: "ps.png".into(),
            price: 499.99,
            inventory: 12,
            tags: "games".into(),
            category_id: Some(2),
            category: Some(Category {
                id: 2,
                name: "Video Game Console".into(),
                description: "Consoles".into(),
            }),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["ID"], 3);
        assert_eq!(v["CategoryID"], 2);
        assert_eq!(v["Category"]["Name"], "Video Game Console");
        assert_eq!(v["Price"], 499.99);
    }

    #[test]
    fn unloaded_category_is_omitted() {
        let p = NewProduct::default().into_product(1);
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("Category").is_none());
        assert_eq!(v["CategoryID"], serde_json::Value::Null);
    }

    #[test]
    fn new_product_defaults_missing_fields_and_ignores_id() {
        let np: NewProduct = serde_json::from_value(json!({"ID": 99, "Name": "Xbox", "Price": 299.5})).unwrap();
        assert_eq!(np.name, "Xbox");
        assert_eq!(np.price, 299.5);
        assert_eq!(np.inventory, 0);
        assert_eq!(np.category_id, None);
        assert_eq!(np.into_product(4).id, 4);
    }
}
