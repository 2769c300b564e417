//! Inventory service: create, update, delete and search products.
use log::{info, warn};
use shared::Product;
use std::sync::Arc;

use crate::domain::commands::products::{
    CreateProductCommand, DeleteProductResult, ProductSearchQuery, UpdateProductCommand,
    UpdateProductResult,
};
use crate::domain::errors::ServiceResult;
use crate::domain::search::matches_keyword;
use crate::domain::validation::{parse_non_negative_amount, parse_quantity, require_text};
use crate::storage::{next_id, Connection, RecordStorage};

#[derive(Clone)]
pub struct InventoryService<C: Connection> {
    record_repository: C::RecordRepository,
}

impl<C: Connection> InventoryService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let record_repository = connection.create_record_repository();
        Self { record_repository }
    }

    pub fn add_product(&self, command: CreateProductCommand) -> ServiceResult<Product> {
        let name = require_text("name", &command.name)?;
        let quantity = parse_quantity(&command.quantity)?;
        let price = parse_non_negative_amount("price", &command.price)?;

        let mut products: Vec<Product> = self.record_repository.load()?;
        let product = Product {
            id: next_id(&products)?,
            name,
            quantity,
            price,
        };
        products.push(product.clone());
        self.record_repository.save(&products)?;

        info!("Added product {} '{}'", product.id, product.name);
        Ok(product)
    }

    /// Overwrite the provided fields of a product.
    ///
    /// A missing id is not an error: nothing is written and the result reports
    /// that no product was found.
    pub fn update_product(&self, command: UpdateProductCommand) -> ServiceResult<UpdateProductResult> {
        let name = command
            .name
            .as_deref()
            .map(|name| require_text("name", name))
            .transpose()?;
        let quantity = command.quantity.as_deref().map(parse_quantity).transpose()?;
        let price = command
            .price
            .as_deref()
            .map(|price| parse_non_negative_amount("price", price))
            .transpose()?;

        let mut products: Vec<Product> = self.record_repository.load()?;
        let Some(product) = products.iter_mut().find(|p| p.id == command.product_id) else {
            warn!("Product not found for update: {}", command.product_id);
            return Ok(UpdateProductResult { product: None });
        };

        if let Some(name) = name {
            product.name = name;
        }
        if let Some(quantity) = quantity {
            product.quantity = quantity;
        }
        if let Some(price) = price {
            product.price = price;
        }
        let updated = product.clone();

        self.record_repository.save(&products)?;

        info!("Updated product {}", updated.id);
        Ok(UpdateProductResult {
            product: Some(updated),
        })
    }

    /// Remove a product; deleting an unknown id is a no-op
    pub fn delete_product(&self, product_id: u64) -> ServiceResult<DeleteProductResult> {
        let mut products: Vec<Product> = self.record_repository.load()?;
        let before = products.len();
        products.retain(|p| p.id != product_id);
        let deleted = products.len() != before;

        self.record_repository.save(&products)?;

        if deleted {
            info!("Deleted product {}", product_id);
        } else {
            warn!("Product not found for delete: {}", product_id);
        }
        Ok(DeleteProductResult { deleted })
    }

    pub fn get_product(&self, product_id: u64) -> ServiceResult<Option<Product>> {
        let products: Vec<Product> = self.record_repository.load()?;
        Ok(products.into_iter().find(|p| p.id == product_id))
    }

    pub fn list_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.record_repository.load()?)
    }

    pub fn search_products(&self, query: ProductSearchQuery) -> ServiceResult<Vec<Product>> {
        let keyword = query.keyword.as_deref();
        let products: Vec<Product> = self.record_repository.load()?;
        Ok(products
            .into_iter()
            .filter(|p| matches_keyword(&p.name, keyword))
            .collect())
    }
}
