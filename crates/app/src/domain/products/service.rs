//! Products service.

use async_trait::async_trait;
use mockall::automock;

use shopfront::products::{Product, ProductId};

use crate::{
    backend::{BackendClient, BackendError},
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, ProductUpdate},
        records::ProductWriteRecord,
        repository::RestProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct RestProductsService {
    repository: RestProductsRepository,
}

impl RestProductsService {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            repository: RestProductsRepository::new(client),
        }
    }
}

#[async_trait]
impl ProductsService for RestProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let records = self.repository.list_all().await?;

        records
            .into_iter()
            .map(|record| Product::try_from(record).map_err(ProductsServiceError::from))
            .collect()
    }

    async fn list_available(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let records = self.repository.list_in_stock().await?;

        records
            .into_iter()
            .map(|record| Product::try_from(record).map_err(ProductsServiceError::from))
            .collect()
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let created = self
            .repository
            .insert(&ProductWriteRecord::from(product))
            .await?;

        let record = created.into_iter().next().ok_or_else(|| {
            ProductsServiceError::Backend(BackendError::UnexpectedResponse(
                "created product missing from response".to_string(),
            ))
        })?;

        Ok(Product::try_from(record)?)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let updated = self
            .repository
            .update(product.into_uuid(), &ProductWriteRecord::from(update))
            .await?;

        let record = updated
            .into_iter()
            .next()
            .ok_or(ProductsServiceError::NotFound)?;

        Ok(Product::try_from(record)?)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete(product.into_uuid()).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, regardless of stock.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the shopper catalog: products with stock remaining.
    async fn list_available(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces a product's editable fields.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
