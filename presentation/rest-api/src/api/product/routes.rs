use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsUseCase, ProductListing};
use business::domain::product::use_cases::update_amount::{
    UpdateAmountParams, UpdateAmountUseCase,
};

use crate::api::error::{IntoErrorResponse, MessageBody};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateAmountRequest};
use crate::api::tags::ApiTags;

pub const NO_PRODUCTS_MESSAGE: &str = "No products available";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    update_amount_use_case: Arc<dyn UpdateAmountUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        update_amount_use_case: Arc<dyn UpdateAmountUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_amount_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for listing, adding, updating the amount of, and deleting products.
/// Response bodies are JSON strings except for a non-empty listing.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product, or the message "No products available" when the catalog is empty.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(ProductListing::Empty) => GetAllProductsResponse::Ok(Json(
                serde_json::Value::String(NO_PRODUCTS_MESSAGE.to_string()),
            )),
            Ok(ProductListing::Products(products)) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                match serde_json::to_value(responses) {
                    Ok(body) => GetAllProductsResponse::Ok(Json(body)),
                    Err(err) => GetAllProductsResponse::InternalError(Json(format!(
                        "Unexpected error with server: {}",
                        err
                    ))),
                }
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Add a new product
    ///
    /// `name`, `description` and `category` are required; `amount` defaults to 0.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            category: body.0.category,
            amount: body.0.amount,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(format!(
                "Product '{}' with description '{}' of category '{}' has been added successfully with amount of '{}'!",
                product.name, product.description, product.category, product.amount
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update product amount
    #[oai(path = "/products/:name", method = "put", tag = "ApiTags::Products")]
    async fn update_amount(
        &self,
        name: Path<String>,
        body: Json<UpdateAmountRequest>,
    ) -> UpdateAmountResponse {
        let params = UpdateAmountParams {
            name: Some(name.0),
            amount: body.0.amount,
        };

        match self.update_amount_use_case.execute(params).await {
            Ok(product) => UpdateAmountResponse::Ok(Json(format!(
                "Product '{}' amount has been updated successfully to '{}'!",
                product.name, product.amount
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateAmountResponse::BadRequest(json),
                    404 => UpdateAmountResponse::NotFound(json),
                    _ => UpdateAmountResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:name", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, name: Path<String>) -> DeleteProductResponse {
        let message = format!("Product '{}' has been deleted successfully!", name.0);
        let params = DeleteProductParams { name: Some(name.0) };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::Ok(Json(message)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    /// Array of products, or a message when there are none
    #[oai(status = 200)]
    Ok(Json<serde_json::Value>),
    #[oai(status = 500)]
    InternalError(MessageBody),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_product_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(MessageBody),
    #[oai(status = 400)]
    BadRequest(MessageBody),
    #[oai(status = 500)]
    InternalError(MessageBody),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_amount_bad_request")]
pub enum UpdateAmountResponse {
    #[oai(status = 200)]
    Ok(MessageBody),
    #[oai(status = 400)]
    BadRequest(MessageBody),
    #[oai(status = 404)]
    NotFound(MessageBody),
    #[oai(status = 500)]
    InternalError(MessageBody),
}

/// A missing or unreadable body supplies none of the product fields.
fn create_product_bad_request(err: poem::Error) -> CreateProductResponse {
    tracing::debug!("Unreadable create request: {}", err);
    CreateProductResponse::BadRequest(Json(ProductError::MissingProductFields.to_string()))
}

/// A missing body, or an amount that is not a number, means no amount was supplied.
fn update_amount_bad_request(err: poem::Error) -> UpdateAmountResponse {
    tracing::debug!("Unreadable update request: {}", err);
    UpdateAmountResponse::BadRequest(Json(ProductError::MissingUpdateFields.to_string()))
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(MessageBody),
    #[oai(status = 400)]
    BadRequest(MessageBody),
    #[oai(status = 404)]
    NotFound(MessageBody),
    #[oai(status = 500)]
    InternalError(MessageBody),
}
