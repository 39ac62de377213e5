use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_products::Catalog;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/query", get(products_in_range))
        .route("/pagination", get(products_page))
        .route("/filter/ids", get(products_with_ids_between))
        .route("/created-after", get(products_created_after))
        .route("/modified", get(modified_products))
        .route("/categories", get(categories_present))
        .route("/categories/:category/count", get(count_in_category))
        .route("/category/:category", get(products_in_category))
        .route("/initials", get(name_initials))
        .route("/top-rated/recent", get(recent_top_rated))
        .route("/:id", get(get_product).put(modify_product))
}

/// Every product sorted by id; an empty catalog is a 404.
pub async fn list_products(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    let products = catalog.list_by_id();
    if products.is_empty() {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "no products available");
    }
    (StatusCode::OK, Json(products)).into_response()
}

pub async fn create_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match catalog.create(body.id, body.name, body.category, body.rating) {
        Ok(product) => {
            tracing::info!(id = %product.id(), "product created");
            (StatusCode::CREATED, Json(product)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match catalog.get_by_id(id) {
        Ok(found) => match found.into_iter().next() {
            Some(product) => (StatusCode::OK, Json(product)).into_response(),
            None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        },
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Unknown ids are reported as 404 rather than silently accepted.
pub async fn modify_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ModifyProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match catalog.modify(id, &body.name, body.category, body.rating) {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no product with id {id}"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn products_in_category(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category = match errors::parse_category(&category) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let products = catalog.get_by_category(category);
    if products.is_empty() {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no products in category {category}"),
        );
    }
    (StatusCode::OK, Json(products)).into_response()
}

pub async fn products_in_range(
    Extension(catalog): Extension<Arc<Catalog>>,
    query: Result<Query<dto::RangeQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(q) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    match catalog.window_range(q.start, q.end) {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn products_page(
    Extension(catalog): Extension<Arc<Catalog>>,
    query: Result<Query<dto::PaginationQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(q) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    match catalog.paginate(q.page.unwrap_or(0), q.size()) {
        Ok(page) => (StatusCode::OK, Json(dto::PageResponse::from(page))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn products_with_ids_between(
    Extension(catalog): Extension<Arc<Catalog>>,
    query: Result<Query<dto::RangeQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(q) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let (Ok(start), Ok(end)) = (i32::try_from(q.start), i32::try_from(q.end)) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_argument", "id span out of range");
    };

    match catalog.ids_between(start, end) {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn products_created_after(
    Extension(catalog): Extension<Arc<Catalog>>,
    query: Result<Query<dto::CreatedAfterQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(q) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    (StatusCode::OK, Json(catalog.get_created_after(q.date))).into_response()
}

pub async fn modified_products(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    (StatusCode::OK, Json(catalog.get_modified())).into_response()
}

pub async fn categories_present(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    (StatusCode::OK, Json(catalog.categories_present())).into_response()
}

pub async fn count_in_category(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category = match errors::parse_category(&category) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let body = dto::CategoryCountResponse {
        category,
        count: catalog.count_by_category(category),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn name_initials(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    (StatusCode::OK, Json(dto::initials_to_json(catalog.name_initial_histogram()))).into_response()
}

pub async fn recent_top_rated(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    match catalog.recent_max_rating() {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
