use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(user_routes())
        .merge(store_routes())
        .merge(catalog_routes())
        .merge(product_routes())
        .merge(order_routes())
        .merge(geography_routes())
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::user::list_users,
        handlers::user::create_user
    ))
}

fn store_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::store::list_stores,
            handlers::store::create_store
        ))
        .routes(routes!(handlers::store::get_store))
        .routes(routes!(handlers::store::get_store_summary))
}

fn catalog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::catalog::list_categories,
            handlers::catalog::create_category
        ))
        .routes(routes!(
            handlers::catalog::list_billboards,
            handlers::catalog::create_billboard
        ))
        .routes(routes!(
            handlers::catalog::list_sizes,
            handlers::catalog::create_size
        ))
        .routes(routes!(
            handlers::catalog::list_colors,
            handlers::catalog::create_color
        ))
}

fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::product::list_products,
            handlers::product::create_product
        ))
        .routes(routes!(
            handlers::product::get_product,
            handlers::product::delete_product
        ))
}

fn order_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::order::list_orders,
        handlers::order::create_order
    ))
}

fn geography_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::geography::list_countries,
            handlers::geography::create_country
        ))
        .routes(routes!(
            handlers::geography::list_cities,
            handlers::geography::create_city
        ))
}
