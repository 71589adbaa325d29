//! App Router

use salvo::Router;

use crate::{categories, healthcheck, orders, payments, products};

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("category/{category}").get(products::category::handler))
                .push(Router::with_path("search/{query}").get(products::search::handler))
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("categories").get(categories::handler))
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .patch(orders::update::handler),
                ),
        )
        .push(
            Router::with_path("payments")
                .post(payments::create::handler)
                .push(Router::with_path("{payment}").get(payments::get::handler)),
        )
}
