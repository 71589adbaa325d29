//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal_macros::dec;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::context::AppContext;
use storefront_app::domain::catalog::{MockCatalogService, Product};
use storefront_app::domain::orders::{
    CustomerDetails, MockOrdersService, Order, OrderLine, OrderStatus, OrderUuid,
};
use storefront_app::domain::payments::{
    MockPaymentsService, Payment, PaymentStatus, PaymentUuid,
};

use crate::state::State;

pub(crate) fn make_product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: "Organic Bananas".to_string(),
        price: "$2.99".to_string(),
        unit: "per bunch".to_string(),
        image: "/images/products/organic-bananas.jpg".to_string(),
        description: "Sweet, ripe organic bananas.".to_string(),
        rating: 4.7,
        reviews: 214,
        stock: Some(120),
        details: None,
        category: "fruits-vegetables".to_string(),
        tags: vec!["organic".to_string(), "fruit".to_string()],
    }
}

pub(crate) fn make_order() -> Order {
    let now = Timestamp::now();

    Order {
        id: OrderUuid::now_v7(),
        items: vec![OrderLine {
            name: "Organic Bananas".to_string(),
            price: "$2.99".to_string(),
            quantity: 3,
        }],
        customer_info: CustomerDetails {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Analytical Way".to_string(),
        },
        total_amount: dec!(8.97),
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn make_payment() -> Payment {
    let now = Timestamp::now();

    Payment {
        id: PaymentUuid::now_v7(),
        order_id: OrderUuid::now_v7(),
        payment_method: "card".to_string(),
        amount: dec!(8.97),
        status: PaymentStatus::Processing,
        created_at: now,
        updated_at: now,
    }
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_products_in_category().never();
    catalog.expect_list_categories().never();
    catalog.expect_search_products().never();

    catalog
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();
    orders.expect_set_status().never();

    orders
}

fn strict_payments_mock() -> MockPaymentsService {
    let mut payments = MockPaymentsService::new();

    payments.expect_submit_payment().never();
    payments.expect_get_payment().never();

    payments
}

fn make_state(
    catalog: MockCatalogService,
    orders: MockOrdersService,
    payments: MockPaymentsService,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        orders: Arc::new(orders),
        payments: Arc::new(payments),
    }))
}

fn make_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    make_service(
        make_state(catalog, strict_orders_mock(), strict_payments_mock()),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    make_service(
        make_state(strict_catalog_mock(), orders, strict_payments_mock()),
        route,
    )
}

pub(crate) fn payments_service(payments: MockPaymentsService, route: Router) -> Service {
    make_service(
        make_state(strict_catalog_mock(), strict_orders_mock(), payments),
        route,
    )
}

pub(crate) fn service_with_state(route: Router) -> Service {
    make_service(
        make_state(
            strict_catalog_mock(),
            strict_orders_mock(),
            strict_payments_mock(),
        ),
        route,
    )
}
