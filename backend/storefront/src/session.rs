//! # Session
//!
//! Top-level storefront state. Owns the catalog, filter, detail selection, current view,
//! cart and checkout, and hands them out by reference. Views never hold state of their own.
//!
//! ## Catalog States
//! - Loading: fetch in flight
//! - Loaded: fetch succeeded, may hold zero products
//! - Failed: fetch failed or timed out, `retry` starts a new fetch
use std::future::Future;

use catalog::{CatalogError, Product};
use chrono::Local;
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cart::Cart,
    category::{Category, filter_products},
    checkout::{Bill, CheckoutState, Confirmation, PaymentMethod, pickup_code},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Catalog,
    Cart,
    Confirmation,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Loading,
    Failed(&'a str),
    /// Catalog loaded with no products at all.
    Empty,
    /// Products exist, none under the active category.
    NoMatches(Category),
    Products(Vec<&'a Product>),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Catalog is not loaded")]
    CatalogNotLoaded,

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("No product selected")]
    NoSelection,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Checkout already confirmed")]
    AlreadyConfirmed,

    #[error("Catalog did not fail, nothing to retry")]
    NothingToRetry,
}

#[derive(Debug, Default)]
pub struct Session {
    catalog: CatalogState,
    category: Category,
    selected: Option<String>,
    view: View,
    cart: Cart,
    checkout: CheckoutState,
}

fn find_product<'a>(
    catalog: &'a CatalogState,
    product_id: &str,
) -> Result<&'a Product, SessionError> {
    match catalog {
        CatalogState::Loaded(products) => products
            .iter()
            .find(|product| product.product_id == product_id)
            .ok_or_else(|| SessionError::UnknownProduct(product_id.to_string())),
        _ => Err(SessionError::CatalogNotLoaded),
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<Vec<Product>, CatalogError>>,
    {
        self.catalog = CatalogState::Loading;
        info!("Loading catalog...");

        let result = fetch.await;
        self.apply_catalog(result);
    }

    /// Only a failed catalog can be retried, the fetch is dropped unpolled otherwise.
    pub async fn retry<F>(&mut self, fetch: F) -> Result<(), SessionError>
    where
        F: Future<Output = Result<Vec<Product>, CatalogError>>,
    {
        if !matches!(self.catalog, CatalogState::Failed(_)) {
            return Err(SessionError::NothingToRetry);
        }
        info!("Retrying catalog fetch");

        self.load(fetch).await;
        Ok(())
    }

    pub fn apply_catalog(&mut self, result: Result<Vec<Product>, CatalogError>) {
        self.catalog = match result {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                CatalogState::Loaded(products)
            }
            Err(e) => {
                warn!("Catalog fetch failed: {e}");
                CatalogState::Failed(e.to_string())
            }
        };
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn product(&self, product_id: &str) -> Result<&Product, SessionError> {
        find_product(&self.catalog, product_id)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn listing(&self) -> Listing<'_> {
        match &self.catalog {
            CatalogState::Loading => Listing::Loading,
            CatalogState::Failed(message) => Listing::Failed(message),
            CatalogState::Loaded(products) if products.is_empty() => Listing::Empty,
            CatalogState::Loaded(products) => {
                let visible = filter_products(products, self.category);

                if visible.is_empty() {
                    Listing::NoMatches(self.category)
                } else {
                    Listing::Products(visible)
                }
            }
        }
    }

    pub fn open_detail(&mut self, product_id: &str) -> Result<&Product, SessionError> {
        let product = find_product(&self.catalog, product_id)?;
        self.selected = Some(product.product_id.clone());

        Ok(product)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn detail(&self) -> Option<&Product> {
        self.selected
            .as_deref()
            .and_then(|product_id| find_product(&self.catalog, product_id).ok())
    }

    /// Quick add straight from a product card.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<(), SessionError> {
        let product = find_product(&self.catalog, product_id)?;
        self.cart.add(product);

        Ok(())
    }

    /// Add from the detail view, which then closes.
    pub fn add_selected(&mut self) -> Result<(), SessionError> {
        let product_id = self.selected.take().ok_or(SessionError::NoSelection)?;

        self.add_to_cart(&product_id)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn open_cart(&mut self) {
        self.selected = None;
        self.view = View::Cart;
    }

    pub fn back_to_catalog(&mut self) {
        self.view = View::Catalog;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn bill(&self) -> Bill {
        Bill::from_totals(self.cart.totals())
    }

    pub fn checkout_state(&self) -> &CheckoutState {
        &self.checkout
    }

    pub fn checkout<R: Rng>(
        &mut self,
        payment: PaymentMethod,
        rng: &mut R,
    ) -> Result<Confirmation, SessionError> {
        if matches!(self.checkout, CheckoutState::Confirmed(_)) {
            return Err(SessionError::AlreadyConfirmed);
        }

        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        let confirmation = Confirmation {
            pickup_code: pickup_code(rng),
            bill: self.bill(),
            payment,
            placed_at: Local::now(),
        };

        info!(
            "Order confirmed: {} items, total {}, pickup code {}",
            confirmation.bill.item_count, confirmation.bill.total, confirmation.pickup_code
        );

        self.checkout = CheckoutState::Confirmed(confirmation.clone());
        self.view = View::Confirmation;

        Ok(confirmation)
    }

    /// Runs once the confirmation has been shown. No-op while nothing is confirmed.
    pub fn finish_checkout(&mut self) {
        if let CheckoutState::Confirmed(_) = self.checkout {
            self.cart.clear();
            self.checkout = CheckoutState::Pending;
            self.selected = None;
            self.view = View::Catalog;
        }
    }
}
