//! # Storefront
//!
//! Client side of the vending machine. Everything after the catalog fetch happens locally.
//!
//! ## Payloads
//!
//! ### Fetch Catalog
//! To backend
//! - `GET /api/products`, no parameters
//!
//! From backend
//! - 200 + `{ "success": true, "data": [products...] }`
//! - 500 + `{ "success": false, "error": "..." }`
//!
//! Fetched once per session (and again on `retry`), bounded by the client timeout.
//!
//!
//!
//! ## Flow
//!
//! - Show a loading indicator while the fetch is in flight
//! - On failure show the error with a retry option, never an endless spinner
//! - Loaded but empty and filtered-to-nothing are separate states with their own message
//! - Category tabs filter locally, see [`category`]
//! - Product card adds one straight away, detail view adds and closes
//! - Cart view edits quantities and shows the bill
//! - Checkout confirms with a pickup code, waits, then clears the cart and returns to the catalog
//!
//!
//!
//! ## Ownership
//!
//! [`session::Session`] owns all state: catalog, active tab, detail selection, view, cart,
//! checkout. Views borrow it, commands mutate it. There is no global state.
//!
//!
//!
//! ## Run
//!
//! Catalog service first, then:
//! ```sh
//! cargo run --bin storefront -- --url http://localhost:3001/api/products --timeout 10
//! ```
pub mod cart;
pub mod category;
pub mod checkout;
pub mod command;
pub mod session;
pub mod utils;
pub mod view;
