//! Plain text rendering of session state. Everything here is read-only over the session.
use catalog::Product;

use crate::{
    cart::Cart,
    category::Category,
    checkout::{Bill, Confirmation, PaymentMethod},
    session::{Listing, Session},
    utils::{format_price, list_price, truncate},
};

const DEFAULT_DESCRIPTION: &str = "Fresh and delicious item, ready to enjoy!";
const NOT_AVAILABLE: &str = "N/A";
const SUMMARY_PREVIEW: usize = 3;
const SUMMARY_NAME_CHARS: usize = 15;

pub fn render_tabs(active: Category) -> String {
    Category::TABS
        .iter()
        .map(|category| {
            if *category == active {
                format!("[{}]", category.label())
            } else {
                category.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_listing(session: &Session) -> String {
    let body = match session.listing() {
        Listing::Loading => "Loading delicious items...".to_string(),
        Listing::Failed(message) => {
            format!("Could not load the catalog: {message}\nType `retry` to try again.")
        }
        Listing::Empty => "The machine is empty right now.".to_string(),
        Listing::NoMatches(_) => {
            "No items found\nTry selecting a different category".to_string()
        }
        Listing::Products(products) => products
            .iter()
            .map(|product| render_card(product))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    format!("{}\n\n{body}", render_tabs(session.category()))
}

fn render_card(product: &Product) -> String {
    format!(
        "  {:<12} {:<28} BUY FOR {}",
        product.product_id,
        product.product_name,
        format_price(u64::from(product.product_price))
    )
}

pub fn render_detail(product: &Product) -> String {
    [
        product.product_name.clone(),
        format!(
            "{}  (was {})",
            format_price(u64::from(product.product_price)),
            format_price(list_price(product.product_price))
        ),
        format!(
            "Calories: {}   Weight: {}",
            product.calories.as_deref().unwrap_or(NOT_AVAILABLE),
            product.weight.as_deref().unwrap_or(NOT_AVAILABLE)
        ),
        product
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string(),
        "`add` to put it in the cart, `close` to go back".to_string(),
    ]
    .join("\n")
}

/// Floating cart bar under the grid. Nothing when the cart is empty.
pub fn render_cart_summary(cart: &Cart) -> Option<String> {
    let totals = cart.totals();
    if totals.items == 0 {
        return None;
    }

    let noun = if totals.items == 1 { "Item" } else { "Items" };
    let mut lines = vec![format!(
        "{} {noun} Added  {}",
        totals.items,
        format_price(totals.price)
    )];

    lines.extend(cart.lines().iter().take(SUMMARY_PREVIEW).map(|line| {
        format!(
            "  {}x {}",
            line.quantity,
            truncate(&line.product_name, SUMMARY_NAME_CHARS)
        )
    }));

    if cart.lines().len() > SUMMARY_PREVIEW {
        lines.push(format!("  +{} more", cart.lines().len() - SUMMARY_PREVIEW));
    }

    Some(lines.join("\n"))
}

pub fn render_cart(session: &Session) -> String {
    let cart = session.cart();
    if cart.is_empty() {
        return "Your cart is empty. Type `back` to browse.".to_string();
    }

    let mut lines = vec!["Order Items".to_string()];
    lines.extend(cart.lines().iter().map(|line| {
        format!(
            "  {:<12} {:<28} {} x {} = {}",
            line.product_id,
            line.product_name,
            format_price(u64::from(line.product_price)),
            line.quantity,
            format_price(line.line_total())
        )
    }));

    lines.push(String::new());
    lines.push(render_bill(&session.bill()));
    lines.push(String::new());
    lines.push(format!(
        "Payment: {}",
        PaymentMethod::ALL
            .iter()
            .map(|method| format!("{} ({})", method.label(), method.key()))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    lines.join("\n")
}

pub fn render_bill(bill: &Bill) -> String {
    [
        format!("Subtotal ({} items)  {}", bill.item_count, format_price(bill.subtotal)),
        format!("Delivery Fee  {}", format_price(bill.delivery_fee)),
        format!("GST (5%)  {}", format_price(bill.tax)),
        format!("Total Amount  {}", format_price(bill.total)),
    ]
    .join("\n")
}

pub fn render_confirmation(confirmation: &Confirmation) -> String {
    [
        "Order Confirmed!".to_string(),
        format!("Pickup code: {}", confirmation.pickup_code),
        format!(
            "Paid {} by {} at {}",
            format_price(confirmation.bill.total),
            confirmation.payment,
            confirmation.placed_at.format("%H:%M")
        ),
        "Collect your items from the machine tray.".to_string(),
    ]
    .join("\n")
}

pub fn render_help() -> String {
    [
        "list                  show products under the active category",
        "category <name>       all, snacks, salad, bowls, drinks, wraps",
        "show <id>             product details",
        "close                 close product details",
        "add [id]              add a product, or the one being shown",
        "inc <id> / dec <id>   change a cart quantity by one",
        "qty <id> <n>          set a cart quantity, 0 or less removes",
        "remove <id>           remove a cart line",
        "clear                 empty the cart",
        "cart                  open the cart and bill",
        "back                  return to the catalog",
        "checkout [method]     card, upi or cash",
        "retry                 fetch the catalog again",
        "quit",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use catalog::CatalogError;

    use super::*;

    fn product(id: &str, name: &str, price: u32) -> Product {
        Product {
            product_id: id.to_string(),
            product_name: name.to_string(),
            product_price: price,
            image: None,
            image_mini: None,
            calories: None,
            weight: None,
            description: None,
        }
    }

    #[test]
    fn test_tabs_mark_active() {
        assert_eq!(
            render_tabs(Category::Drinks),
            "All  Snacks  Salad  Bowls  [Drinks]  Wraps"
        );
    }

    #[tokio::test]
    async fn test_listing_states_render_differently() {
        let mut session = Session::new();
        assert!(render_listing(&session).contains("Loading"));

        session.load(async { Err(CatalogError::TimedOut) }).await;
        let failed = render_listing(&session);
        assert!(failed.contains("timed out"));
        assert!(failed.contains("retry"));

        session.load(async { Ok(Vec::new()) }).await;
        assert!(render_listing(&session).contains("empty"));

        session
            .load(async { Ok(vec![product("p1", "Veg Biryani", 90)]) })
            .await;
        assert!(render_listing(&session).contains("BUY FOR ₹90"));

        session.select_category(Category::Drinks);
        assert!(render_listing(&session).contains("No items found"));
    }

    #[test]
    fn test_detail_defaults() {
        let rendered = render_detail(&product("p1", "Masala Chaas", 25));

        assert!(rendered.contains("₹25  (was ₹30)"));
        assert!(rendered.contains("Calories: N/A   Weight: N/A"));
        assert!(rendered.contains(DEFAULT_DESCRIPTION));
    }

    #[test]
    fn test_cart_summary() {
        let mut cart = Cart::new();
        assert_eq!(render_cart_summary(&cart), None);

        for (id, name) in [
            ("a", "Chocolate Milk Shake Large"),
            ("b", "Peanuts"),
            ("c", "Cake"),
            ("d", "Tea"),
        ] {
            cart.add(&product(id, name, 10));
        }
        cart.add(&product("a", "Chocolate Milk Shake Large", 10));

        let summary = render_cart_summary(&cart).unwrap();
        assert!(summary.starts_with("5 Items Added  ₹50"));
        assert!(summary.contains("2x Chocolate Milk ..."));
        assert!(summary.contains("+1 more"));
    }

    #[test]
    fn test_bill() {
        let bill = Bill::from_totals(crate::cart::Totals { items: 3, price: 130 });

        let rendered = render_bill(&bill);

        assert!(rendered.contains("Subtotal (3 items)  ₹130"));
        assert!(rendered.contains("GST (5%)  ₹7"));
        assert!(rendered.contains("Total Amount  ₹157"));
    }
}
