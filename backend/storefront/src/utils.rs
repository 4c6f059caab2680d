pub const CURRENCY_SYMBOL: &str = "₹";

pub fn format_price(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// Struck-through "was" price on the detail view.
pub fn list_price(price: u32) -> u64 {
    u64::from(price) * 6 / 5
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "₹0");
        assert_eq!(format_price(157), "₹157");
    }

    #[test]
    fn test_list_price_floors() {
        assert_eq!(list_price(50), 60);
        assert_eq!(list_price(33), 39);
        assert_eq!(list_price(0), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Masala Chaas", 20), "Masala Chaas");
        assert_eq!(truncate("Chocolate Milk Shake Large", 15), "Chocolate Milk ...");
        assert_eq!(truncate("₹₹₹", 2), "₹₹...");
    }
}
