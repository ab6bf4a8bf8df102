use {
    crate::constants::{DUST_THRESHOLD, PRICE_HOPS},
    crate::libs::pricing::RateBook,
    crate::libs::writing::{cc, Colors},
    crate::log,
    std::collections::BTreeMap,
};

/// Value every held symbol through the rate book. Returns the USD total
/// of the priceable symbols and the symbols no route was found for.
pub fn net_value(all_tokens: &BTreeMap<String, f64>, rates: &RateBook) -> (f64, Vec<String>) {
    let mut total = 0.0;
    let mut unpriced = Vec::new();
    for (symbol, amount) in all_tokens {
        match rates.price_in_usdt(symbol) {
            Ok(price) => total += price * amount,
            Err(_) => unpriced.push(symbol.clone()),
        }
    }
    (total, unpriced)
}

/// Build the report as ordered (text, color) lines: anchor prices first,
/// then holdings above the dust threshold, a USD line per priceable
/// symbol and the net total. Pure so the layout is checkable offline.
pub fn report_lines(
    all_tokens: &BTreeMap<String, f64>,
    rates: &RateBook,
) -> Vec<(String, &'static str)> {
    let mut lines = Vec::new();

    for anchor in PRICE_HOPS {
        if let Ok(p) = rates.price_in_usdt(anchor) {
            lines.push((format!("{anchor}: ${p:.2}"), cc::LIGHT_CYAN));
        }
    }

    lines.push(("\nAll tokens in portfolio:".to_string(), cc::BOLD));
    for (symbol, amount) in all_tokens {
        if *amount > *DUST_THRESHOLD {
            lines.push((format!("{symbol}: {amount:.2}"), cc::WHITE));
        }
    }

    lines.push((String::new(), cc::RESET));
    let (total, unpriced) = net_value(all_tokens, rates);
    for (symbol, amount) in all_tokens {
        if let Ok(price) = rates.price_in_usdt(symbol) {
            let usd = price * amount;
            lines.push((format!("{amount:.4} {symbol} equals ${usd:.2}"), cc::WHITE));
        }
    }

    if !unpriced.is_empty() {
        lines.push((
            format!("\nunpriced (excluded from total): {}", unpriced.join(", ")),
            cc::ORANGE,
        ));
    }
    lines.push((format!("\nnet value: ${total:.2}"), cc::LIGHT_GREEN));
    lines
}

/// Print the console report, logging the symbols no route exists for.
pub fn print_report(all_tokens: &BTreeMap<String, f64>, rates: &RateBook) {
    let stdout = std::io::stdout();
    let mut out = Colors::new(stdout.lock());

    for anchor in PRICE_HOPS {
        if let Err(e) = rates.price_in_usdt(anchor) {
            log!(cc::ORANGE, "{}", e);
        }
    }
    let (_, unpriced) = net_value(all_tokens, rates);
    for symbol in &unpriced {
        log!(cc::ORANGE, "no USDT/ETH/BNB price route for {}", symbol);
    }

    for (line, color) in report_lines(all_tokens, rates) {
        out.cprint(&line, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_value_sums_priceable_and_reports_the_rest() {
        let mut rates = RateBook::default();
        rates.insert("ETH", "USDT", 3000.0);
        rates.insert("AGIX", "ETH", 0.0001);

        let mut held = BTreeMap::new();
        held.insert("AGIX".to_string(), 1000.0); // 1000 * 0.3
        held.insert("USDT".to_string(), 50.0);
        held.insert("RJV".to_string(), 10.0); // no route

        let (total, unpriced) = net_value(&held, &rates);
        assert!((total - 350.0).abs() < 1e-6);
        assert_eq!(unpriced, vec!["RJV".to_string()]);
    }

    #[test]
    fn report_filters_dust_and_leads_with_anchor_prices() {
        let mut rates = RateBook::default();
        rates.insert("ETH", "USDT", 3000.0);

        let mut held = BTreeMap::new();
        held.insert("ETH".to_string(), 2.0);
        held.insert("DUSTY".to_string(), 0.00001); // below the dust threshold

        let lines = report_lines(&held, &rates);
        assert_eq!(lines[0].0, "ETH: $3000.00");
        assert!(lines.iter().all(|(l, _)| !l.starts_with("DUSTY:")));
        assert!(lines.iter().any(|(l, _)| l == "ETH: 2.00"));
        assert!(lines
            .iter()
            .any(|(l, _)| l.contains("unpriced (excluded from total): DUSTY")));
        assert_eq!(lines.last().map(|(l, _)| l.as_str()), Some("\nnet value: $6000.00"));
    }
}
