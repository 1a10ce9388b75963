//! Text renderings of an invoice for the print and share collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use aquawash_core::{DomainError, DomainResult};

use crate::Invoice;

const SHARE_BASE: &str = "https://wa.me/";
const RECEIPT_WIDTH: usize = 40;

/// Branding and destination used when an invoice leaves the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSettings {
    pub business_name: String,
    pub currency_symbol: String,
    /// Messaging number the share link opens a chat with.
    pub share_number: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            business_name: "AquaCarWash".to_string(),
            currency_symbol: "₹".to_string(),
            share_number: "03479896180".to_string(),
        }
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Chat message body for a shared invoice.
pub fn share_message(invoice: &Invoice, settings: &ShareSettings) -> String {
    let sym = &settings.currency_symbol;
    let lines: String = invoice
        .services()
        .iter()
        .map(|service| format!("- {}: {sym}{}\n", service.name, service.price))
        .collect();

    format!(
        "*{} Invoice*\n\n*Date:* {}\n*Vehicle:* {}\n*Services:*\n{lines}\n*Total Amount:* {sym}{}\n\nThank you!",
        settings.business_name,
        format_timestamp(invoice.issued_at()),
        invoice.vehicle(),
        invoice.total(),
    )
}

/// A share number is a non-empty run of ASCII digits.
pub fn is_valid_share_number(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

/// Link that opens a chat with `settings.share_number` prefilled with the
/// invoice message.
///
/// The message is percent-encoded as a URI component (spaces are `%20`).
pub fn share_url(invoice: &Invoice, settings: &ShareSettings) -> DomainResult<Url> {
    let number = settings.share_number.trim();
    if !is_valid_share_number(number) {
        return Err(DomainError::validation(format!(
            "share number must be digits only, got '{number}'"
        )));
    }

    let mut url = Url::parse(SHARE_BASE)
        .and_then(|base| base.join(number))
        .map_err(|e| DomainError::validation(format!("share number: {e}")))?;

    // Form encoding writes spaces as '+' and escapes a literal '+' as %2B.
    let text: String = form_urlencoded::byte_serialize(share_message(invoice, settings).as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    url.set_query(Some(&format!("text={text}")));
    Ok(url)
}

/// Plain-text receipt for printing.
pub fn receipt_text(invoice: &Invoice, settings: &ShareSettings) -> String {
    let sym = &settings.currency_symbol;
    let rule = "-".repeat(RECEIPT_WIDTH);
    let line = |label: &str, amount: u64| {
        let amount = format!("{sym}{amount}");
        let pad = RECEIPT_WIDTH.saturating_sub(amount.chars().count());
        format!("{label:<pad$}{amount}\n")
    };

    let mut out = format!(
        "{}\nInvoice Date: {}\nVehicle Type: {}\n{rule}\n",
        settings.business_name,
        format_timestamp(invoice.issued_at()),
        invoice.vehicle(),
    );
    for service in invoice.services() {
        out.push_str(&line(service.name.as_str(), service.price));
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&line("Total Amount:", invoice.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_invoice;
    use aquawash_catalog::{ServiceKind, VehicleType};
    use aquawash_orders::Selection;
    use chrono::TimeZone;

    fn car_invoice() -> Invoice {
        let mut selection = Selection::new();
        selection.toggle(&ServiceKind::External.entry(), Some(VehicleType::Car));
        selection.toggle(&ServiceKind::Polish.entry(), Some(VehicleType::Car));
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        generate_invoice(Some(VehicleType::Car), &selection, at)
    }

    #[test]
    fn share_message_layout() {
        let message = share_message(&car_invoice(), &ShareSettings::default());
        assert_eq!(
            message,
            "*AquaCarWash Invoice*\n\n\
             *Date:* 2025-03-14 09:30:00 UTC\n\
             *Vehicle:* Car\n\
             *Services:*\n\
             - External Wash: ₹100\n\
             - Polish & Wax: ₹300\n\
             \n*Total Amount:* ₹400\n\nThank you!"
        );
    }

    #[test]
    fn share_url_targets_number_and_carries_message() {
        let settings = ShareSettings::default();
        let invoice = car_invoice();
        let url = share_url(&invoice, &settings).unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/03479896180");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, share_message(&invoice, &settings));
        assert!(!url.as_str().contains('\n'));
        assert!(!url.as_str().contains('+'));
        assert!(url.as_str().starts_with(
            "https://wa.me/03479896180?text=*AquaCarWash%20Invoice*%0A%0A*Date%3A*%202025-03-14%2009%3A30%3A00%20UTC"
        ));
        assert!(url.as_str().contains("Polish%20%26%20Wax%3A%20%E2%82%B9300"));
    }

    #[test]
    fn literal_plus_in_message_stays_distinct_from_space() {
        let settings = ShareSettings {
            currency_symbol: "+".to_string(),
            ..ShareSettings::default()
        };
        let invoice = car_invoice();
        let url = share_url(&invoice, &settings).unwrap();

        assert!(url.as_str().contains("%2B400"));
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, share_message(&invoice, &settings));
    }

    #[test]
    fn share_number_must_be_digits() {
        for number in ["", "evil.example/path", "123?x=1", "https://evil.example", "12 34"] {
            let settings = ShareSettings {
                share_number: number.to_string(),
                ..ShareSettings::default()
            };
            assert!(
                matches!(share_url(&car_invoice(), &settings), Err(DomainError::Validation(_))),
                "{number:?}"
            );
        }
        assert!(is_valid_share_number("03479896180"));
    }

    #[test]
    fn settings_override_branding() {
        let settings = ShareSettings {
            business_name: "Spotless".to_string(),
            currency_symbol: "Rs ".to_string(),
            share_number: "923001234567".to_string(),
        };
        let message = share_message(&car_invoice(), &settings);
        assert!(message.starts_with("*Spotless Invoice*"));
        assert!(message.contains("*Total Amount:* Rs 400"));
        assert_eq!(share_url(&car_invoice(), &settings).unwrap().path(), "/923001234567");
    }

    #[test]
    fn receipt_lists_every_line_and_total() {
        let receipt = receipt_text(&car_invoice(), &ShareSettings::default());
        let lines: Vec<&str> = receipt.lines().collect();

        assert_eq!(lines[0], "AquaCarWash");
        assert_eq!(lines[1], "Invoice Date: 2025-03-14 09:30:00 UTC");
        assert_eq!(lines[2], "Vehicle Type: Car");
        assert!(lines[4].starts_with("External Wash"));
        assert!(lines[4].ends_with("₹100"));
        assert_eq!(lines[4].chars().count(), RECEIPT_WIDTH);
        assert!(lines[7].starts_with("Total Amount:"));
        assert!(lines[7].ends_with("₹400"));
    }
}
