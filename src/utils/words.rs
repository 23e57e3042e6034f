//! Amount in words, using the Indian numbering system (crore, lakh, thousand)

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::types::{round_money, GstError, GstResult};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Convert a non-negative amount to words.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use gst_invoice_core::amount_in_words;
///
/// assert_eq!(amount_in_words(&BigDecimal::from(100000)).unwrap(), "One Lakh Rupees Only");
/// ```
pub fn amount_in_words(amount: &BigDecimal) -> GstResult<String> {
    if *amount < BigDecimal::zero() {
        return Err(GstError::NegativeAmount(format!(
            "cannot express {} in words",
            amount
        )));
    }

    let amount = round_money(amount);
    let rupees_part = amount.with_scale_round(0, RoundingMode::Down);
    let paise_part = (&amount - &rupees_part) * BigDecimal::from(100);

    let (rupees, paise) = match (rupees_part.to_u64(), paise_part.to_u64()) {
        (Some(rupees), Some(paise)) => (rupees, paise),
        _ => {
            return Err(GstError::Calculation(format!(
                "{} is too large to express in words",
                amount
            )))
        }
    };

    let rupee_words = if rupees == 0 {
        "Zero".to_string()
    } else {
        integer_words(rupees)
    };

    if paise == 0 {
        Ok(format!("{} Rupees Only", rupee_words))
    } else {
        Ok(format!(
            "{} Rupees and {} Paise Only",
            rupee_words,
            below_thousand(paise)
        ))
    }
}

/// Words for a positive integer; crore counts above 999 recurse
fn integer_words(n: u64) -> String {
    let mut parts = Vec::new();

    let crores = n / CRORE;
    if crores > 0 {
        parts.push(format!("{} Crore", integer_words(crores)));
    }

    let lakhs = (n % CRORE) / LAKH;
    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_thousand(lakhs)));
    }

    let thousands = (n % LAKH) / THOUSAND;
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_thousand(thousands)));
    }

    let rest = n % THOUSAND;
    if rest > 0 {
        parts.push(below_thousand(rest));
    }

    parts.join(" ")
}

fn below_thousand(n: u64) -> String {
    let mut parts = Vec::new();

    let hundreds = n / 100;
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }

    let rest = (n % 100) as usize;
    if rest >= 20 {
        parts.push(TENS[rest / 10].to_string());
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10].to_string());
        }
    } else if rest > 0 {
        parts.push(ONES[rest].to_string());
    }

    parts.join(" ")
}
