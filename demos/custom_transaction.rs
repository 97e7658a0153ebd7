use std::env;

use chrono::NaiveDate;
use transaction_text_rs::stores::{Clock, SystemClock};
use transaction_text_rs::{CategoryKind, ParsedTransaction, TextParser};

#[derive(Debug)]
struct BudgetEntry {
    day: NaiveDate,
    signed_amount: f64,
    label: String,
    bucket: String,
}

impl From<ParsedTransaction> for BudgetEntry {
    fn from(parsed: ParsedTransaction) -> Self {
        let signed_amount = match parsed.kind {
            CategoryKind::Expense => -parsed.amount_f64(),
            CategoryKind::Income => parsed.amount_f64(),
        };

        BudgetEntry {
            day: parsed.date.date(),
            signed_amount,
            label: parsed.description,
            bucket: parsed.category,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let utterances = if args.is_empty() {
        println!("Using built-in sample utterances\n");
        vec![
            "Spent ₦2500 on fuel yesterday".to_string(),
            "Received ₦40000 as allowance today".to_string(),
            "Spent 1800 on uber to the airport".to_string(),
        ]
    } else {
        args
    };

    let parser = TextParser::new();
    let now = SystemClock.now();

    for text in &utterances {
        let entry: BudgetEntry = parser.parse_into(text, now);

        println!("{:?}", text);
        println!("  Day: {}", entry.day);
        println!("  Amount: {:+.2}", entry.signed_amount);
        println!("  Label: {}", entry.label);
        println!("  Bucket: {}", entry.bucket);
        println!();
    }
}
