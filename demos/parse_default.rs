use std::env;

use transaction_text_rs::parse;
use transaction_text_rs::stores::{Clock, SystemClock};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let utterances = if args.is_empty() {
        println!("Using built-in sample utterances\n");
        vec![
            "Spent ₦5000 on groceries yesterday".to_string(),
            "Received 250000 as salary".to_string(),
            "Paid $12.50 for lunch today".to_string(),
            "bought a gift for mum 3000".to_string(),
            "hmm".to_string(),
        ]
    } else {
        args
    };

    let now = SystemClock.now();

    for (i, text) in utterances.iter().enumerate() {
        let tx = parse(text, now);

        println!("Utterance {}: {:?}", i + 1, text);
        println!("  Description: {}", tx.description);
        println!("  Amount: {}", tx.amount);
        println!("  Kind: {:?}", tx.kind);
        println!("  Category: {}", tx.category);
        println!("  Date: {}", tx.date.date());
        if tx.is_low_confidence() {
            println!("  Low confidence: ask the user to confirm before saving");
        }
        println!();
    }
}
