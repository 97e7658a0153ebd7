use transaction_text_rs::QuickAdd;
use transaction_text_rs::stores::CategoryStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut flow = QuickAdd::in_memory();

    let batch = [
        "Spent ₦5000 on groceries yesterday",
        "Received 250000 as salary",
        "spent 1200 on transport today",
        "Spent 2000 on food",
        "bought snacks",
    ];

    for text in batch {
        match flow.record(text) {
            Ok(recorded) => {
                println!(
                    "Recorded #{}: {} {} ({})",
                    recorded.id.0, recorded.parsed.amount, recorded.parsed.description, recorded.parsed.category
                );
            }
            Err(err) if err.is_amount_missing() => {
                println!("Skipped {:?}: {}", text, err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("\nCategories created:");
    for category in flow.categories().all()? {
        println!(
            "  [{}] {} ({:?})",
            category.id.0, category.name, category.kind
        );
    }

    println!("\nLedger:");
    for (id, tx) in flow.transactions().entries() {
        println!(
            "  [{}] {} {} on {}",
            id.0,
            tx.amount,
            tx.description,
            tx.date.date()
        );
    }

    Ok(())
}
