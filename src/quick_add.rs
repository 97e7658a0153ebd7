use crate::errors::{QuickAddError, QuickAddResult};
use crate::parser::TextParser;
use crate::stores::{
    CategoryId, CategoryStore, Clock, InMemoryCategoryStore, InMemoryTransactionStore,
    NewTransaction, SystemClock, TransactionId, TransactionStore,
};
use crate::types::ParsedTransaction;

/// Outcome of a successful quick-add: the stored ids plus the parse they
/// came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTransaction {
    pub id: TransactionId,
    pub category: CategoryId,
    pub parsed: ParsedTransaction,
}

/// One-utterance capture flow: parse, ensure the category, append.
///
/// Parsing itself never fails; `record` refuses only utterances without an
/// amount, which would persist an incomplete transaction.
pub struct QuickAdd<C, T, K = SystemClock> {
    parser: TextParser,
    categories: C,
    transactions: T,
    clock: K,
}

impl QuickAdd<InMemoryCategoryStore, InMemoryTransactionStore, SystemClock> {
    /// Flow over in-memory stores and the system clock.
    pub fn in_memory() -> Self {
        Self::new(
            TextParser::new(),
            InMemoryCategoryStore::new(),
            InMemoryTransactionStore::new(),
            SystemClock,
        )
    }
}

impl<C, T, K> QuickAdd<C, T, K>
where
    C: CategoryStore,
    T: TransactionStore,
    K: Clock,
{
    pub fn new(parser: TextParser, categories: C, transactions: T, clock: K) -> Self {
        Self {
            parser,
            categories,
            transactions,
            clock,
        }
    }

    /// Parse without persisting, for confirmation screens.
    pub fn preview(&self, text: &str) -> ParsedTransaction {
        self.parser.parse(text, self.clock.now())
    }

    /// Parse `text` and persist the result.
    ///
    /// The parsed category is ensured in the category store first, so
    /// recording two groceries purchases creates one category and two
    /// transactions.
    pub fn record(&mut self, text: &str) -> QuickAddResult<RecordedTransaction> {
        let parsed = self.preview(text);
        if !parsed.has_amount() {
            return Err(QuickAddError::AmountMissing {
                text: text.to_string(),
            });
        }

        let category = self.categories.ensure(&parsed.category, parsed.kind)?;
        let id = self
            .transactions
            .append(NewTransaction::from_parsed(&parsed, category))?;

        Ok(RecordedTransaction {
            id,
            category,
            parsed,
        })
    }

    /// The category store, for reading back what was created.
    pub fn categories(&self) -> &C {
        &self.categories
    }

    /// The transaction store.
    pub fn transactions(&self) -> &T {
        &self.transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::stores::{CategoryRecord, FixedClock};
    use crate::types::CategoryKind;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn quick_add() -> QuickAdd<InMemoryCategoryStore, InMemoryTransactionStore, FixedClock> {
        QuickAdd::new(
            TextParser::new(),
            InMemoryCategoryStore::new(),
            InMemoryTransactionStore::new(),
            FixedClock(noon()),
        )
    }

    #[test]
    fn test_record_persists_parse_result() {
        let mut flow = quick_add();

        let recorded = flow.record("Spent ₦5000 on groceries yesterday").unwrap();

        assert_eq!(recorded.id, TransactionId(1));
        assert_eq!(recorded.category, CategoryId(1));
        assert_eq!(recorded.parsed.description, "Groceries");
        assert_eq!(recorded.parsed.date, day(2024, 3, 14));

        let categories = flow.categories().all().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Groceries");
        assert_eq!(categories[0].kind, CategoryKind::Expense);

        let entries = flow.transactions().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1.amount, Decimal::from_str("5000").unwrap());
        assert_eq!(entries[0].1.category, recorded.category);
    }

    #[test]
    fn test_record_reuses_category_across_utterances() {
        let mut flow = quick_add();

        let first = flow.record("Spent 2000 on food").unwrap();
        let second = flow.record("spent 800 for lunch").unwrap();

        assert_eq!(first.category, second.category);
        assert_eq!(flow.categories().all().unwrap().len(), 1);
        assert_eq!(flow.transactions().entries().len(), 2);
    }

    #[test]
    fn test_record_rejects_missing_amount() {
        let mut flow = quick_add();

        let err = flow.record("bought some snacks").unwrap_err();

        assert!(err.is_amount_missing());
        assert!(flow.categories().all().unwrap().is_empty());
        assert!(flow.transactions().entries().is_empty());
    }

    #[test]
    fn test_preview_does_not_persist() {
        let flow = quick_add();

        let parsed = flow.preview("Spent 1200 on transport");

        assert_eq!(parsed.category, "Transport");
        assert!(flow.categories().all().unwrap().is_empty());
        assert!(flow.transactions().entries().is_empty());
    }

    #[test]
    fn test_fixed_clock_makes_record_deterministic() {
        let mut first = quick_add();
        let mut second = quick_add();

        let a = first.record("Paid ₦300 for fare today").unwrap();
        let b = second.record("Paid ₦300 for fare today").unwrap();

        assert_eq!(a.parsed, b.parsed);
    }

    #[test]
    fn test_income_utterance_lands_in_income_category() {
        let mut flow = quick_add();

        let recorded = flow.record("Received 250000 as salary").unwrap();

        assert_eq!(recorded.parsed.kind, CategoryKind::Income);
        let categories = flow.categories().all().unwrap();
        assert_eq!(categories[0].name, "Salary");
        assert_eq!(categories[0].kind, CategoryKind::Income);
    }

    struct FailingCategoryStore;

    impl CategoryStore for FailingCategoryStore {
        fn ensure(&mut self, _: &str, _: CategoryKind) -> Result<CategoryId, StoreError> {
            Err(StoreError::Backend("category store down".to_string()))
        }

        fn get(&self, id: CategoryId) -> Result<CategoryRecord, StoreError> {
            Err(StoreError::NotFound {
                entity: "category",
                id: id.0.to_string(),
            })
        }

        fn all(&self) -> Result<Vec<CategoryRecord>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_store_failure_surfaces_as_quick_add_error() {
        let mut flow = QuickAdd::new(
            TextParser::new(),
            FailingCategoryStore,
            InMemoryTransactionStore::new(),
            FixedClock(noon()),
        );

        let err = flow.record("Spent 500 on bread").unwrap_err();

        assert!(!err.is_amount_missing());
        assert!(matches!(err, QuickAddError::Store(StoreError::Backend(_))));
        assert!(flow.transactions().entries().is_empty());
    }
}
