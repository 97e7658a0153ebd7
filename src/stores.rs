//! Collaborator contracts for the quick-add flow: a clock plus category and
//! transaction stores. [`QuickAdd`](crate::QuickAdd) is generic over these
//! traits so applications can bring their own persistence and time source.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::types::{CategoryKind, ParsedTransaction};

/// Source of the reference instant handed to the parser.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed instant, for deterministic parses in tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Opaque category identifier assigned by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

/// Opaque transaction identifier assigned by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub u64);

/// A stored category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
}

/// A transaction ready to persist, with its category resolved to an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: CategoryKind,
    pub category: CategoryId,
    pub date: NaiveDateTime,
}

impl NewTransaction {
    /// Pair a parse result with the id its category resolved to.
    pub fn from_parsed(parsed: &ParsedTransaction, category: CategoryId) -> Self {
        Self {
            description: parsed.description.clone(),
            amount: parsed.amount,
            kind: parsed.kind,
            category,
            date: parsed.date,
        }
    }
}

/// Creates and retrieves transaction categories.
pub trait CategoryStore {
    /// Id of the category named `name` under `kind`, creating it first if
    /// no case-insensitive match exists.
    fn ensure(&mut self, name: &str, kind: CategoryKind) -> Result<CategoryId, StoreError>;

    /// Get a category by its id.
    fn get(&self, id: CategoryId) -> Result<CategoryRecord, StoreError>;

    /// All categories, in creation order.
    fn all(&self) -> Result<Vec<CategoryRecord>, StoreError>;
}

/// Appends transactions to a ledger.
pub trait TransactionStore {
    /// Persist one transaction, returning its assigned id.
    fn append(&mut self, transaction: NewTransaction) -> Result<TransactionId, StoreError>;
}

/// Category store backed by a `Vec`. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    records: Vec<CategoryRecord>,
    last_id: u64,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn ensure(&mut self, name: &str, kind: CategoryKind) -> Result<CategoryId, StoreError> {
        if let Some(existing) = self
            .records
            .iter()
            .find(|record| record.kind == kind && record.name.eq_ignore_ascii_case(name))
        {
            return Ok(existing.id);
        }

        self.last_id += 1;
        let id = CategoryId(self.last_id);
        self.records.push(CategoryRecord {
            id,
            name: name.to_string(),
            kind,
        });
        Ok(id)
    }

    fn get(&self, id: CategoryId) -> Result<CategoryRecord, StoreError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "category",
                id: id.0.to_string(),
            })
    }

    fn all(&self) -> Result<Vec<CategoryRecord>, StoreError> {
        Ok(self.records.clone())
    }
}

/// Transaction store backed by a `Vec`. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    entries: Vec<(TransactionId, NewTransaction)>,
    last_id: u64,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persisted transactions in append order.
    pub fn entries(&self) -> &[(TransactionId, NewTransaction)] {
        &self.entries
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn append(&mut self, transaction: NewTransaction) -> Result<TransactionId, StoreError> {
        self.last_id += 1;
        let id = TransactionId(self.last_id);
        self.entries.push((id, transaction));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_ensure_creates_then_reuses() {
        let mut store = InMemoryCategoryStore::new();

        let first = store.ensure("Food", CategoryKind::Expense).unwrap();
        let second = store.ensure("Food", CategoryKind::Expense).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn test_ensure_is_case_insensitive() {
        let mut store = InMemoryCategoryStore::new();

        let created = store.ensure("Groceries", CategoryKind::Expense).unwrap();
        let found = store.ensure("groceries", CategoryKind::Expense).unwrap();

        assert_eq!(created, found);
        assert_eq!(store.all().unwrap()[0].name, "Groceries");
    }

    #[test]
    fn test_ensure_distinguishes_kinds() {
        let mut store = InMemoryCategoryStore::new();

        let expense = store.ensure("Gift", CategoryKind::Expense).unwrap();
        let income = store.ensure("Gift", CategoryKind::Income).unwrap();

        assert_ne!(expense, income);
        assert_eq!(store.all().unwrap().len(), 2);
    }

    #[test]
    fn test_category_ids_increment_from_one() {
        let mut store = InMemoryCategoryStore::new();

        assert_eq!(
            store.ensure("Food", CategoryKind::Expense).unwrap(),
            CategoryId(1)
        );
        assert_eq!(
            store.ensure("Rent", CategoryKind::Expense).unwrap(),
            CategoryId(2)
        );
    }

    #[test]
    fn test_get_found_and_missing() {
        let mut store = InMemoryCategoryStore::new();
        let id = store.ensure("Transport", CategoryKind::Expense).unwrap();

        let record = store.get(id).unwrap();
        assert_eq!(record.name, "Transport");
        assert_eq!(record.kind, CategoryKind::Expense);

        let missing = store.get(CategoryId(99));
        assert!(matches!(
            missing,
            Err(StoreError::NotFound { entity: "category", .. })
        ));
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut categories = InMemoryCategoryStore::new();
        let category = categories.ensure("Food", CategoryKind::Expense).unwrap();

        let transaction = NewTransaction {
            description: "Lunch".to_string(),
            amount: Decimal::from_str("1500").unwrap(),
            kind: CategoryKind::Expense,
            category,
            date: day(2024, 3, 15),
        };

        let mut store = InMemoryTransactionStore::new();
        let first = store.append(transaction.clone()).unwrap();
        let second = store.append(transaction).unwrap();

        assert_eq!(first, TransactionId(1));
        assert_eq!(second, TransactionId(2));
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.entries()[0].1.description, "Lunch");
    }

    #[test]
    fn test_new_transaction_from_parsed() {
        let parsed = ParsedTransaction {
            description: "Groceries".to_string(),
            amount: Decimal::from_str("5000").unwrap(),
            kind: CategoryKind::Expense,
            category: "Groceries".to_string(),
            date: day(2024, 3, 14),
        };

        let transaction = NewTransaction::from_parsed(&parsed, CategoryId(7));

        assert_eq!(transaction.description, "Groceries");
        assert_eq!(transaction.amount, parsed.amount);
        assert_eq!(transaction.kind, CategoryKind::Expense);
        assert_eq!(transaction.category, CategoryId(7));
        assert_eq!(transaction.date, parsed.date);
    }

    #[test]
    fn test_fixed_clock_returns_its_instant() {
        let clock = FixedClock(day(2024, 3, 15));
        assert_eq!(clock.now(), day(2024, 3, 15));
        assert_eq!(clock.now(), day(2024, 3, 15));
    }
}
