use crate::core::{Assignment, Book, BookRow, Clock, Seed, SeedProvider};
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::validate_non_empty_input;
use chrono::Days;
use std::collections::HashMap;

/// Longest loan period, in days.
pub const MAX_LOAN_DAYS: u32 = 14;

const NOT_IN_LIBRARY: &str = "is not available in Library.";
const CANNOT_DELETE: &str = "doesn't exist in Library.. Can't be deleted.";
const CANNOT_UPDATE: &str = "is not in Library.";

/// In-memory library catalog: books in insertion order, active loans keyed by
/// book name, and the fixed customer roster.
#[derive(Debug)]
pub struct Catalog<K: Clock> {
    books: Vec<Book>,
    assignments: HashMap<String, Assignment>,
    customers: Vec<String>,
    clock: K,
}

impl<K: Clock> Catalog<K> {
    pub fn new(clock: K) -> Self {
        Self {
            books: Vec::new(),
            assignments: HashMap::new(),
            customers: Vec::new(),
            clock,
        }
    }

    pub fn from_seed(seed: Seed, clock: K) -> Result<Self> {
        let mut catalog = Self::new(clock);
        catalog.customers = seed.customers;
        for book in seed.books {
            catalog
                .add(&book.name, &book.author, book.assigned)
                .map_err(|e| LibraryError::ConfigValidationError {
                    field: "books.name".to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(catalog)
    }

    pub fn from_provider<P: SeedProvider>(provider: &P, clock: K) -> Result<Self> {
        tracing::debug!("Seeding catalog for {}", provider.library_name());
        Self::from_seed(provider.seed(), clock)
    }

    pub fn list(&self) -> Vec<BookRow> {
        self.books.iter().map(Book::row).collect()
    }

    pub fn get(&self, name: &str) -> Result<&Book> {
        self.position(name)
            .and_then(|idx| self.books.get(idx))
            .ok_or_else(|| not_found(name, NOT_IN_LIBRARY))
    }

    pub fn assignment(&self, name: &str) -> Option<&Assignment> {
        self.assignments.get(name)
    }

    pub fn customers(&self) -> &[String] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add(&mut self, name: &str, author: &str, assigned: bool) -> Result<&Book> {
        if self.position(name).is_some() {
            tracing::warn!("⚠️ Refusing to add duplicate book {}", name);
            return Err(LibraryError::AlreadyExists {
                name: name.to_string(),
            });
        }

        tracing::info!("➕ Adding {} by {}", name, author);
        let idx = self.books.len();
        self.books.push(Book::new(name, author, assigned));
        Ok(&self.books[idx])
    }

    pub fn remove(&mut self, name: &str) -> Result<Book> {
        let idx = self
            .position(name)
            .ok_or_else(|| not_found(name, CANNOT_DELETE))?;
        if self.books[idx].assigned {
            tracing::warn!("⚠️ {} is on loan, not removing it", name);
            return Err(LibraryError::InvalidState {
                name: name.to_string(),
            });
        }

        tracing::info!("🗑️ Removing {}", name);
        Ok(self.books.remove(idx))
    }

    /// 狀態一律改成 `status`；狀態為 false 時同時清掉借閱紀錄
    pub fn update(&mut self, name: &str, author: &str, status: bool) -> Result<&Book> {
        let idx = self
            .position(name)
            .ok_or_else(|| not_found(name, CANNOT_UPDATE))?;

        if !status && self.assignments.remove(name).is_some() {
            tracing::info!("📥 Cleared loan record for {}", name);
        }

        let book = &mut self.books[idx];
        if !author.is_empty() {
            book.author = author.to_string();
        }
        book.assigned = status;

        tracing::info!("✏️ Updated {} (author: {}, assigned: {})", name, book.author, status);
        Ok(&*book)
    }

    pub fn assign(&mut self, name: &str, customer: &str, duration: u32) -> Result<&Assignment> {
        validate_non_empty_input("book_name", name)?;
        validate_non_empty_input("customer_name", customer)?;

        let idx = self
            .position(name)
            .ok_or_else(|| not_found(name, NOT_IN_LIBRARY))?;
        if self.books[idx].assigned {
            return Err(LibraryError::AlreadyAssigned {
                name: name.to_string(),
            });
        }

        if !self.customers.iter().any(|c| c == customer) {
            tracing::warn!("⚠️ Unknown customer {}", customer);
            return Err(LibraryError::UnknownCustomer {
                customer: customer.to_string(),
            });
        }

        if duration > MAX_LOAN_DAYS {
            return Err(LibraryError::DurationTooLong {
                requested: duration,
                max: MAX_LOAN_DAYS,
            });
        }

        let start = self.clock.today();
        let due = start
            .checked_add_days(Days::new(u64::from(duration)))
            .ok_or_else(|| LibraryError::InvalidInput {
                field: "duration".to_string(),
                reason: format!("Due date out of range for {} days", duration),
            })?;

        self.books[idx].assigned = true;
        tracing::info!("📚 {} assigned to {} until {}", name, customer, due);

        let record = Assignment {
            book: name.to_string(),
            customer: customer.to_string(),
            start,
            due,
        };
        self.assignments.insert(name.to_string(), record);
        Ok(&self.assignments[name])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.books.iter().position(|b| b.name == name)
    }
}

fn not_found(name: &str, detail: &'static str) -> LibraryError {
    LibraryError::NotFound {
        name: name.to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn sample_catalog() -> Catalog<FixedClock> {
        let seed = Seed {
            books: vec![
                Book::new("Book1", "Author1", false),
                Book::new("Book2", "Author2", true),
                Book::new("Book3", "Author3", false),
            ],
            customers: vec!["Cus1".into(), "Cus2".into(), "Cus3".into(), "Cus4".into()],
        };
        Catalog::from_seed(seed, FixedClock(today())).unwrap()
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut catalog = sample_catalog();
        catalog.add("Book0", "Author0", false).unwrap();

        let names: Vec<String> = catalog.list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Book1", "Book2", "Book3", "Book0"]);
    }

    #[test]
    fn test_add_duplicate_leaves_catalog_unchanged() {
        let mut catalog = sample_catalog();
        let before = catalog.list();

        let err = catalog.add("Book1", "Someone", true).unwrap_err();
        assert!(matches!(err, LibraryError::AlreadyExists { .. }));
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn test_add_then_get() {
        let mut catalog = sample_catalog();
        catalog.add("Book4", "Author4", false).unwrap();

        let book = catalog.get("Book4").unwrap();
        assert_eq!(book.author, "Author4");
        assert!(!book.assigned);
        assert!(catalog.assignment("Book4").is_none());
    }

    #[test]
    fn test_assign_records_due_date() {
        let mut catalog = sample_catalog();
        let record = catalog.assign("Book1", "Cus1", 14).unwrap();

        assert_eq!(record.customer, "Cus1");
        assert_eq!(record.start, today());
        assert_eq!(record.due, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.duration_days(), 14);
        assert!(catalog.get("Book1").unwrap().assigned);
    }

    #[test]
    fn test_assign_rejections_in_order() {
        let mut catalog = sample_catalog();

        assert!(matches!(
            catalog.assign("", "Cus1", 5),
            Err(LibraryError::InvalidInput { .. })
        ));
        assert!(matches!(
            catalog.assign("Book1", "", 5),
            Err(LibraryError::InvalidInput { .. })
        ));
        assert!(matches!(
            catalog.assign("Book9", "Cus1", 5),
            Err(LibraryError::NotFound { .. })
        ));
        // 已借出的檢查在顧客檢查之前
        assert!(matches!(
            catalog.assign("Book2", "Cus9", 5),
            Err(LibraryError::AlreadyAssigned { .. })
        ));
        assert!(matches!(
            catalog.assign("Book1", "Cus9", 20),
            Err(LibraryError::UnknownCustomer { .. })
        ));
        assert!(matches!(
            catalog.assign("Book1", "Cus1", 15),
            Err(LibraryError::DurationTooLong { requested: 15, max: 14 })
        ));
        assert!(!catalog.get("Book1").unwrap().assigned);
        assert!(catalog.assignment("Book1").is_none());
    }

    #[test]
    fn test_assign_zero_days_is_due_today() {
        let mut catalog = sample_catalog();
        let record = catalog.assign("Book3", "Cus4", 0).unwrap();
        assert_eq!(record.due, today());
    }

    #[test]
    fn test_remove() {
        let mut catalog = sample_catalog();

        assert!(matches!(
            catalog.remove("Book2"),
            Err(LibraryError::InvalidState { .. })
        ));
        assert!(catalog.get("Book2").is_ok());

        let removed = catalog.remove("Book3").unwrap();
        assert_eq!(removed.name, "Book3");
        assert!(matches!(catalog.get("Book3"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.remove("Book3"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_update_clears_loan() {
        let mut catalog = sample_catalog();
        catalog.assign("Book1", "Cus2", 7).unwrap();

        let book = catalog.update("Book1", "", false).unwrap();
        assert_eq!(book.author, "Author1");
        assert!(!book.assigned);
        assert!(catalog.assignment("Book1").is_none());
    }

    #[test]
    fn test_update_sets_status_unconditionally() {
        let mut catalog = sample_catalog();

        // 沒有借閱紀錄也可以直接標記為已借出
        let book = catalog.update("Book3", "New Author", true).unwrap();
        assert!(book.assigned);
        assert_eq!(book.author, "New Author");
        assert!(catalog.assignment("Book3").is_none());

        catalog.assign("Book1", "Cus1", 3).unwrap();
        catalog.update("Book1", "", true).unwrap();
        assert!(catalog.assignment("Book1").is_some());

        assert!(matches!(
            catalog.update("Book9", "", false),
            Err(LibraryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_not_found_wording_per_operation() {
        let mut catalog = sample_catalog();

        let err = catalog.get("Book9").unwrap_err();
        assert_eq!(err.to_string(), "Book9 is not available in Library.");

        let err = catalog.remove("Book9").unwrap_err();
        assert_eq!(err.to_string(), "Book9 doesn't exist in Library.. Can't be deleted.");

        let err = catalog.update("Book9", "", false).unwrap_err();
        assert_eq!(err.to_string(), "Book9 is not in Library.");
    }

    #[test]
    fn test_duplicate_seed_is_config_error() {
        let seed = Seed {
            books: vec![
                Book::new("Book1", "Author1", false),
                Book::new("Book1", "Author2", false),
            ],
            customers: vec!["Cus1".into()],
        };

        let err = Catalog::from_seed(seed, FixedClock(today())).unwrap_err();
        assert!(matches!(err, LibraryError::ConfigValidationError { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
