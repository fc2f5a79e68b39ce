use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub assigned: bool,
}

impl Book {
    pub fn new(name: impl Into<String>, author: impl Into<String>, assigned: bool) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            assigned,
        }
    }

    pub fn row(&self) -> BookRow {
        BookRow {
            name: self.name.clone(),
            author: self.author.clone(),
            assigned: self.assigned,
        }
    }
}

/// 書目列表中的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRow {
    #[serde(rename = "Book Name")]
    pub name: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Status")]
    pub assigned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub book: String,
    pub customer: String,
    pub start: NaiveDate,
    pub due: NaiveDate,
}

impl Assignment {
    pub fn duration_days(&self) -> i64 {
        (self.due - self.start).num_days()
    }
}

/// 建立目錄時的初始資料
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub books: Vec<Book>,
    pub customers: Vec<String>,
}
