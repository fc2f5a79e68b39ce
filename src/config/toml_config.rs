use crate::core::{Book, Seed, SeedProvider};
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    pub library: LibrarySection,
    #[serde(default)]
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySection {
    pub name: String,
    pub customers: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            library: LibrarySection {
                name: "Library".to_string(),
                customers: ["Cus1", "Cus2", "Cus3", "Cus4"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            },
            books: vec![
                Book::new("Book1", "Author1", false),
                Book::new("Book2", "Author2", true),
                Book::new("Book3", "Author3", false),
            ],
        }
    }
}

impl LibraryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LibraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LIBRARY_NAME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LibraryError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("library.name", &self.library.name)?;

        if self.library.customers.is_empty() {
            return Err(LibraryError::ConfigValidationError {
                field: "library.customers".to_string(),
                message: "At least one customer is required".to_string(),
            });
        }
        for customer in &self.library.customers {
            validate_non_empty_string("library.customers", customer)?;
        }
        validate_unique(
            "library.customers",
            self.library.customers.iter().map(String::as_str),
        )?;

        for book in &self.books {
            validate_non_empty_string("books.name", &book.name)?;
        }
        validate_unique("books.name", self.books.iter().map(|b| b.name.as_str()))?;

        Ok(())
    }
}

impl SeedProvider for LibraryConfig {
    fn library_name(&self) -> &str {
        &self.library.name
    }

    fn seed(&self) -> Seed {
        Seed {
            books: self.books.clone(),
            customers: self.library.customers.clone(),
        }
    }
}

impl Validate for LibraryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[library]
name = "Branch Library"
customers = ["Ann", "Bob"]

[[books]]
name = "Dune"
author = "Frank Herbert"

[[books]]
name = "Emma"
author = "Jane Austen"
assigned = true
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = LibraryConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.library_name(), "Branch Library");
        assert_eq!(config.library.customers, vec!["Ann", "Bob"]);
        assert_eq!(config.books.len(), 2);
        assert!(!config.books[0].assigned);
        assert!(config.books[1].assigned);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = LibraryConfig::default();
        assert!(config.validate().is_ok());

        let seed = config.seed();
        assert_eq!(seed.customers.len(), 4);
        assert_eq!(seed.books[1], Book::new("Book2", "Author2", true));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOOK_LIBRARY_TEST_NAME", "Env Library");

        let toml_content = r#"
[library]
name = "${BOOK_LIBRARY_TEST_NAME}"
customers = ["Cus1"]
"#;

        let config = LibraryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.library.name, "Env Library");
        assert!(config.books.is_empty());

        std::env::remove_var("BOOK_LIBRARY_TEST_NAME");
    }

    #[test]
    fn test_config_validation() {
        let duplicate_books = r#"
[library]
name = "Dup"
customers = ["Cus1"]

[[books]]
name = "Book1"
author = "A"

[[books]]
name = "Book1"
author = "B"
"#;
        let config = LibraryConfig::from_toml_str(duplicate_books).unwrap();
        assert!(config.validate().is_err());

        let no_customers = r#"
[library]
name = "Empty"
customers = []
"#;
        let config = LibraryConfig::from_toml_str(no_customers).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LibraryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = LibraryConfig::from_toml_str("[library\nname = 1").unwrap_err();
        assert!(matches!(err, LibraryError::TomlError(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = LibraryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.library.name, "Branch Library");
    }
}
