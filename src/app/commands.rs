use crate::core::catalog::Catalog;
use crate::core::report::{self, OutputFormat};
use crate::core::{Book, Clock};
use crate::utils::error::Result;

/// One catalog operation with every parameter resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryCommand {
    ShowBooks,
    ShowBook {
        book_name: String,
    },
    AssignBook {
        book_name: String,
        customer_name: String,
        duration: u32,
    },
    AddBook {
        book_name: String,
        author_name: String,
        assigned: bool,
    },
    DeleteBook {
        book_name: String,
    },
    UpdateBook {
        book_name: String,
        author_name: String,
        status: bool,
    },
}

/// Run one command against the catalog and return the lines to print.
///
/// Mutating commands echo the refreshed listing the same way `show_books`
/// renders it, so the caller only prints what comes back.
pub fn execute<K: Clock>(
    catalog: &mut Catalog<K>,
    command: &LibraryCommand,
    format: OutputFormat,
) -> Result<Vec<String>> {
    tracing::debug!("Executing {:?}", command);

    match command {
        LibraryCommand::ShowBooks => Ok(vec![report::render(&catalog.list(), format)?]),

        LibraryCommand::ShowBook { book_name } => {
            let book = catalog.get(book_name)?;
            Ok(vec![book_line(book)])
        }

        LibraryCommand::AssignBook {
            book_name,
            customer_name,
            duration,
        } => {
            let due = catalog.assign(book_name, customer_name, *duration)?.due;
            Ok(vec![
                report::render(&catalog.list(), format)?,
                format!(
                    "{} is assigned to {}, It should be returned on or before {}",
                    book_name,
                    customer_name,
                    due.format("%Y-%m-%d")
                ),
            ])
        }

        LibraryCommand::AddBook {
            book_name,
            author_name,
            assigned,
        } => {
            catalog.add(book_name, author_name, *assigned)?;
            Ok(vec![
                format!("{} is added to Library.", book_name),
                report::render(&catalog.list(), format)?,
            ])
        }

        LibraryCommand::DeleteBook { book_name } => {
            catalog.remove(book_name)?;
            Ok(vec![
                report::render(&catalog.list(), format)?,
                format!("{} has been removed from Library", book_name),
            ])
        }

        LibraryCommand::UpdateBook {
            book_name,
            author_name,
            status,
        } => {
            let book = catalog.update(book_name, author_name, *status)?;
            Ok(vec![
                book_line(book),
                format!("{} info has been updated...", book_name),
            ])
        }
    }
}

fn book_line(book: &Book) -> String {
    format!("{} \t {} \t {}", book.name, book.author, book.assigned)
}
