pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliCommand, CliConfig};

#[cfg(feature = "cli")]
pub mod cli {
    use crate::app::commands::LibraryCommand;
    use crate::core::catalog::MAX_LOAN_DAYS;
    use crate::core::report::OutputFormat;
    use clap::builder::BoolishValueParser;
    use clap::{ArgAction, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "book-library")]
    #[command(about = "Maintain the books in a small in-memory library")]
    pub struct CliConfig {
        /// Library seed file (books and customer roster)
        #[arg(long, global = true)]
        pub config: Option<PathBuf>,

        /// Output format for book listings
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
        pub format: OutputFormat,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Write logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: CliCommand,
    }

    impl CliConfig {
        pub fn library_command(&self) -> LibraryCommand {
            self.command.to_command()
        }
    }

    /// Optional parameters can be given positionally or as `--name value`;
    /// the two forms conflict. Boolean keywords given without a value mean true.
    #[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
    pub enum CliCommand {
        /// Display the books in the library
        #[command(name = "show_books")]
        ShowBooks,

        /// Display one book
        #[command(name = "show_book")]
        ShowBook { book_name: String },

        /// Assign a book to a customer (at most 14 days)
        #[command(name = "assign_book")]
        AssignBook {
            book_name: String,
            customer_name: String,
            #[arg(value_name = "DURATION")]
            duration: Option<u32>,
            #[arg(long = "duration", value_name = "DAYS", conflicts_with = "duration")]
            duration_kw: Option<u32>,
        },

        /// Add a book to the library
        #[command(name = "add_book")]
        AddBook {
            book_name: String,
            author_name: String,
            #[arg(
                value_name = "ASSIGNED",
                action = ArgAction::Set,
                value_parser = BoolishValueParser::new()
            )]
            assigned: Option<bool>,
            #[arg(
                long = "assigned",
                value_name = "BOOL",
                num_args = 0..=1,
                default_missing_value = "true",
                value_parser = BoolishValueParser::new(),
                conflicts_with = "assigned"
            )]
            assigned_kw: Option<bool>,
        },

        /// Delete a book from the library
        #[command(name = "delete_book")]
        DeleteBook { book_name: String },

        /// Update the author or status of a book
        #[command(name = "update_book")]
        UpdateBook {
            book_name: String,
            #[arg(value_name = "AUTHOR_NAME")]
            author_name: Option<String>,
            #[arg(
                long = "author_name",
                visible_alias = "author-name",
                value_name = "AUTHOR",
                conflicts_with = "author_name"
            )]
            author_name_kw: Option<String>,
            #[arg(
                value_name = "STATUS",
                action = ArgAction::Set,
                value_parser = BoolishValueParser::new()
            )]
            status: Option<bool>,
            #[arg(
                long = "status",
                value_name = "BOOL",
                num_args = 0..=1,
                default_missing_value = "true",
                value_parser = BoolishValueParser::new(),
                conflicts_with = "status"
            )]
            status_kw: Option<bool>,
        },
    }

    impl CliCommand {
        /// 合併位置參數與關鍵字參數，未提供時套用預設值
        pub fn to_command(&self) -> LibraryCommand {
            match self {
                Self::ShowBooks => LibraryCommand::ShowBooks,
                Self::ShowBook { book_name } => LibraryCommand::ShowBook {
                    book_name: book_name.clone(),
                },
                Self::AssignBook {
                    book_name,
                    customer_name,
                    duration,
                    duration_kw,
                } => LibraryCommand::AssignBook {
                    book_name: book_name.clone(),
                    customer_name: customer_name.clone(),
                    duration: duration_kw.or(*duration).unwrap_or(MAX_LOAN_DAYS),
                },
                Self::AddBook {
                    book_name,
                    author_name,
                    assigned,
                    assigned_kw,
                } => LibraryCommand::AddBook {
                    book_name: book_name.clone(),
                    author_name: author_name.clone(),
                    assigned: assigned_kw.or(*assigned).unwrap_or(false),
                },
                Self::DeleteBook { book_name } => LibraryCommand::DeleteBook {
                    book_name: book_name.clone(),
                },
                Self::UpdateBook {
                    book_name,
                    author_name,
                    author_name_kw,
                    status,
                    status_kw,
                } => LibraryCommand::UpdateBook {
                    book_name: book_name.clone(),
                    author_name: author_name_kw
                        .as_ref()
                        .or(author_name.as_ref())
                        .cloned()
                        .unwrap_or_default(),
                    status: status_kw.or(*status).unwrap_or(false),
                },
            }
        }
    }

}
