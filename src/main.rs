use book_library::app::commands;
use book_library::core::SystemClock;
use book_library::utils::error::ErrorSeverity;
use book_library::utils::{logger, validation::Validate};
use book_library::{Catalog, CliConfig, LibraryConfig};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 載入書目與顧客名單，沒有指定檔案時使用內建資料
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading library from: {}", path.display());
            match LibraryConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(e.exit_code());
                }
            }
        }
        None => LibraryConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let mut catalog = match Catalog::from_provider(&config, SystemClock) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Could not seed catalog: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match commands::execute(&mut catalog, &cli.library_command(), cli.format) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) if e.severity() == ErrorSeverity::Low => {
            // 操作被拒絕：照原樣印出訊息，結束碼仍為 0
            tracing::warn!("Command refused: {} (Category: {:?})", e, e.category());
            tracing::debug!("💡 {}", e.recovery_suggestion());
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
