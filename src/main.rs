use litetab::TableAccessor;
use tracing::info;

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting litetab...");

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        let db_path = &args[1];
        println!("Listing tables in database: {}", db_path);
        let mut accessor = TableAccessor::new(db_path.clone());
        if let Err(e) = accessor.list_tables(db_path.as_str()) {
            eprintln!("Failed to list tables: {}", e);
        }
    } else {
        eprintln!("Usage: litetab <database-path>");
    }
}
