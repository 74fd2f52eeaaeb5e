use std::sync::Arc;

use portfolio_catalog::ingestion::StdOutObserver;
use portfolio_catalog::logging;
use portfolio_catalog::pipeline::{self, BuildOptions};

fn main() {
    logging::init();

    println!("Building product catalog...");
    println!("{}", "=".repeat(50));

    let options = BuildOptions {
        observer: Some(Arc::new(StdOutObserver::default())),
        ..BuildOptions::from_env()
    };

    if let Err(e) = pipeline::run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
