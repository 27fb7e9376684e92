use sssp_explorer::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(raw) => raw.parse()?,
        None => 3005,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting SSSP Explorer web server");
    println!("  Port: {}", config.port);
    println!("  Static files: {}", config.static_dir);
    println!("  CORS enabled: {}", config.enable_cors);
    println!("  Max sessions: {}", config.max_sessions);
    println!("  Session timeout: {} minutes", config.session_timeout_minutes);
    println!("  Max nodes per graph: {}", config.max_node_count);
    println!();

    start_server(config.port).await?;

    Ok(())
}
