use canonical_cli::config::Config;
use crossterm::style::Stylize;
use std::path::PathBuf;

fn print_help() {
    println!("{}", "Canonical CLI - run one Canonical API request".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  canonical-cli [OPTIONS]");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {} - Use this config file instead of the default",
        "--config <FILE>".green()
    );
    println!(
        "  {} - Write a commented config file to the default location",
        "--generate-config".green()
    );
    println!("  {}            - Show this help", "--help".green());
    println!();
    println!("Set {} to adjust logging (default: info).", "RUST_LOG".cyan());
}

fn generate_config() -> anyhow::Result<PathBuf> {
    let path = Config::get_config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Config::create_default_with_comments())?;
    Ok(path)
}

fn main() {
    canonical_cli::utils::logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    if args.contains(&"--generate-config".to_string()) {
        match generate_config() {
            Ok(path) => {
                println!("Configuration file created at: {:?}", path);
                println!("Edit this file, then run again to execute the request.");
                return;
            }
            Err(e) => {
                eprintln!("{}", format!("Error writing config file: {}", e).red());
                std::process::exit(1);
            }
        }
    }

    let config_flag = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let config = match &config_flag {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Error loading config: {}", e).red());
            std::process::exit(1);
        }
    };

    let request_name = config.request.request_name.clone();
    if canonical_cli::run_request(&config) {
        println!("{}", format!("{} request succeeded", request_name).green());
    } else {
        eprintln!("{}", format!("{} request failed", request_name).red());
        std::process::exit(1);
    }
}
