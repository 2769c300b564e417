use anyhow::Result;
use clap::Parser;
use log::{debug, error};
use std::io;
use std::process;

use misa_backend::config::{resolve_data_directory, settings_path};
use misa_backend::io::{execute, Cli, TableFormatter};
use misa_backend::{AppConfig, Backend};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Command failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_directory = resolve_data_directory(cli.data_dir);
    let config_path = cli
        .config
        .unwrap_or_else(|| settings_path(&data_directory));
    debug!("Data directory {:?}, settings {:?}", data_directory, config_path);

    let config = AppConfig::load_or_create(&config_path)?;
    let backend = Backend::open(&data_directory, &config)?;
    let formatter = TableFormatter::new(config.currency_suffix.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&backend, cli.command, &formatter, &mut out)
}
