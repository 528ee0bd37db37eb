use std::{env, process::exit};

use tracing_subscriber::EnvFilter;

use crate::{config::parse_args, driver::build};

pub fn run() {
    init_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_args(&args);

    if let Err(err) = build(&config) {
        println!("{}", err);
        exit(1);
    }
}

fn init_logger() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .init();
}
