use std::net::SocketAddr;
use std::path::PathBuf;
use clap::Parser;
use log::error;
use uztext::core::config::Config;
use uztext::server;

/// HTTP API for Uzbek stop word and frequency analysis
#[derive(Parser, Debug)]
#[command(name = "uztext-server", version)]
struct Args {
    /// Address to listen on [default: 127.0.0.1:8000 or $UZTEXT_BIND]
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Stop word list, one word per line [default: uz.txt or $UZTEXT_STOP_WORDS]
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Directory for saved output [default: . or $UZTEXT_OUTPUT_DIR]
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(path) = args.stop_words {
        config.stop_words_path = path;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    if let Err(e) = server::serve(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
