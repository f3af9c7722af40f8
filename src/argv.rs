use clap::Parser;

//------------------------------------------------------------------------------

pub const DEFAULT_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_PORT: u16 = 3000;

pub fn parse_log_level(level: &str) -> Result<log::Level, ()> {
    match level {
        "trace" => Ok(log::Level::Trace),
        "debug" => Ok(log::Level::Debug),
        "info" => Ok(log::Level::Info),
        "warn" => Ok(log::Level::Warn),
        "error" => Ok(log::Level::Error),
        _ => Err(()),
    }
}

/// Returns the status service URL from `PSVIEW_URL`, if set.
pub fn get_env_url() -> Option<String> {
    std::env::var("PSVIEW_URL").ok()
}

/// Render process status as SVG.
#[derive(Parser, Debug)]
pub struct Args {
    /// log at LEVEL
    #[arg(
        long, value_name = "LEVEL",
        value_parser = clap::builder::PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"])
    )]
    pub log_level: Option<String>,

    /// fetch status from the service at URL [default: $PSVIEW_URL or http://127.0.0.1:8080]
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// render records from a JSON file instead of fetching
    #[arg(long, value_name = "FILE", conflicts_with = "serve")]
    pub input: Option<String>,

    /// canvas width in pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// write SVG to a file
    #[arg(short, long, conflicts_with = "serve")]
    pub output: Option<String>,

    /// run the dashboard HTTP service
    #[arg(short, long)]
    pub serve: bool,

    /// serve the dashboard on PORT
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Args {
    pub fn get_url(&self) -> String {
        self.url
            .clone()
            .or_else(get_env_url)
            .unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    pub fn get_log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|l| parse_log_level(l).ok())
            .unwrap_or(log::Level::Warn)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

//------------------------------------------------------------------------------
