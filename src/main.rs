extern crate exitcode;

use log::*;
use url::Url;

mod argv;

use psview::http::{run_http, Dashboard};
use psview::poll;
use psview::render::Canvas;

//------------------------------------------------------------------------------

fn init_logging(level: log::Level) {
    // stderrlog counts verbosity from 0 for error.
    let verbosity = level as usize - 1;
    if let Err(err) = stderrlog::new().verbosity(verbosity).init() {
        eprintln!("failed to initialize logging: {}", err);
    }
}

fn write_output(svg: &str, output: Option<&str>) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, svg),
        None => {
            print!("{}", svg);
            Ok(())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = argv::parse();
    init_logging(args.get_log_level());

    let url = args.get_url();
    let url = Url::parse(&url).unwrap_or_else(|err| {
        error!("invalid URL {}: {}", url, err);
        std::process::exit(exitcode::USAGE);
    });

    if args.serve {
        // Service mode.
        let dashboard = Dashboard::new(url, args.width);
        if let Err(err) = run_http(dashboard, args.port).await {
            error!("service failed: {}", err);
            std::process::exit(exitcode::SOFTWARE);
        }
        return;
    }

    let mut canvas = Canvas::new(args.width);
    if let Some(path) = &args.input {
        let records = poll::load_file(path).unwrap_or_else(|err| {
            error!("failed to load {}: {}", path, err);
            std::process::exit(exitcode::NOINPUT);
        });
        canvas.draw_ps(&records);
    } else if !poll::load_ps(&url, &mut canvas).await {
        std::process::exit(exitcode::UNAVAILABLE);
    }

    if let Err(err) = write_output(&canvas.to_svg(), args.output.as_deref()) {
        error!("failed to write output: {}", err);
        std::process::exit(exitcode::CANTCREAT);
    }
    std::process::exit(exitcode::OK);
}
