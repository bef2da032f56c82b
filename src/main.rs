use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use gemdiff::app::App;
use gemdiff::command::SystemCommandRunner;
use gemdiff::config::{Config, Overrides};
use gemdiff::prompt::TerminalPrompt;
use gemdiff::session::Session;

#[derive(Parser)]
#[command(name = "gemdiff")]
#[command(
    version,
    about = "Compare two published versions of a gem with diffoscope"
)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/gemdiff/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Gem source URL; repeat to offer several. Replaces configured sources
    #[arg(long = "source", value_name = "URL")]
    sources: Vec<String>,

    /// Directory holding fetched archives
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Directory receiving HTML reports
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Do not offer to open the report
    #[arg(long)]
    no_open: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write JSON logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    gemdiff::log::init(&cli.log_level, cli.log_file.as_deref())?;

    let config = Config::load(
        cli.config.as_deref(),
        Overrides {
            sources: cli.sources,
            cache_dir: cli.cache_dir,
            output_dir: cli.output_dir,
            no_open: cli.no_open,
        },
    )?;

    let session = Session::new(
        config,
        TerminalPrompt::new(),
        SystemCommandRunner,
        std::env::current_dir()?,
    )?;
    let mut app = App::with_rubygems(session);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(app.run());

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            let code = e.exit_code();
            if code != 0 {
                error!("{}", e);
            }
            Ok(ExitCode::from(code))
        }
    }
}
