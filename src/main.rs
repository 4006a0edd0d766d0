use std::ffi::OsString;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};

use ppi::args::parse_args_os;
use ppi::config::{Settings, PROGRAM, VERSION};
use ppi::dispatch::App;
use ppi::logging::init_tracing;

fn main() -> Result<()> {
    let settings = Settings::from_env();
    init_tracing(settings.log_path.as_deref());

    let argv: Vec<OsString> = std::env::args_os().collect();
    let options = parse_args_os(&argv);

    let root = std::env::current_dir().context("failed to read current directory")?;
    let stdout = io::stdout();
    let app = App::new(PROGRAM, VERSION, settings.locale, root).with_color(stdout.is_terminal());

    let code = app.run(&options, &mut stdout.lock(), &mut io::stderr().lock());
    std::process::exit(code);
}
