// SPDX-License-Identifier: MPL-2.0
use site_header::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        path,
        config_dir,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!("Invalid arguments: {}", err);
            eprintln!("Usage: site-header [--lang <code>] [--config-dir <dir>] [path]");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
