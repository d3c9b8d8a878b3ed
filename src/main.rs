//! fluent-translator - command line lookup
//!
//! Loads the configured translations directory and prints one message.

use anyhow::anyhow;
use fluent_translator_lib::core::Config;
use fluent_translator_lib::i18n::{args, Language, Translator};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Usage: fluent-translator [OPTIONS] <KEY> [LANGUAGE|auto] [JSON-ARGS]

Options:
  --config <PATH>  Read configuration from PATH instead of the default location
  --dir <PATH>     Translations directory, overrides the configured one
  -h, --help       Print this help

Example:
  fluent-translator --dir i18n greeting en_US '{\"name\": \"Ada\"}'
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(ExitCode::SUCCESS);
    }

    let config_path: Option<PathBuf> = pargs.opt_value_from_str("--config")?;
    let dir_override: Option<PathBuf> = pargs.opt_value_from_str("--dir")?;

    let mut free = pargs.finish().into_iter().map(|arg| {
        arg.into_string()
            .map_err(|arg| anyhow!("Argument is not valid UTF-8: {:?}", arg))
    });
    let key = free
        .next()
        .transpose()?
        .ok_or_else(|| anyhow!("Missing message key\n\n{}", HELP))?;
    let language_arg = free.next().transpose()?;
    let json_arg = free.next().transpose()?;

    let config = match config_path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    let translator = Translator::from_config(&config)?;

    let language = match language_arg.as_deref() {
        None | Some("auto") => Language::detect_system().unwrap_or(translator.default_language()),
        Some(code) => code.parse()?,
    };

    let fluent_args = match json_arg {
        Some(raw) => Some(args::from_json(&serde_json::from_str(&raw)?)?),
        None => None,
    };

    let dir = dir_override.unwrap_or_else(|| config.translator.translations_dir.clone());
    if let Err(e) = translator.init(&dir).await {
        eprintln!("{}: {}", e.code(), e);
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", translator.lookup(&key, language, fluent_args.as_ref()));
    Ok(ExitCode::SUCCESS)
}
