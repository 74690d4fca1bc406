// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use geotable_app::{SortKey, ViewController};
use geotable_tui::UiOptions;
use runtime::{DataSource, LogTarget, ViewOptions};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `geotable --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let headless = options.check_only || options.dump;
    runtime::init_logging(&LogTarget::for_mode(&config, headless))?;

    let mut source = DataSource::from_config(&config, options.demo).with_context(|| {
        format!(
            "invalid [source] config in {}; fix endpoint/timeout values",
            options.config_path.display()
        )
    })?;
    if options.check_only {
        tracing::info!(source = %source.describe(), "configuration ok");
        return Ok(());
    }

    let mut controller = ViewController::new();
    controller.subscribe(runtime::log_view_event);
    for command in runtime::startup_commands(&config, &options.view) {
        controller.dispatch(command);
    }

    if options.dump {
        controller.load(&mut source)?;
        if let Some(error) = controller.state().last_error() {
            bail!("{error} from {}; rerun with GEOTABLE_LOG=debug for the cause", source.describe());
        }
        print!("{}", runtime::render_dump(controller.state()));
        return Ok(());
    }

    geotable_tui::run_app(
        &mut controller,
        &mut source,
        UiOptions {
            date_picker: config.date_picker_enabled(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    check_only: bool,
    dump: bool,
    show_help: bool,
    view: ViewOptions,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        demo: false,
        check_only: false,
        dump: false,
        show_help: false,
        view: ViewOptions::default(),
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--dump" => {
                options.dump = true;
            }
            "--query" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--query requires search text"))?;
                options.view.query = Some(value.as_ref().to_owned());
            }
            "--category" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--category requires a category name"))?;
                options.view.category = Some(value.as_ref().to_owned());
            }
            "--theme" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--theme requires a theme name"))?;
                options.view.theme = Some(value.as_ref().to_owned());
            }
            "--sort" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow!("--sort requires a column: {}", config::sort_key_names())
                })?;
                let key = SortKey::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown sort column {:?}; use one of: {}",
                        value.as_ref(),
                        config::sort_key_names()
                    )
                })?;
                options.view.sort = Some(key);
            }
            "--desc" => {
                options.view.descending = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("geotable");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --demo                   Use seeded demo records instead of the network");
    println!("  --check                  Validate config and source settings, then exit");
    println!("  --dump                   Load once and print visible records as TSV");
    println!("  --query <text>           Initial search text");
    println!("  --category <name>        Initial category filter");
    println!("  --theme <name>           Initial theme filter");
    println!("  --sort <column>          Initial sort column ({})", config::sort_key_names());
    println!("  --desc                   Sort descending");
    println!("  --help                   Show this help");
}
