// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod render;

use anyhow::{Context, Result, anyhow};
use config::Config;
use std::env;
use std::path::PathBuf;
use varscope_filter::{FilterExpression, RuleCatalog};
use varscope_host::{HostClient, HttpTransport};
use varscope_props::Extractor;
use varscope_view::{Column, Explorer, visible_columns};

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

    init_tracing();

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `varscope --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let base_url = options
        .url
        .as_deref()
        .unwrap_or_else(|| config.host_base_url());
    let transport = HttpTransport::new(base_url, config.host_timeout()?).with_context(|| {
        format!(
            "invalid [host] config in {}; fix base_url/timeout values",
            options.config_path.display()
        )
    })?;

    let rules = RuleCatalog::standard();
    let text = options
        .expression
        .clone()
        .unwrap_or_else(|| config.effective_expression());
    let expression = FilterExpression::parse(&text, &rules);
    let mut explorer = Explorer::new(rules, Extractor::with_defaults(), expression);

    if options.check_only {
        return Ok(());
    }

    explorer.attach(HostClient::new(Box::new(transport)))?;

    if let Some(name) = &options.detail {
        let row = explorer
            .visible()
            .iter()
            .position(|record| &record.key == name)
            .ok_or_else(|| {
                anyhow!(
                    "variable {name:?} is not visible; adjust --expr or the [filter] config"
                )
            })?;
        print!("{}", explorer.fetch_detail(row).to_text());
        return Ok(());
    }

    let columns = visible_columns(config.compact());
    let headers: Vec<&str> = columns.iter().map(|column| column.label()).collect();
    let rows: Vec<Vec<String>> = (0..explorer.row_count())
        .map(|row| {
            columns
                .iter()
                .map(|&column| {
                    if column == Column::Value && !config.truncate() {
                        explorer.record(row).value_label.clone()
                    } else {
                        explorer.cell(row, column)
                    }
                })
                .collect()
        })
        .collect();
    print!("{}", render::render_aligned(&headers, &rows));
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("VARSCOPE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    url: Option<String>,
    expression: Option<String>,
    detail: Option<String>,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        url: None,
        expression: None,
        detail: None,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
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
            "--url" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--url requires a host base URL"))?;
                options.url = Some(value.as_ref().to_owned());
            }
            "--expr" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--expr requires a filter expression"))?;
                options.expression = Some(value.as_ref().to_owned());
            }
            "--detail" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--detail requires a variable name"))?;
                options.detail = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
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
    println!("varscope");
    println!("  --config <path>          Use a specific config path");
    println!("  --url <base-url>         Override the evaluation host URL");
    println!("  --expr <expression>      Override the filter expression, e.g. \"-all +simples\"");
    println!("  --detail <name>          Print the expanded metadata for one variable");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config without contacting the host");
    println!("  --help                   Show this help");
}
