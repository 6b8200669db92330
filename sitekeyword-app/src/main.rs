use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, error_line, render};
use sitekeyword_analyzer::Analyzer;
use sitekeyword_common::observability::{LogConfig, init_logging};
use sitekeyword_config::{AnalyzerConfig, ConfigLoader, default_config_path};
mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let Some(url) = cli.url.as_deref() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    if let Err(err) = init_logging(LogConfig::default()) {
        eprintln!("logging disabled: {err:#}");
    }

    // 1) Load config (env wins)
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return Ok(fail("config", &err)),
    };
    tracing::info!(%url, max_keywords = cli.keyword_limit(), "sitekeyword.start");

    let analyzer = match Analyzer::new(url, config).await {
        Ok(analyzer) => analyzer,
        Err(err) => return Ok(fail("create analyzer", &err)),
    };
    let result = match analyzer.analysis_result(cli.keyword_limit()) {
        Ok(result) => result,
        Err(err) => return Ok(fail("analysis", &err)),
    };

    match render(&result, cli.detail, cli.pretty) {
        Ok(json) => {
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(fail("json", &err)),
    }
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let loader = match (&cli.config, default_config_path()) {
        (Some(path), _) => ConfigLoader::new().with_file(path),
        (None, Some(path)) => ConfigLoader::new().with_optional_file(path),
        (None, None) => ConfigLoader::new(),
    };
    loader.load().context("loading config")
}

fn fail(stage: &str, err: &dyn std::fmt::Display) -> ExitCode {
    tracing::error!(stage, error = %err, "sitekeyword.failed");
    println!("{}", error_line(stage, err));
    ExitCode::FAILURE
}
