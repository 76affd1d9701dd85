// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thalassa demo CLI.
//!
//! Runs one estimation pass over the built-in demo selection and prints the
//! report message as JSON on stdout. By default the built-in demo sheet is used;
//! `--sheet` reads rows from a JSON file instead.

use std::error::Error;
use std::time::Duration;

use thalassa::provider::{JsonSheetFile, StaticSheet};
use thalassa::run::Runner;
use thalassa::source::fixtures::{demo_rows, demo_selection};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--sheet <rows.json>] [--pretty]\n  {program} [--latency-ms <ms>] [--pretty]\n\nWithout --sheet the built-in demo sheet is used; --latency-ms simulates the\nprovider round trip and only applies to the demo sheet.\n\n--pretty pretty-prints the report JSON."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    sheet_path: Option<String>,
    latency_ms: Option<u64>,
    pretty: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sheet" => {
                if options.sheet_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.sheet_path = Some(path);
            }
            "--latency-ms" => {
                if options.latency_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let millis: u64 = raw.parse().map_err(|_| ())?;
                options.latency_ms = Some(millis);
            }
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            _ => return Err(()),
        }
    }

    if options.sheet_path.is_some() && options.latency_ms.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();

        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "thalassa".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let selection = demo_selection();
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let report = runtime.block_on(async {
            match &options.sheet_path {
                Some(path) => Runner::new(selection, JsonSheetFile::new(path)).run_once().await,
                None => {
                    let mut provider = StaticSheet::new(demo_rows());
                    if let Some(millis) = options.latency_ms {
                        provider = provider.with_latency(Duration::from_millis(millis));
                    }
                    Runner::new(selection, provider).run_once().await
                }
            }
        })?;

        let rendered = if options.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        println!("{rendered}");

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("thalassa: {err}");
        std::process::exit(1);
    }
}
