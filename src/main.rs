// SPDX-License-Identifier: PMPL-1.0-or-later

//! langnames: Firefox language-name aggregation and HTML reporting.
//!
//! Two subcommands mirror the two halves of the pipeline: `generate`
//! rebuilds the aggregated JSON document from remote and corpus data, and
//! `render` turns the JSON documents into static HTML tables. Defaults
//! reproduce the repository's standard layout, so both run argument-free.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use langnames::aggregate;
use langnames::cldr::CldrCorpus;
use langnames::fetch::{self, TransvisionClient};
use langnames::render;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "langnames")]
#[command(version)]
#[command(about = "Aggregates Firefox shipping-locale language names from CLDR and Transvision")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch shipping locales and rebuild the aggregated JSON document
    Generate {
        /// Directory containing the cldr-localenames-full and
        /// cldr-misc-full packages
        #[arg(long, default_value = "node_modules")]
        corpus: PathBuf,

        /// Output path for the aggregated document
        #[arg(short, long, default_value = "output/languages.json")]
        output: PathBuf,

        /// Locale-list URL (repeatable; defaults to the mozilla-central
        /// desktop and Android lists)
        #[arg(long = "locales-url")]
        locales_urls: Vec<String>,

        /// Transvision entity endpoint; the locale code is appended
        #[arg(long, default_value = fetch::DEFAULT_TRANSVISION_ENDPOINT)]
        transvision: String,
    },

    /// Render the curated and complete JSON documents as HTML tables
    Render {
        /// Curated JSON document (locale code to display name)
        #[arg(long, default_value = "output/languages_curated.json")]
        curated: PathBuf,

        /// Complete aggregated JSON document
        #[arg(long, default_value = "output/languages.json")]
        complete: PathBuf,

        /// Directory containing curated.html and complete.html templates
        #[arg(long, default_value = "templates")]
        templates: PathBuf,

        /// Directory receiving the rendered pages
        #[arg(long, default_value = "docs")]
        docs: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            corpus,
            output,
            locales_urls,
            transvision,
        } => {
            let urls: Vec<String> = if locales_urls.is_empty() {
                fetch::DEFAULT_LOCALE_LIST_URLS
                    .iter()
                    .map(|url| url.to_string())
                    .collect()
            } else {
                locales_urls
            };

            println!("Fetching shipping locales...");
            let client = fetch::http_client()?;
            let shipping = fetch::fetch_shipping_locales(&client, &urls);
            println!("  {} shipping locales", shipping.len());

            let corpus = CldrCorpus::new(corpus);
            let names = TransvisionClient::new(client, transvision);
            let languages = aggregate::build_collection(&shipping, &corpus, &names);
            aggregate::write_collection(&languages, &output)?;

            println!(
                "{}",
                format!("Saved {} languages to {}", languages.len(), output.display()).green()
            );
        }

        Commands::Render {
            curated,
            complete,
            templates,
            docs,
        } => {
            let curated_out = docs.join("index.html");
            render::render_curated_file(&curated, &templates.join("curated.html"), &curated_out)?;
            println!("Rendered {}", curated_out.display());

            let complete_out = docs.join("complete.html");
            render::render_complete_file(
                &complete,
                &templates.join("complete.html"),
                &complete_out,
            )?;
            println!("Rendered {}", complete_out.display());
        }
    }

    Ok(())
}
