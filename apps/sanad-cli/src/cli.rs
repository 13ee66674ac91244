//! # Command Line Interface
//!
//! ```text
//! sanad [OPTIONS] <AMOUNT>...
//!
//!   sanad 1234.56                       One thousand two hundred ... cents
//!   sanad -l arabic -c IQD 200          مائتان دينار عراقي
//!   sanad --all 3000                    every language × currency pair
//!   sanad --json 1,250 ١٢٥٠             one JSON object per line
//!   sanad -l kurdish --write-config     persist defaults to sanad.toml
//! ```

use clap::{ArgAction, Parser};
use sanad_core::validation::parse_amount;
use sanad_core::{AmountSpeller, Currency, Language};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::config::{OutputFormat, SanadConfig};
use crate::error::CliResult;

#[derive(Debug, Parser)]
#[command(name = "sanad", version, about)]
pub struct Cli {
    /// Amounts to spell out (e.g. 1234.56, 1,250, ١٢٥٠)
    #[arg(
        required_unless_present = "write_config",
        allow_negative_numbers = true
    )]
    pub amounts: Vec<String>,

    /// Language: english, arabic, kurdish
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Currency: USD, IQD
    #[arg(short, long)]
    pub currency: Option<Currency>,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print one JSON object per amount
    #[arg(long)]
    pub json: bool,

    /// Spell every amount in every language and currency
    #[arg(long)]
    pub all: bool,

    /// Save the effective language/currency/format to the config file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One converted amount, as printed with `--json`.
#[derive(Debug, Serialize)]
struct Rendered<'a> {
    amount: f64,
    language: Language,
    currency: Currency,
    words: &'a str,
}

impl Cli {
    /// Runs the command, writing phrases to stdout.
    pub fn run(self) -> CliResult<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)
    }

    /// Runs the command against an arbitrary writer.
    #[instrument(skip_all, fields(amounts = self.amounts.len()))]
    pub fn execute<W: Write>(self, out: &mut W) -> CliResult<()> {
        let config = self.effective_config()?;

        if self.write_config {
            let path = config.save(self.config)?;
            writeln!(out, "{}", path.display())?;
            return Ok(());
        }

        let spellers = if self.all {
            Language::ALL
                .iter()
                .flat_map(|&lang| {
                    Currency::ALL
                        .iter()
                        .map(move |&currency| AmountSpeller::new(lang, currency))
                })
                .collect()
        } else {
            vec![config.speller]
        };

        for input in &self.amounts {
            let amount = parse_amount(input)?;
            for speller in &spellers {
                let words = speller.speak(amount)?;
                debug!(
                    amount,
                    language = %speller.language,
                    currency = %speller.currency,
                    "Converted amount"
                );
                self.print(out, &config, input, amount, speller, &words)?;
            }
        }

        info!(count = self.amounts.len(), "Done");
        Ok(())
    }

    /// Config file + environment, then command line flags on top.
    fn effective_config(&self) -> CliResult<SanadConfig> {
        let mut config = match &self.config {
            Some(path) => SanadConfig::load(Some(path.clone()))?,
            None => SanadConfig::load_or_default(None),
        };

        if let Some(language) = self.language {
            config.speller.language = language;
        }
        if let Some(currency) = self.currency {
            config.speller.currency = currency;
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }

        debug!(
            language = %config.speller.language,
            currency = %config.speller.currency,
            format = %config.output.format,
            "Effective configuration"
        );
        Ok(config)
    }

    fn print<W: Write>(
        &self,
        out: &mut W,
        config: &SanadConfig,
        input: &str,
        amount: f64,
        speller: &AmountSpeller,
        words: &str,
    ) -> CliResult<()> {
        match config.output.format {
            OutputFormat::Json => {
                let line = serde_json::to_string(&Rendered {
                    amount,
                    language: speller.language,
                    currency: speller.currency,
                    words,
                })?;
                writeln!(out, "{}", line)?;
            }
            OutputFormat::Text => {
                if config.output.show_amount {
                    write!(out, "{}: ", input.trim())?;
                }
                if self.all {
                    write!(out, "[{} {}] ", speller.language, speller.currency)?;
                }
                writeln!(out, "{}", words)?;
            }
        }
        Ok(())
    }
}
