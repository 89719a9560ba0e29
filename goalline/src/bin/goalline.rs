use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use tracing::{debug, info};

use goalline::batch::{output_record, MatchRecord, OUTPUT_HEADER};
use goalline::csv::{CsvReader, CsvWriter};
use goalline::domain::OutcomeProbs;
use goalline::engine::{Engine, DEFAULT_GOAL_CAP};
use goalline::factorial::Lookup;
use goalline::print;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// expected score rate of side 1
    #[clap(long)]
    home: Option<f64>,

    /// expected score rate of side 2
    #[clap(long)]
    away: Option<f64>,

    /// handicap applied to side 1, e.g. -0.5 or 0/-0.5
    #[clap(long, default_value = "0", allow_hyphen_values = true)]
    handicap: String,

    /// goal cap; higher scores are folded into the last bucket
    #[clap(short = 'c', long, default_value_t = DEFAULT_GOAL_CAP as i64, allow_hyphen_values = true)]
    cap: i64,

    /// CSV file of home_rate,away_rate,handicap rows to price
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// where to write the priced CSV to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,

    /// print the score distributions
    #[clap(short = 'd', long = "dists")]
    print_distributions: bool,

    /// print the result as JSON
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        let single = self.home.is_some() || self.away.is_some();
        if single == self.file.is_some() {
            bail!("either the --home and --away rates or the -f flag must be specified");
        }
        if single && (self.home.is_none() || self.away.is_none()) {
            bail!("both the --home and --away rates must be specified");
        }
        if self.out.is_some() && self.file.is_none() {
            bail!("the -o flag requires -f");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let start_time = Instant::now();
    let engine = Engine::<Lookup>::default();
    match &args.file {
        Some(file) => price_file(&engine, &args, file)?,
        None => price_single(&engine, &args)?,
    }
    let elapsed = start_time.elapsed();
    debug!("took {elapsed:?}");
    Ok(())
}

fn price_single(engine: &Engine, args: &Args) -> anyhow::Result<()> {
    let priced = engine
        .compute_detailed(args.home, args.away, Some(args.handicap.as_str()), args.cap)?
        .ok_or(anyhow!("both rates must be specified"))?;

    if args.json {
        println!("{}", serde_json::to_string(&priced.probs)?);
        return Ok(());
    }

    if args.print_distributions {
        println!(
            "Score distributions:\n{}",
            Console::default().render(&print::tabulate_distributions(&priced.home, &priced.away))
        );
    }
    println!(
        "Handicap {}:\n{}",
        priced.handicap,
        Console::default().render(&print::tabulate_outcomes(&priced.probs))
    );
    Ok(())
}

fn price_file(engine: &Engine, args: &Args, file: &Path) -> anyhow::Result<()> {
    let mut priced = vec![];
    for (index, cells) in CsvReader::open(file)?.enumerate().skip(1) {
        let row = index + 1;
        let record = MatchRecord::parse(row, &cells?)?;
        let probs = engine
            .compute(
                record.home_rate,
                record.away_rate,
                record.handicap.as_deref(),
                args.cap,
            )
            .map_err(|err| anyhow!("row {row}: {err}"))?;
        priced.push((record, probs));
    }
    let unknown = priced.iter().filter(|(_, probs)| probs.is_none()).count();
    info!("priced {} matches, {unknown} with insufficient data", priced.len());

    match &args.out {
        Some(out) => {
            let mut csv = CsvWriter::create(out)?;
            csv.append(OUTPUT_HEADER)?;
            for (_, probs) in &priced {
                csv.append(output_record(probs.as_ref()))?;
            }
            csv.flush()?;
            info!("wrote {}", out.display());
        }
        None => {
            println!("{}", Console::default().render(&tabulate_priced(&priced)));
        }
    }
    Ok(())
}

fn tabulate_priced(priced: &[(MatchRecord, Option<OutcomeProbs>)]) -> Table {
    let mut table = Table::default()
        .with_cols(
            (0..6)
                .map(|_| Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)))
                .collect(),
        )
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Rate 1".into(),
                "Rate 2".into(),
                "Handicap".into(),
                "Win 1".into(),
                "Draw".into(),
                "Win 2".into(),
            ],
        ));
    for (record, probs) in priced {
        let [home_win, draw, away_win] = output_record(probs.as_ref());
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format_optional(record.home_rate).into(),
                format_optional(record.away_rate).into(),
                record.handicap.clone().unwrap_or_default().into(),
                home_win.into(),
                draw.into(),
                away_win.into(),
            ],
        ));
    }
    table
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
