use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::{ArgAction, Parser};

use tajimas_d::adapter::fasta::read_sequences_from_path;
use tajimas_d::stats::{GlobalPi, GlobalStatistic, TajimaD, WattersonTheta};
use tajimas_d::{Alignment, PopgenResult};

const NAME: &str = env!("CARGO_BIN_NAME");

/// Compute Tajima's D, the Pi estimator or the Watterson estimator for aligned sequences.
///
/// Tajima's D is computed if none of the statistics are selected.
#[derive(Debug, Parser)]
#[command(name = NAME, version, about, long_about = None)]
pub struct Cli {
    /// Path to FASTA file with all sequences.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    path: PathBuf,

    /// Compute the Pi estimator.
    #[arg(short = 'p', long)]
    pi: bool,

    /// Compute Tajima's D.
    #[arg(short = 't', long)]
    tajima: bool,

    /// Compute the Watterson estimator.
    #[arg(short = 'w', long)]
    watterson: bool,

    /// Number of decimals printed for each statistic.
    #[arg(long, default_value_t = 6, value_name = "INT")]
    precision: usize,

    /// Suppress warnings.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity.
    ///
    /// Flag can be set multiple times to increase verbosity.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Statistic {
    Tajima,
    Pi,
    Watterson,
}

impl Statistic {
    pub fn calculate<S: AsRef<[u8]>>(self, alignment: &Alignment<'_, S>) -> PopgenResult<f64> {
        Ok(match self {
            Statistic::Tajima => TajimaD::from_alignment(alignment)?.as_raw(),
            Statistic::Pi => GlobalPi::from_alignment(alignment)?.as_raw(),
            Statistic::Watterson => WattersonTheta::from_alignment(alignment)?.as_raw(),
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Tajima => "Tajima's D score:\t\t",
            Statistic::Pi => "Pi-Estimator score:\t\t",
            Statistic::Watterson => "Watterson-Estimator score:\t",
        }
    }
}

impl Cli {
    /// The selected statistics, in output order.
    pub fn statistics(&self) -> Vec<Statistic> {
        let mut statistics = Vec::with_capacity(3);
        if self.tajima || !(self.pi || self.watterson) {
            statistics.push(Statistic::Tajima);
        }
        if self.pi {
            statistics.push(Statistic::Pi);
        }
        if self.watterson {
            statistics.push(Statistic::Watterson);
        }
        statistics
    }

    fn init_logger(&self) {
        let level = if self.quiet {
            log::LevelFilter::Off
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        match env_logger::Builder::new()
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let level = record.level().as_str().to_lowercase();
                let args = record.args();
                writeln!(buf, "[{NAME} {level:>5}] {args}")
            })
            .try_init()
        {
            Ok(()) => (),
            Err(e) => eprintln!("failed to setup logger: {e}"),
        }
    }

    pub fn run(self) -> Result<(), Error> {
        self.init_logger();

        let sequences = read_sequences_from_path(&self.path)
            .with_context(|| format!("failed to read sequences from {}", self.path.display()))?;
        let alignment = Alignment::new(&sequences)?;

        // everything is computed before anything is written
        let results = self
            .statistics()
            .into_iter()
            .map(|statistic| {
                statistic
                    .calculate(&alignment)
                    .map(|value| (statistic, value))
            })
            .collect::<PopgenResult<Vec<_>>>()?;

        write_statistics(&mut io::stdout().lock(), &results, self.precision)?;
        Ok(())
    }
}

fn write_statistics<W: Write>(
    writer: &mut W,
    results: &[(Statistic, f64)],
    precision: usize,
) -> io::Result<()> {
    for (statistic, value) in results {
        writeln!(writer, "{}{value:.precision$}", statistic.label())?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
