//! Command implementations for the heatmap CLI.
//!
//! Every subcommand loads one daily temperature table, builds the heatmap
//! model once, and then reports or exports it for the selected mode.

use clap::{Args, Subcommand};
use heat_data::window::DEFAULT_WINDOW_YEARS;
use heat_record::{Columns, Mode, ParseOptions};

pub mod export;
pub mod load;
pub mod report;

/// Where to read the table from and how to interpret it.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path (optionally .gz) or http(s) URL of the daily temperature CSV
    #[arg(short = 'i', long)]
    pub input: String,

    /// Statistic that drives coloring: max or min
    #[arg(short = 'm', long, default_value_t = Mode::Max)]
    pub mode: Mode,

    /// Number of most recent calendar years shown in the detail view
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_WINDOW_YEARS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub window_years: u32,

    /// Header of the YYYY-MM-DD date column
    #[arg(long, default_value = "date")]
    pub date_column: String,

    /// Header of the daily maximum temperature column
    #[arg(long, default_value = "max_temperature")]
    pub max_column: String,

    /// Header of the daily minimum temperature column
    #[arg(long, default_value = "min_temperature")]
    pub min_column: String,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

impl InputArgs {
    pub fn parse_options(&self) -> anyhow::Result<ParseOptions> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("delimiter must be a single ASCII character, got `{}`", self.delimiter);
        }
        Ok(ParseOptions {
            columns: Columns {
                date: self.date_column.clone(),
                max_temperature: self.max_column.clone(),
                min_temperature: self.min_column.clone(),
            },
            delimiter: self.delimiter as u8,
        })
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the yearly/monthly max-min grid
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the month cells of the recent-years detail view
    Detail {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the color and axis extents for the selected mode
    Extent {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write the heatmap view model as JSON
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { input } => {
            let model = load::load_model(&input).await?;
            print!("{}", report::format_summary(&model, input.mode));
            Ok(())
        }
        Command::Detail { input } => {
            let model = load::load_model(&input).await?;
            print!("{}", report::format_detail(&model, input.mode));
            Ok(())
        }
        Command::Extent { input } => {
            let model = load::load_model(&input).await?;
            print!("{}", report::format_extents(&model.extents(input.mode), input.mode));
            Ok(())
        }
        Command::Export {
            input,
            output,
            pretty,
        } => {
            let model = load::load_model(&input).await?;
            export::write_view(&model.view(input.mode), output.as_deref(), pretty)
        }
    }
}
