use std::path::PathBuf;

use clabyrinth::Dims;
use clap::Parser;

use crate::{
    logging,
    settings::{OutputFormat, Settings},
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "labyrinth")]
pub struct Args {
    #[clap(help = "Width of the maze in cells [default: from settings]")]
    pub width: Option<i32>,
    #[clap(help = "Height of the maze in cells [default: from settings]")]
    pub height: Option<i32>,
    #[clap(short, long, help = "Seed for the maze, consecutive mazes use consecutive seeds")]
    pub seed: Option<u64>,
    #[clap(long, value_parser = parse_dims, help = "Cell to mark in the rendering, as COLUMN,ROW")]
    pub highlight: Option<Dims>,
    #[clap(short, long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,
    #[clap(short = 'n', long, default_value_t = 1, help = "Number of mazes to generate")]
    pub count: usize,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Log more, repeat for even more")]
    pub verbose: u8,
    #[clap(long, help = "Settings file to use instead of the default one")]
    pub config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,
}

/// Everything a run needs, after arguments were merged over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub size: Dims,
    pub seed: Option<u64>,
    pub highlight: Dims,
    pub format: OutputFormat,
    pub count: usize,
    pub log_level: log::LevelFilter,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }

    pub fn resolve(&self, settings: &Settings) -> RunOptions {
        let size = settings.get_size();

        RunOptions {
            size: Dims(
                self.width.unwrap_or(size.0),
                self.height.unwrap_or(size.1),
            ),
            seed: self.seed,
            highlight: self.highlight.unwrap_or_else(|| settings.get_highlight()),
            format: self.format.unwrap_or_else(|| settings.get_format()),
            count: self.count,
            log_level: logging::raise_level(settings.get_log_level(), self.verbose),
        }
    }
}

pub fn parse_dims(value: &str) -> Result<Dims, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected COLUMN,ROW, got '{}'", value))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|err| format!("invalid number '{}': {}", part, err))
    };

    Ok(Dims(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_parsing() {
        assert_eq!(parse_dims("3,2"), Ok(Dims(3, 2)));
        assert_eq!(parse_dims(" 0 , -1"), Ok(Dims(0, -1)));
        assert!(parse_dims("3").is_err());
        assert!(parse_dims("a,2").is_err());
    }

    #[test]
    fn settings_fill_the_gaps() {
        let args = Args::parse_from(["labyrinth"]);
        let settings = Settings::new()
            .set_size(Dims(8, 6))
            .set_highlight(Dims(2, 2))
            .set_format(OutputFormat::Json);

        assert_eq!(
            args.resolve(&settings),
            RunOptions {
                size: Dims(8, 6),
                seed: None,
                highlight: Dims(2, 2),
                format: OutputFormat::Json,
                count: 1,
                log_level: log::LevelFilter::Warn,
            }
        );
    }

    #[test]
    fn arguments_override_settings() {
        let args = Args::parse_from([
            "labyrinth",
            "12",
            "4",
            "--seed",
            "9",
            "--highlight",
            "1,3",
            "--format",
            "text",
            "-n",
            "3",
            "-vv",
        ]);
        let settings = Settings::new()
            .set_size(Dims(8, 6))
            .set_format(OutputFormat::Json);

        assert_eq!(
            args.resolve(&settings),
            RunOptions {
                size: Dims(12, 4),
                seed: Some(9),
                highlight: Dims(1, 3),
                format: OutputFormat::Text,
                count: 3,
                log_level: log::LevelFilter::Debug,
            }
        );
    }

    #[test]
    fn config_path() {
        let args = Args::parse_from(["labyrinth", "--config", "custom.ron"]);
        assert_eq!(args.config_path(), PathBuf::from("custom.ron"));

        let args = Args::parse_from(["labyrinth"]);
        assert_eq!(args.config_path(), Settings::default_path());
    }
}
