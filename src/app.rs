use std::io::Write;

use clabyrinth::{algorithms::generate_seeded, navigation};

use crate::{cli::RunOptions, document::MazeDocument, error::Error, settings::OutputFormat};

/// Generates `options.count` mazes and writes them to `out`.
pub fn run(options: &RunOptions, out: &mut impl Write) -> Result<(), Error> {
    for i in 0..options.count {
        let seed = options.seed.map(|seed| seed.wrapping_add(i as u64));
        let (grid, seed) = generate_seeded(options.size, seed)?;

        log::info!(
            "Generated {}x{} maze with seed {}",
            grid.width(),
            grid.height(),
            seed
        );
        log::debug!("Maze has {} passages", navigation::passage_count(&grid));

        match options.format {
            OutputFormat::Text => write!(out, "{}", grid.render(Some(options.highlight)))?,
            OutputFormat::Json => {
                let document = MazeDocument::next(&grid, Some(options.highlight));
                writeln!(out, "{}", document.to_json()?)?
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clabyrinth::{Dims, MazeError};

    fn options(format: OutputFormat) -> RunOptions {
        RunOptions {
            size: Dims(4, 3),
            seed: Some(17),
            highlight: Dims(1, 1),
            format,
            count: 2,
            log_level: log::LevelFilter::Off,
        }
    }

    fn output(options: &RunOptions) -> String {
        let mut out = Vec::new();
        run(options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output() {
        let out = output(&options(OutputFormat::Text));
        let (first, _) = generate_seeded(Dims(4, 3), Some(17)).unwrap();
        let (second, _) = generate_seeded(Dims(4, 3), Some(18)).unwrap();

        assert_eq!(
            out,
            first.render(Some(Dims(1, 1))) + &second.render(Some(Dims(1, 1)))
        );
        assert_eq!(out.matches("**").count(), 2);
    }

    #[test]
    fn json_output() {
        let out = output(&options(OutputFormat::Json));
        let documents = out
            .lines()
            .map(|line| serde_json::from_str::<MazeDocument>(line).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(documents.len(), 2);
        assert!(documents[1].id > documents[0].id);
        for document in &documents {
            assert_eq!((document.width, document.height), (4, 3));
            assert_eq!(document.status, "success");
            assert!(navigation::is_connected(&document.to_grid().unwrap()));
        }
    }

    #[test]
    fn invalid_size() {
        let options = RunOptions {
            size: Dims(0, 3),
            ..options(OutputFormat::Text)
        };
        let mut out = Vec::new();

        assert!(matches!(
            run(&options, &mut out),
            Err(Error::Maze(MazeError::InvalidDimension {
                width: 0,
                height: 3
            }))
        ));
        assert!(out.is_empty());
    }
}
