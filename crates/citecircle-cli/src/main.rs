use anyhow::{Context, Result, bail};
use citecircle_core::{Category, CitationRecord};
use citecircle_graph::{
    CanonicalOrder, CircularLayouter, DisplayOrder, Palette, RelationMatrix, display_titles,
};
use citecircle_render::{CircleFigure, FigureConfig, LegendEntry};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

const DEFAULT_FIGURE_NAME: &str = "Gender_Rep_Citation_Circle_Figure";

/// Circle-graph visualization of gender representation in a bibliography.
///
/// Reads the Authors.csv file created by the cleanBib notebook and renders
/// every citation around a circle, connected to its first/last author gender
/// pairing category.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the Authors.csv file (created with the cleanBib tool)
    authors_csv: PathBuf,

    /// Five edge colors, in MM MW WM WW Unknown order
    #[arg(
        long = "edge-colors",
        num_args = 5,
        value_name = "COLOR",
        default_values_t = [
            "indianred",
            "steelblue",
            "mediumpurple",
            "mediumseagreen",
            "aliceblue",
        ].map(String::from)
    )]
    edge_colors: Vec<String>,

    /// Six node colors: shared placeholder color first, then MM MW WM WW
    /// Unknown
    #[arg(
        long = "node-colors",
        num_args = 6,
        value_name = "COLOR",
        default_values_t = ["dimgrey", "red", "blue", "purple", "green", "white"].map(String::from)
    )]
    node_colors: Vec<String>,

    /// Legend background color
    #[arg(long = "legend-color", default_value = "white")]
    legend_color: String,

    /// Directory the figure is written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Figure title words; also drives the output file name
    #[arg(short = 't', long = "title", num_args = 1..)]
    title: Vec<String>,

    /// Circle start offset in degrees
    #[arg(long = "start-angle", default_value_t = CircularLayouter::DEFAULT_START_ANGLE)]
    start_angle: f32,

    /// Suppress info output (errors always printed)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(err) = run(&args) {
        error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let started = Instant::now();

    if !args.out_dir.is_dir() {
        bail!("output path {} is not a directory", args.out_dir.display());
    }
    let palette = Palette::new(args.edge_colors.clone(), args.node_colors.clone())?;

    let records = load_records(&args.authors_csv)?;
    info!("loaded {} citations from {}", records.len(), args.authors_csv.display());

    let canonical = CanonicalOrder::build(&records);
    let display = DisplayOrder::from_canonical(&canonical);
    let matrix = RelationMatrix::build(&canonical);
    let angles = CircularLayouter::new(args.start_angle).layout(&display);
    let titles = display_titles(&canonical);
    let node_colors = palette.node_colors(&canonical);

    for (category, count) in Category::ALL.iter().zip(canonical.tally()) {
        info!("{category}: {count}");
    }

    let (title, file_stem) = figure_name(&args.title);
    let config = FigureConfig {
        title,
        legend_background: args.legend_color.clone(),
        legend: palette
            .legend_entries()
            .into_iter()
            .map(|(label, color)| LegendEntry {
                label: label.to_string(),
                color: color.to_string(),
            })
            .collect(),
        ..FigureConfig::default()
    };
    let background = config.background.clone();
    let colormap = palette.edge_colormap(&background);
    let aligned_angles = angles.canonical_angles(&canonical);

    let figure = CircleFigure::new(
        &matrix,
        &titles,
        &aligned_angles,
        &node_colors,
        &colormap,
        config,
    )?;
    let out_path = args.out_dir.join(format!("{file_stem}.svg"));
    figure
        .export(&out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;

    info!("figure written to {}", out_path.display());
    info!("full runtime: {:.2?}", started.elapsed());
    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<CitationRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Authors.csv not readable at {}", path.display()))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: CitationRecord =
            row.with_context(|| format!("malformed row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Figure title and output file stem from the title words. The stem keeps
/// only word characters, matching the original tool's file naming.
fn figure_name(words: &[String]) -> (String, String) {
    if words.is_empty() {
        return (String::new(), DEFAULT_FIGURE_NAME.to_string());
    }
    let title = words.join(" ");
    let mut stem = words.join("_");
    stem.push_str("_Citation_Circle");
    stem.retain(|c| c.is_ascii_alphanumeric() || c == '_');
    (title, stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_figure_name_defaults_without_title() {
        let (title, stem) = figure_name(&[]);
        assert_eq!(title, "");
        assert_eq!(stem, DEFAULT_FIGURE_NAME);
    }

    #[test]
    fn test_figure_name_strips_non_word_characters() {
        let words = vec!["My Paper:".to_string(), "v2!".to_string()];
        let (title, stem) = figure_name(&words);
        assert_eq!(title, "My Paper: v2!");
        assert_eq!(stem, "MyPaper_v2_Citation_Circle");
    }

    #[test]
    fn test_load_records_reads_cleanbib_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CitationKey,GendCat").unwrap();
        writeln!(file, "Smith2020,MM").unwrap();
        writeln!(file, "Lee2021,WU").unwrap();
        file.flush().unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CitationRecord::new("Smith2020", "MM"));
        assert_eq!(records[1].category(), Category::Unknown);
    }

    #[test]
    fn test_load_records_fails_with_path_in_message() {
        let err = load_records(Path::new("/nonexistent/Authors.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/Authors.csv"));
    }
}
