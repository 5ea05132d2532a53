use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::consts::{
    FILENAME_TIMESTAMP_FORMAT, NOISE_STD_DEV, PLOT_HEIGHT, PLOT_WIDTH, SAMPLE_COUNT,
    TITLE_TIMESTAMP_FORMAT, X_MAX, X_MIN,
};
use crate::error::AppError;
use crate::manifest::Manifest;
use crate::plot::id::{PlotId, plot_ids};
use crate::plot::signal::{linspace, noisy_sine};
use crate::render::LineChart;
use crate::utils::{Clock, debug_log, progress};

/// Everything a generation run needs besides the clock and noise source
#[derive(Debug, Clone)]
pub(crate) struct GenerationConfig {
    pub(crate) numbers: Vec<String>,
    pub(crate) letters: Vec<String>,
    pub(crate) output_dir: PathBuf,
    pub(crate) manifest_path: PathBuf,
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub(crate) struct GeneratedRun {
    /// Instant shared by every filename in the batch
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) manifest: Manifest,
}

pub(crate) fn image_file_name(id: &PlotId, timestamp: NaiveDateTime) -> String {
    format!("plot_{id}_{}.png", timestamp.format(FILENAME_TIMESTAMP_FORMAT))
}

/// Manifest value for an image: forward slashes regardless of platform
fn manifest_path_value(path: &Path) -> String {
    let value = path.to_string_lossy();
    // Backslash is an ordinary filename character outside Windows
    if cfg!(windows) {
        value.replace('\\', "/")
    } else {
        value.into_owned()
    }
}

fn build_chart<R: Rng + ?Sized>(id: &PlotId, timestamp: NaiveDateTime, rng: &mut R) -> LineChart {
    let xs = linspace(X_MIN, X_MAX, SAMPLE_COUNT);
    let ys = noisy_sine(&xs, id.frequency(), NOISE_STD_DEV, rng);
    LineChart::new(PLOT_WIDTH, PLOT_HEIGHT)
        .data(xs, ys)
        .title(format!(
            "Plot {id} - Generated on {}",
            timestamp.format(TITLE_TIMESTAMP_FORMAT)
        ))
        .labels("X-axis", "Y-axis")
        .legend(format!("Data for {id}"))
}

/// Render one chart per identifier pair into the output directory.
///
/// The clock is read once; all files in the batch share that timestamp.
/// Existing files in the output directory are left alone.
pub(crate) fn generate_plots<C: Clock + ?Sized, R: Rng + ?Sized>(
    config: &GenerationConfig,
    clock: &C,
    rng: &mut R,
) -> Result<GeneratedRun, AppError> {
    let ids = plot_ids(&config.numbers, &config.letters)?;
    let timestamp = clock.now();
    let start = Instant::now();

    progress!("--- Starting plot generation ---");

    fs::create_dir_all(&config.output_dir).map_err(|source| AppError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut manifest = Manifest::default();
    for id in &ids {
        let path = config.output_dir.join(image_file_name(id, timestamp));
        // Chart and its framebuffer go out of scope before the next one is built
        build_chart(id, timestamp, rng)
            .save(&path)
            .map_err(|source| AppError::Render {
                id: id.to_string(),
                source,
            })?;

        let value = manifest_path_value(&path);
        progress!("  > Saved plot: {value}");
        manifest.insert(id.to_string(), value);
    }

    debug_log!(
        "Rendered {} plots in {:.2}ms",
        manifest.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(GeneratedRun {
        timestamp,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(dir: &Path) -> GenerationConfig {
        GenerationConfig {
            numbers: vec!["1".into(), "2".into(), "3".into()],
            letters: vec!["A".into(), "B".into(), "C".into()],
            output_dir: dir.join("images"),
            manifest_path: dir.join("images.json"),
        }
    }

    fn clock(at: &str) -> FixedClock {
        FixedClock::parse(at).unwrap()
    }

    #[test]
    fn file_name_embeds_id_and_timestamp() {
        let id = PlotId {
            number: "2".into(),
            letter: "B".into(),
            number_rank: 2,
        };
        assert_eq!(
            image_file_name(&id, clock("2026-02-06T10:15:30").0),
            "plot_2B_20260206_101530.png"
        );
    }

    #[test]
    fn generates_one_file_per_pair() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let run = generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(run.manifest.len(), 9);
        for (id, path) in run.manifest.iter() {
            let expected = cfg.output_dir.join(format!("plot_{id}_20260206_101530.png"));
            assert_eq!(path, manifest_path_value(&expected));
            assert!(Path::new(path).exists(), "missing {path}");
        }
        assert_eq!(fs::read_dir(&cfg.output_dir).unwrap().count(), 9);
    }

    #[test]
    fn relative_output_dir_gives_relative_manifest_paths() {
        let ids = plot_ids(&["1".to_string()], &["A".to_string()]).unwrap();
        let path = Path::new("images").join(image_file_name(&ids[0], clock("2026-02-06T10:15:30").0));
        assert_eq!(manifest_path_value(&path), "images/plot_1A_20260206_101530.png");
    }

    #[test]
    fn keeps_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        fs::create_dir_all(&cfg.output_dir).unwrap();
        let keep = cfg.output_dir.join("notes.txt");
        fs::write(&keep, "keep me").unwrap();

        generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(fs::read_to_string(&keep).unwrap(), "keep me");
        assert_eq!(fs::read_dir(&cfg.output_dir).unwrap().count(), 10);
    }

    #[test]
    fn second_run_adds_a_distinct_batch() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let mut rng = StdRng::seed_from_u64(1);
        let first = generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut rng).unwrap();
        let second = generate_plots(&cfg, &clock("2026-02-06T10:15:31"), &mut rng).unwrap();

        assert_eq!(fs::read_dir(&cfg.output_dir).unwrap().count(), 18);
        for (id, path) in second.manifest.iter() {
            assert_ne!(Some(path), first.manifest.get(id));
            assert!(path.ends_with("20260206_101531.png"));
        }
    }

    #[test]
    fn invalid_sets_fail_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path());
        cfg.letters.clear();
        let err = generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyIdentifierSet { name: "letters" }));
        assert!(!cfg.output_dir.exists());
    }

    #[test]
    fn output_dir_blocked_by_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        fs::write(&cfg.output_dir, "not a directory").unwrap();
        let err = generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, AppError::OutputDir { .. }));
    }

    /// All text chunks of a PNG, whichever encoding they were stored in
    fn png_text(path: &Path) -> Vec<(String, String)> {
        let decoder = png::Decoder::new(fs::File::open(path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        info.uncompressed_latin1_text
            .iter()
            .map(|c| (c.keyword.clone(), c.text.clone()))
            .chain(
                info.utf8_text
                    .iter()
                    .map(|c| (c.keyword.clone(), c.get_text().unwrap())),
            )
            .collect()
    }

    #[test]
    fn chart_carries_title_and_legend() {
        let ids = plot_ids(&["3".to_string()], &["C".to_string()]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        build_chart(&ids[0], clock("2026-02-06T10:15:30").0, &mut StdRng::seed_from_u64(1))
            .save(&path)
            .unwrap();

        let text = png_text(&path);
        assert!(text.contains(&(
            "Title".to_string(),
            "Plot 3C - Generated on 2026-02-06 10:15:30".to_string()
        )));
        assert!(text.contains(&("Legend".to_string(), "Data for 3C".to_string())));
    }

    #[test]
    fn non_latin1_letters_still_render() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path());
        cfg.numbers = vec!["1".into()];
        cfg.letters = vec!["\u{3b1}".into()];

        let run = generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut StdRng::seed_from_u64(1))
            .unwrap();

        let path = run.manifest.get("1\u{3b1}").unwrap();
        assert!(Path::new(path).is_file());
        let text = png_text(Path::new(path));
        assert!(text.contains(&(
            "Title".to_string(),
            "Plot 1\u{3b1} - Generated on 2026-02-06 10:15:30".to_string()
        )));
        assert!(text.contains(&("Legend".to_string(), "Data for 1\u{3b1}".to_string())));
    }

    #[cfg(unix)]
    #[test]
    fn backslash_in_output_dir_is_kept_on_unix() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path());
        cfg.numbers = vec!["1".into()];
        cfg.letters = vec!["A".into()];
        cfg.output_dir = dir.path().join("a\\b");

        let run = generate_plots(&cfg, &clock("2026-02-06T10:15:30"), &mut StdRng::seed_from_u64(1))
            .unwrap();

        let path = run.manifest.get("1A").unwrap();
        assert!(path.contains("a\\b/plot_1A_"), "{path}");
        assert!(Path::new(path).is_file(), "missing {path}");
    }
}
