//! `panotour` command-line tool.
//!
//! Inspects a tour backend and walks a tour headlessly, logging every
//! viewer call. Logging goes through `env_logger`; set `RUST_LOG=debug` to
//! see individual marker and pose updates.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use panotour::api::{ApiClient, SceneSource, StaticSceneSource};
use panotour::navigation::NavigationController;
use panotour::options::TourOptions;
use panotour::scene::gallery;
use panotour::viewer::{HeadlessViewer, PanoramaViewer};
use panotour::TourError;
use web_time::{Duration, Instant};

/// Simulated display frame interval for headless walks.
const FRAME: Duration = Duration::from_millis(16);
/// Upper bound on simulated frames per intro.
const MAX_INTRO_FRAMES: u32 = 60 * 30;

/// Panotour command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "panotour", about = "Headless 360° campus tour client")]
struct CliArgs {
    /// TOML options file.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Serve scenes from a JSON fixture instead of the HTTP API.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scenes grouped by building.
    Scenes,
    /// Open the featured scene, play the intro, then visit each slug.
    Tour {
        /// Scene slugs to visit in order.
        slugs: Vec<String>,
        /// Skip the intro animation.
        #[arg(long)]
        no_intro: bool,
    },
    /// Write the options JSON schema.
    Schema {
        /// Output path.
        #[arg(long, default_value = "tour-options.schema.json")]
        out: PathBuf,
    },
}

fn load_options(args: &CliArgs) -> Result<TourOptions, TourError> {
    let mut options = match &args.options {
        Some(path) => TourOptions::load(path)?,
        None => TourOptions::default(),
    };
    if let Some(url) = &args.base_url {
        options.api.base_url.clone_from(url);
    }
    Ok(options)
}

fn list_scenes<S: SceneSource>(source: &S) -> Result<(), TourError> {
    let scenes = source.fetch_scene_list()?;
    log::info!("{} scenes", scenes.len());
    for group in gallery::group_by_building(&scenes) {
        log::info!("{}", group.building);
        for scene in group.scenes {
            let featured = if scene.is_featured { " (featured)" } else { "" };
            log::info!(
                "  {:<24} {:<10} {}{featured}",
                scene.slug,
                gallery::floor_label(scene.floor),
                scene.title
            );
        }
    }
    Ok(())
}

fn walk_tour<S: SceneSource>(
    source: S,
    options: TourOptions,
    slugs: &[String],
    with_intro: bool,
) -> Result<(), TourError> {
    let mut controller =
        NavigationController::new(source, HeadlessViewer::new(), options);
    controller.on_transition_complete(|scene| {
        log::info!("now at '{}': {}", scene.slug, scene.location_label());
    });
    controller.on_transition_error(|slug, message| {
        log::error!("could not open '{slug}': {message}");
    });

    if !controller.open_featured_scene(with_intro)? {
        log::warn!("featured scene request dropped");
    }

    let t0 = Instant::now();
    let mut frames = 0;
    while controller.is_intro_running() && frames < MAX_INTRO_FRAMES {
        controller.tick(t0 + FRAME * frames);
        frames += 1;
    }
    if controller.is_intro_running() {
        controller.skip_intro();
    }
    log::info!("intro done after {frames} frames");

    for slug in slugs {
        if !controller.load_scene(slug) && controller.last_error().is_none() {
            log::warn!("skipped '{slug}'");
        }
    }

    let viewer = controller.viewer();
    log::info!(
        "walk finished: {} panorama loads, {} markers on screen, auto-rotate {}",
        viewer.panorama_loads(),
        viewer.markers().len(),
        if viewer.is_auto_rotating() { "on" } else { "off" }
    );
    Ok(())
}

fn write_schema(out: &Path) -> Result<(), TourError> {
    let schema = serde_json::to_string_pretty(&TourOptions::json_schema())?;
    std::fs::write(out, schema)?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn run(args: &CliArgs) -> Result<(), TourError> {
    let options = load_options(args)?;
    let fixture = args
        .fixture
        .as_deref()
        .map(StaticSceneSource::from_json_file)
        .transpose()?;

    match (&args.command, fixture) {
        (Command::Schema { out }, _) => write_schema(out),
        (Command::Scenes, Some(source)) => list_scenes(&source),
        (Command::Scenes, None) => list_scenes(&ApiClient::new(&options.api)),
        (Command::Tour { slugs, no_intro }, Some(source)) => {
            let with_intro = options.intro.enabled && !no_intro;
            walk_tour(source, options, slugs, with_intro)
        }
        (Command::Tour { slugs, no_intro }, None) => {
            let with_intro = options.intro.enabled && !no_intro;
            let client = ApiClient::new(&options.api);
            walk_tour(client, options, slugs, with_intro)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
