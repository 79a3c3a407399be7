use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use gallery_assets::SceneDescription;
use gallery_input::{InputEvent, Key};
use gallery_kernel::{DisclosureChange, DisclosurePolicy, FrameClock, FrameEvent, Gallery};
use gallery_render::{DebugTextRenderer, InfoPanel, LinkLog, RenderView, Renderer, TopDownMap};
use gallery_tools::GalleryInspector;
use glam::{Vec2, Vec3};
use tracing_subscriber::EnvFilter;

/// Eye height used when the CLI places the viewer.
const EYE_HEIGHT: f32 = 3.0;

#[derive(Parser)]
#[command(name = "gallery-cli", about = "Headless driver for the gallery walkthrough")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scene catalog (.json, .yaml or .yml); the built-in gallery if omitted
    #[arg(short, long, global = true)]
    scene: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Load and validate a scene catalog
    Validate {
        /// Write the validated catalog to this path (.json, .yaml or .yml)
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Hold keys for a while and report what happens frame by frame
    Walk {
        /// Keys held for the whole walk: w,a,s,d or ArrowUp,ArrowLeft,...
        #[arg(short, long, value_delimiter = ',', default_value = "w")]
        keys: Vec<String>,
        /// Simulated duration
        #[arg(long, default_value = "3.0")]
        seconds: f32,
        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
        /// Horizontal look delta in pixels, applied before the first frame
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        turn: f32,
        /// Disclosure policy: last or nearest
        #[arg(long)]
        policy: Option<DisclosurePolicy>,
        /// Pace frames against the wall clock instead of a fixed delta
        #[arg(long)]
        realtime: bool,
        /// Print every frame event as a JSON line
        #[arg(long)]
        json: bool,
        /// Print a top-down map of the final position
        #[arg(long)]
        map: bool,
    },
    /// Click a pixel and report the picked exhibit
    Pick {
        #[arg(long)]
        x: f32,
        #[arg(long)]
        y: f32,
        #[arg(long, default_value = "1280")]
        width: f32,
        #[arg(long, default_value = "720")]
        height: f32,
        /// Viewer position as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        at: Option<Vec3>,
        /// Viewer heading in degrees (-90 looks along -Z)
        #[arg(long, allow_hyphen_values = true)]
        yaw: Option<f32>,
    },
    /// Visit every exhibit: stand in front of it, read the panel, click it
    Tour {
        /// Distance from each exhibit's surface
        #[arg(long, default_value = "4.0")]
        distance: f32,
        #[arg(long)]
        policy: Option<DisclosurePolicy>,
    },
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got {} values", parts.len())),
    }
}

fn load_description(path: Option<&Path>) -> anyhow::Result<SceneDescription> {
    match path {
        Some(path) => SceneDescription::load(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(gallery_assets::builtin::default_gallery()),
    }
}

fn load_gallery(path: Option<&Path>, policy: Option<DisclosurePolicy>) -> anyhow::Result<Gallery> {
    let description = load_description(path)?;
    let (scene, viewpoint, mut config) = description.build().context("building scene")?;
    if let Some(policy) = policy {
        config.disclosure_policy = policy;
    }
    Ok(Gallery::new(scene, viewpoint, config))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let scene = cli.scene.as_deref();
    match cli.command {
        Commands::Info => {
            println!("gallery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", gallery_input::crate_info());
            println!("assets: {}", gallery_assets::crate_info());
            println!("render: {}", gallery_render::crate_info());
            println!("tools: {}", gallery_tools::crate_info());
        }
        Commands::Validate { export } => validate(scene, export.as_deref())?,
        Commands::Walk {
            keys,
            seconds,
            fps,
            turn,
            policy,
            realtime,
            json,
            map,
        } => {
            let mut gallery = load_gallery(scene, policy)?;
            let options = WalkOptions {
                keys,
                seconds,
                fps,
                turn,
                realtime,
                json,
            };
            walk(&mut gallery, &options)?;
            if map {
                let view = RenderView::from_viewpoint(gallery.viewpoint());
                print!("{}", TopDownMap::default().render(&gallery, &view));
            }
        }
        Commands::Pick {
            x,
            y,
            width,
            height,
            at,
            yaw,
        } => {
            let mut gallery = load_gallery(scene, None)?;
            if at.is_some() || yaw.is_some() {
                let position = at.unwrap_or(gallery.viewpoint().position);
                let yaw = yaw.map_or(gallery.viewpoint().yaw, f32::to_radians);
                gallery.place(position, yaw);
            }
            pick(&mut gallery, Vec2::new(x, y), Vec2::new(width, height))?;
        }
        Commands::Tour { distance, policy } => {
            let mut gallery = load_gallery(scene, policy)?;
            tour(&mut gallery, distance)?;
        }
    }

    Ok(())
}

fn validate(scene: Option<&Path>, export: Option<&Path>) -> anyhow::Result<()> {
    let description = load_description(scene)?;
    let (built, viewpoint, config) = description.build().context("building scene")?;
    let name = if description.name.is_empty() { "(unnamed)" } else { description.name.as_str() };
    println!("Scene: {name}");
    println!("Walls: {}", built.obstacles().len());
    for o in built.obstacles() {
        println!("  {:<12} min={} max={}", o.name, o.aabb.min, o.aabb.max);
    }
    println!("Exhibits: {}", built.exhibits().len());
    println!(
        "Start: ({:.2}, {:.2}, {:.2}) yaw={:.1}",
        viewpoint.position.x,
        viewpoint.position.y,
        viewpoint.position.z,
        viewpoint.yaw.to_degrees()
    );
    println!(
        "Config: speed={} radius={} half_extent={} policy={:?} normalize_diagonal={}",
        config.move_speed,
        config.disclosure_radius,
        config.player_half_extent,
        config.disclosure_policy,
        config.normalize_diagonal
    );

    let overlaps = GalleryInspector::disclosure_overlaps(&built, config.disclosure_radius);
    if overlaps.is_empty() {
        println!("Disclosure overlaps: none");
    } else {
        println!(
            "Disclosure overlaps: {} (policy {:?} decides inside them)",
            overlaps.len(),
            config.disclosure_policy
        );
        for (a, b) in overlaps {
            println!("  {a} <-> {b}");
        }
    }

    if let Some(path) = export {
        description
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Exported to {}", path.display());
    }
    println!("OK");
    Ok(())
}

struct WalkOptions {
    keys: Vec<String>,
    seconds: f32,
    fps: u32,
    turn: f32,
    realtime: bool,
    json: bool,
}

fn walk(gallery: &mut Gallery, options: &WalkOptions) -> anyhow::Result<()> {
    if options.fps == 0 {
        bail!("--fps must be positive");
    }
    if !options.seconds.is_finite() || options.seconds < 0.0 {
        bail!("--seconds must be a non-negative number");
    }

    let mut panel = InfoPanel::new();
    let mut links = LinkLog::new();
    for key in &options.keys {
        if Key::parse(key).is_none() {
            bail!("unknown key '{key}' (expected w, a, s, d or an arrow key)");
        }
        gallery.handle_event(&InputEvent::key_down(key.as_str()), &mut links);
    }
    if options.turn != 0.0 {
        gallery.handle_event(
            &InputEvent::Look {
                dx: options.turn,
                dy: 0.0,
            },
            &mut links,
        );
    }

    let dt = 1.0 / options.fps as f32;
    let frames = (options.seconds * options.fps as f32).round() as u64;
    let mut clock = FrameClock::new();
    clock.tick();
    let mut blocked_frames = 0u64;

    for _ in 0..frames {
        let delta = if options.realtime {
            std::thread::sleep(Duration::from_secs_f32(dt));
            clock.tick()
        } else {
            dt
        };
        let report = gallery.step(delta, &mut panel);
        if report.outcome.is_blocked() {
            blocked_frames += 1;
        }
        match report.change {
            DisclosureChange::Shown(id) => {
                let title = panel.record().map_or("", |r| r.title.as_str());
                println!("[tick {:>5}] showing {id} \"{title}\"", report.tick);
            }
            DisclosureChange::Hidden => println!("[tick {:>5}] panel hidden", report.tick),
            DisclosureChange::Unchanged => {}
        }
        for event in gallery.drain_events() {
            if options.json {
                println!("{}", serde_json::to_string(&event)?);
            } else if let FrameEvent::Blocked { at, .. } = event {
                tracing::debug!(%at, "walk blocked");
            }
        }
    }

    println!("{}", GalleryInspector::summary(gallery));
    println!("Blocked frames: {blocked_frames}/{frames}");
    if panel.is_visible() {
        print!("{}", panel.text());
    }
    Ok(())
}

fn pick(gallery: &mut Gallery, click: Vec2, viewport: Vec2) -> anyhow::Result<()> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        bail!("viewport must be positive, got {}x{}", viewport.x, viewport.y);
    }
    let mut links = LinkLog::new();
    match gallery.click(click, viewport, &mut links) {
        Some(id) => {
            if let Some(info) = GalleryInspector::inspect_exhibit(gallery, id) {
                println!("{info}");
            }
            if let Some(link) = links.last() {
                println!("Opened: {link}");
            }
        }
        None => println!("No exhibit under ({}, {})", click.x, click.y),
    }
    Ok(())
}

fn tour(gallery: &mut Gallery, distance: f32) -> anyhow::Result<()> {
    if !distance.is_finite() || distance <= 0.0 {
        bail!("--distance must be positive");
    }
    let stops: Vec<(Vec3, f32)> = gallery
        .scene()
        .exhibits()
        .iter()
        .map(|e| {
            let normal = e.normal();
            let mut position = e.position() + normal * distance;
            position.y = EYE_HEIGHT;
            // Face back along the exhibit normal.
            let yaw = (-normal.z).atan2(-normal.x);
            (position, yaw)
        })
        .collect();

    let viewport = Vec2::new(1280.0, 720.0);
    gallery.set_viewport(viewport.x, viewport.y);
    let mut panel = InfoPanel::new();
    let mut links = LinkLog::new();
    let renderer = DebugTextRenderer::new();
    let mut mismatches = 0;

    for (index, (position, yaw)) in stops.into_iter().enumerate() {
        gallery.place(position, yaw);
        gallery.step(0.0, &mut panel);
        let shown = panel.record().map_or("(nothing)", |r| r.title.as_str()).to_string();
        let picked = gallery.click(viewport * 0.5, viewport, &mut links);
        let picked_title = picked
            .and_then(|id| gallery.scene().exhibit(id))
            .map_or("(nothing)", |e| e.info.title.as_str());
        println!("stop {index:>2}: panel={shown:<16} click={picked_title}");
        if picked.map(|id| id.0 as usize) != Some(index) {
            mismatches += 1;
        }
        tracing::debug!("\n{}", renderer.render(gallery, &RenderView::from_viewpoint(gallery.viewpoint())));
    }

    println!("Links opened: {}", links.opened().len());
    if mismatches > 0 {
        println!("Clicks that missed their exhibit: {mismatches}");
    }
    Ok(())
}
