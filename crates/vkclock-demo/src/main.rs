//! vkclock demo host.
//!
//! Runs the clock face against the real system clock with a one-second
//! interval scheduler and stands in for a renderer by logging (or dumping)
//! every frame's draw commands.

use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use vkclock_engine::logging::{LoggingConfig, init_logging};
use vkclock_ui::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "vkclock-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless analog clock host", long_about = None)]
struct Cli {
    /// View width in pixels
    #[arg(long, default_value_t = 300.0)]
    width: f32,

    /// View height in pixels
    #[arg(long, default_value_t = 300.0)]
    height: f32,

    /// Pixels per dp
    #[arg(short, long, default_value_t = 1.0)]
    density: f32,

    /// Style sheet with `name: value` entries
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Style override, e.g. `--attr secondHandColor=#1e88e5` (repeatable)
    #[arg(short, long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,

    /// Number of frames to render; 0 runs until interrupted
    #[arg(short, long, default_value_t = 0)]
    frames: u64,

    /// TrueType/OpenType font used to measure numerals
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print every draw command of each frame to stdout
    #[arg(long)]
    dump: bool,

    /// Log filter (env_logger syntax); falls back to RUST_LOG
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let style = load_style(&cli)?;
    let fonts = load_fonts(&cli)?;

    let (tx, rx) = mpsc::channel();
    let scheduler = IntervalScheduler::new(tx);

    let mut clock = ClockFace::new(SystemTimeSource::new(), scheduler)
        .with_style(style)
        .with_density(cli.density)
        .with_text_measure(fonts)
        .on_time_change(|t| log::debug!("readout {t}"));

    clock.on_resize(cli.width, cli.height);
    clock.attach().context("starting tick scheduler")?;

    log::info!(
        "vkclock running: {}x{} @ {}x density{}",
        cli.width,
        cli.height,
        cli.density,
        if cli.frames == 0 { String::new() } else { format!(", {} frames", cli.frames) },
    );

    let mut list = DrawList::with_capacity(PRIMITIVES_PER_FRAME);
    let mut rendered = 0u64;

    for trigger in rx.iter() {
        if clock.handle_trigger(trigger) != TickOutcome::Updated {
            continue;
        }
        clock.render_into(&mut list);
        report_frame(&clock, &list, cli.dump);

        rendered += 1;
        if cli.frames != 0 && rendered >= cli.frames {
            break;
        }
    }

    clock.detach();
    log::info!("rendered {rendered} frames");
    Ok(())
}

fn load_style(cli: &Cli) -> Result<StyleConfig> {
    let mut style = match &cli.style {
        Some(path) => {
            let src = std::fs::read_to_string(path)
                .with_context(|| format!("reading style sheet {}", path.display()))?;
            StyleConfig::from_sheet(&src)
                .with_context(|| format!("parsing style sheet {}", path.display()))?
        }
        None => StyleConfig::default(),
    };

    for attr in &cli.attrs {
        let Some((name, value)) = attr.split_once('=') else {
            bail!("style override {attr:?} must look like NAME=VALUE");
        };
        style
            .apply_attribute(name.trim(), value.trim())
            .with_context(|| format!("applying style override {attr:?}"))?;
    }
    Ok(style)
}

fn load_fonts(cli: &Cli) -> Result<FontSystem> {
    let mut fonts = FontSystem::new();
    if let Some(path) = &cli.font {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading font {}", path.display()))?;
        fonts
            .load_font(&bytes)
            .with_context(|| format!("loading font {}", path.display()))?;
    }
    Ok(fonts)
}

fn report_frame(clock: &ClockFace, list: &DrawList, dump: bool) {
    let angles = clock.hand_angles();
    let time = clock.time().unwrap_or(TimeOfDay::MIDNIGHT);
    log::info!(
        "{time}  hour {:6.2}°  minute {:6.2}°  second {:6.2}°  ({} primitives)",
        angles.hour,
        angles.minute,
        angles.second,
        list.len(),
    );

    if !dump {
        return;
    }
    println!("-- frame {time}");
    for cmd in list.iter() {
        match cmd {
            DrawCmd::Line(l) => println!(
                "line   ({:8.2},{:8.2}) -> ({:8.2},{:8.2})  w={:.1} #{:08X}",
                l.start.x, l.start.y, l.end.x, l.end.y, l.stroke.width, l.stroke.color.to_argb()
            ),
            DrawCmd::Circle(c) => println!(
                "circle ({:8.2},{:8.2}) r={:.2}  w={:.1} #{:08X}",
                c.center.x, c.center.y, c.radius, c.stroke.width, c.stroke.color.to_argb()
            ),
            DrawCmd::Text(t) => println!(
                "text   ({:8.2},{:8.2}) {:?}  size={:.1} #{:08X}",
                t.position.x, t.position.y, t.content, t.style.size, t.style.color.to_argb()
            ),
            DrawCmd::Dot(d) => println!(
                "dot    ({:8.2},{:8.2})  w={:.1} #{:08X}",
                d.position.x, d.position.y, d.stroke.width, d.stroke.color.to_argb()
            ),
        }
    }
}
