use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use heroreel::{
    Canvas, Fps, FrameIndex, FrameRange, HeroReel, ImageSlots, PresetKind, ReelJob, SweepOpts,
    Timeline,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heroreel", version, about = "Evaluate hero reel presets frame by frame")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the scene graph of one frame as JSON.
    Frame(FrameArgs),
    /// Write the derived frame parameters of one frame as JSON.
    Params(FrameArgs),
    /// Evaluate a frame range into JSON lines.
    Sweep(SweepArgs),
    /// Print the interval table of a preset.
    Timeline(TimelineArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Job JSON (preset, canvas, fps, images).
    #[arg(long, conflicts_with_all = ["width", "height", "fps", "images"])]
    config: Option<PathBuf>,

    /// Preset; overrides the job file when both are given.
    #[arg(long)]
    preset: Option<PresetKind>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Hero image handle, in slot order; `-` leaves a slot empty.
    #[arg(long = "image", value_name = "HANDLE")]
    images: Vec<String>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    job: JobArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); defaults to the timeline duration.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long, env = "HEROREEL_THREADS")]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Output JSON lines path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TimelineArgs {
    /// Preset to describe.
    #[arg(long, default_value_t = PresetKind::HeroReel)]
    preset: PresetKind,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Params(args) => cmd_params(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HEROREEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl JobArgs {
    fn load(&self) -> anyhow::Result<ReelJob> {
        let mut job = match &self.config {
            Some(path) => ReelJob::from_path(path)
                .with_context(|| format!("load job '{}'", path.display()))?,
            None => ReelJob {
                preset: PresetKind::default(),
                canvas: Canvas {
                    width: self.width,
                    height: self.height,
                },
                fps: Fps {
                    num: self.fps,
                    den: 1,
                },
                images: self
                    .images
                    .iter()
                    .map(|s| (s != "-").then(|| s.clone()))
                    .collect(),
            },
        };
        if let Some(preset) = self.preset {
            job.preset = preset;
        }
        job.validate().context("invalid job")?;
        Ok(job)
    }

    fn compile(&self) -> anyhow::Result<(HeroReel, ImageSlots)> {
        let job = self.load()?;
        let reel = HeroReel::new(job.preset, job.video_config()?)?;
        Ok((reel, job.image_slots()?))
    }
}

fn open_out(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

fn write_json<T: serde::Serialize>(
    value: &T,
    out: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let mut w = open_out(out)?;
    if pretty {
        serde_json::to_writer_pretty(&mut w, value)?;
    } else {
        serde_json::to_writer(&mut w, value)?;
    }
    writeln!(w)?;
    w.flush()?;
    if let Some(path) = out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (reel, images) = args.job.compile()?;
    let scene = reel.scene(FrameIndex(args.frame), &images);
    write_json(&scene, args.out.as_deref(), args.pretty)
}

fn cmd_params(args: FrameArgs) -> anyhow::Result<()> {
    let (reel, _) = args.job.compile()?;
    let params = reel.params(FrameIndex(args.frame));
    write_json(&params, args.out.as_deref(), args.pretty)
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let (reel, images) = args.job.compile()?;
    let end = args.end.unwrap_or_else(|| reel.timeline().duration());
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let opts = SweepOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let mut w = open_out(Some(&args.out))?;
    let stats = heroreel::sweep_each(&reel, range, &images, &opts, |f| {
        serde_json::to_writer(&mut w, &f)
            .with_context(|| format!("serialize frame {}", f.frame.0))?;
        writeln!(w).context("write frame line")?;
        Ok(())
    })?;
    w.flush()?;

    eprintln!("{}", serde_json::to_string(&stats)?);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let timeline = Timeline::for_preset(args.preset);
    let mut out = std::io::stdout().lock();
    writeln!(out, "preset {} ({} frames)", args.preset, timeline.duration())?;
    for i in timeline.intervals() {
        writeln!(
            out,
            "{:<8} start {:>4}  end {:>4}  duration {:>4}",
            i.phase.name(),
            i.start,
            i.end(),
            i.duration
        )?;
    }
    Ok(())
}
