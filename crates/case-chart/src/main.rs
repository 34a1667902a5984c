// File: crates/case-chart/src/main.rs
// Summary: Plays the page's controls from the command line: startup render, then each requested
// chart in order; writes the page as HTML plus the active chart as SVG (and optionally PNG).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use case_chart_core::convert::{csv_to_json, to_pretty_json};
use case_chart_core::theme;
use case_chart_core::{ChartPage, FileSource, ParsePolicy, RenderOptions};
use case_chart_skia::{render_surface_to_file, RasterOptions};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const PAGE_TITLE: &str = "COVID-19 Daily New Cases";

#[derive(Parser, Debug)]
#[command(
    name = "case-chart",
    version,
    about = "Daily COVID-19 case charts for NY, NJ and PA",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    show: ShowArgs,

    /// Debug-level logging unless RUST_LOG says otherwise
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a CSV export into the JSON array the loader reads
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Requests run after the startup NY chart: NY, NJ, PA or combined
    requests: Vec<String>,

    /// Directory holding ny_data.json, nj_data.json and pa_data.json
    #[arg(long, env = "CASE_CHART_DATA_DIR", default_value = "data", value_hint = ValueHint::DirPath)]
    data_dir: PathBuf,

    /// Where index.html and the chart files are written
    #[arg(long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,

    /// Theme preset (classic, dark)
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Fail a render on the first malformed record instead of dropping it
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Also rasterize the active chart to PNG
    #[arg(long, action = ArgAction::SetTrue)]
    png: bool,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "case_chart=info,case_chart_core=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::Convert(args)) => handle_convert(&args),
        None => {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to start runtime")?;
            rt.block_on(handle_show(&cli.show))
        }
    }
}

async fn handle_show(args: &ShowArgs) -> Result<()> {
    let theme = theme::find(&args.theme);
    if !theme.name.eq_ignore_ascii_case(&args.theme) {
        warn!(requested = %args.theme, using = theme.name, "unknown theme");
    }
    let policy = if args.strict { ParsePolicy::Strict } else { ParsePolicy::Lenient };
    let options = RenderOptions { theme, policy, ..RenderOptions::default() };
    let page = ChartPage::new(FileSource::new(&args.data_dir), options);
    info!(data_dir = %args.data_dir.display(), requests = args.requests.len(), "starting");

    if let Err(err) = page.start().await {
        error!("startup chart failed: {:#}", anyhow::Error::from(err));
    }
    for request in &args.requests {
        let outcome = if request.eq_ignore_ascii_case("combined") {
            page.show_combined().await
        } else {
            page.show_chart(request).await
        };
        match outcome {
            Ok(Some(id)) => info!(request = %request, chart = %id, "request done"),
            Ok(None) => warn!(request = %request, "request ignored"),
            Err(err) => error!(request = %request, "request failed: {:#}", anyhow::Error::from(err)),
        }
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create '{}'", args.out_dir.display()))?;
    let doc = page.document();
    write_file(&args.out_dir.join("index.html"), &doc.to_html(PAGE_TITLE))?;

    let Some(active) = page.active() else {
        bail!("no chart was rendered");
    };
    let Some(surface) = doc.surface(&active.container_id()) else {
        bail!("active chart {active} has no surface");
    };
    write_file(&args.out_dir.join(format!("chart_{active}.svg")), &surface.to_standalone_svg())?;
    if args.png {
        let png = args.out_dir.join(format!("chart_{active}.png"));
        render_surface_to_file(surface, &RasterOptions::from_theme(&options.theme), &png)
            .with_context(|| format!("failed to rasterize '{}'", png.display()))?;
        info!(path = %png.display(), "wrote png");
    }
    info!(chart = %active, out_dir = %args.out_dir.display(), "done");
    Ok(())
}

fn handle_convert(args: &ConvertArgs) -> Result<()> {
    let input = fs::File::open(&args.input)
        .with_context(|| format!("failed to open CSV '{}'", args.input.display()))?;
    let value = csv_to_json(input).with_context(|| format!("failed to read CSV '{}'", args.input.display()))?;
    let rows = value.as_array().map_or(0, Vec::len);
    let text = to_pretty_json(&value).context("failed to serialize JSON")?;
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    write_file(&args.output, &text)?;
    info!(rows, output = %args.output.display(), "converted");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write '{}'", path.display()))
}
