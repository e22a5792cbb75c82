use std::path::PathBuf;
use std::process;

use clap::Parser;
use launcher_icons::export::{PROJECT_LOGO, PROJECT_RES_DIR};
use launcher_icons::{ExportError, ExportEvent, ExportSummary, Layout};

#[derive(Parser)]
#[command(name = "launcher-icons")]
#[command(about = "Generate Android launcher icons and a TV banner from a single logo")]
#[command(version)]
struct Cli {
    /// Source logo image (PNG, JPEG, ...)
    #[arg(required_unless_present = "project", conflicts_with = "project")]
    logo: Option<PathBuf>,

    /// Android resource directory that receives the mipmap-* folders
    #[arg(required_unless_present = "project", conflicts_with = "project")]
    res_dir: Option<PathBuf>,

    /// Project root; reads docs/logo.png and writes into app/src/main/res
    #[arg(long, value_name = "ROOT")]
    project: Option<PathBuf>,

    /// JSON file overriding the tier table and banner box
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Only generate these tiers (comma-separated, e.g. mdpi,xxhdpi)
    /// The banner is always generated
    #[arg(long, value_delimiter = ',', value_name = "TIER")]
    only: Option<Vec<String>>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    match run(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<ExportSummary, ExportError> {
    let (logo, res_dir) = match (cli.project, cli.logo, cli.res_dir) {
        (Some(root), _, _) => (root.join(PROJECT_LOGO), root.join(PROJECT_RES_DIR)),
        (None, Some(logo), Some(res_dir)) => (logo, res_dir),
        _ => {
            eprintln!("Usage: launcher-icons <LOGO> <RES_DIR>");
            process::exit(1);
        }
    };

    let mut layout = match cli.layout {
        Some(ref path) => Layout::load(path)?,
        None => Layout::default(),
    };
    if let Some(ref names) = cli.only {
        layout = layout.only(names)?;
    }

    let quiet = cli.quiet;
    launcher_icons::export(&logo, &res_dir, &layout, |event| {
        if !quiet {
            print_event(&event);
        }
    })
}

fn print_event(event: &ExportEvent) {
    match event {
        ExportEvent::Loaded {
            source,
            width,
            height,
        } => {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.display().to_string());
            println!("Generating launcher icons from {} ({}x{})", name, width, height);
        }
        ExportEvent::TierWritten {
            folder,
            size,
            index,
            total,
        } => {
            println!("  [{}/{}] Generated {} ({}x{})", index + 1, total, folder, size, size);
        }
        ExportEvent::BannerWritten { path } => {
            println!("Generated banner: {}", path.display());
        }
        ExportEvent::Done { files_written } => {
            println!("Done! {} files written.", files_written);
        }
    }
}
