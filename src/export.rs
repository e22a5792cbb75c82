use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::layout::{Layout, TierSpec};
use crate::render;
use crate::tiers::{BANNER_FILENAME, LAUNCHER_FILENAME, ROUND_FILENAME};

/// Logo location relative to a project root
pub const PROJECT_LOGO: &str = "docs/logo.png";

/// Android resource directory relative to a project root
pub const PROJECT_RES_DIR: &str = "app/src/main/res";

/// Progress event emitted during an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    /// Source decoded, nothing written yet
    Loaded { source: PathBuf, width: u32, height: u32 },
    /// Both icon files of a tier were written
    TierWritten { folder: String, size: u32, index: usize, total: usize },
    /// Banner was written
    BannerWritten { path: PathBuf },
    /// Export completed successfully
    Done { files_written: usize },
}

/// Files produced by a successful export, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
}

/// Generate every icon tier and the banner from one logo.
///
/// Workflow:
/// 1. Fail with `MissingInput` if the logo does not exist (nothing is touched)
/// 2. Decode the logo once
/// 3. For each tier, create its folder and write the launcher and round icons
/// 4. Write the banner into the banner folder
///
/// Any decode or filesystem failure stops the export. Files already written
/// are left in place.
pub fn export<F>(
    source: &Path,
    res_dir: &Path,
    layout: &Layout,
    mut on_progress: F,
) -> Result<ExportSummary, ExportError>
where
    F: FnMut(ExportEvent),
{
    if !source.exists() {
        return Err(ExportError::MissingInput {
            path: source.to_path_buf(),
        });
    }

    let logo = image::open(source).map_err(|e| ExportError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;

    on_progress(ExportEvent::Loaded {
        source: source.to_path_buf(),
        width: logo.width(),
        height: logo.height(),
    });

    let mut summary = ExportSummary::default();
    let total = layout.tiers.len();

    for (i, tier) in layout.tiers.iter().enumerate() {
        let paths = export_tier(&logo, res_dir, tier)?;
        summary.written.extend(paths);

        on_progress(ExportEvent::TierWritten {
            folder: tier.folder.clone(),
            size: tier.size,
            index: i,
            total,
        });
    }

    let banner_path = export_banner(&logo, res_dir, layout)?;
    summary.written.push(banner_path.clone());
    on_progress(ExportEvent::BannerWritten { path: banner_path });

    on_progress(ExportEvent::Done {
        files_written: summary.written.len(),
    });

    Ok(summary)
}

/// Export using the conventional project layout under `project_root`.
pub fn export_project<F>(
    project_root: &Path,
    layout: &Layout,
    on_progress: F,
) -> Result<ExportSummary, ExportError>
where
    F: FnMut(ExportEvent),
{
    export(
        &project_root.join(PROJECT_LOGO),
        &project_root.join(PROJECT_RES_DIR),
        layout,
        on_progress,
    )
}

/// Render one tier and write it under both icon names.
fn export_tier(
    logo: &DynamicImage,
    res_dir: &Path,
    tier: &TierSpec,
) -> Result<Vec<PathBuf>, ExportError> {
    let dir = ensure_dir(&res_dir.join(&tier.folder))?;

    let launcher_path = dir.join(LAUNCHER_FILENAME);
    let icon = render::render_icon(logo, tier.size);
    let bytes = render::encode_png(&icon).map_err(|e| ExportError::Encode {
        path: launcher_path.clone(),
        reason: e.to_string(),
    })?;

    let round_path = dir.join(ROUND_FILENAME);
    write_file(&launcher_path, &bytes)?;
    write_file(&round_path, &bytes)?;

    Ok(vec![launcher_path, round_path])
}

fn export_banner(
    logo: &DynamicImage,
    res_dir: &Path,
    layout: &Layout,
) -> Result<PathBuf, ExportError> {
    let dir = ensure_dir(&res_dir.join(&layout.banner.folder))?;
    let path = dir.join(BANNER_FILENAME);

    let banner = render::render_banner(logo, layout.banner.width, layout.banner.height);
    let bytes = render::encode_png(&banner).map_err(|e| ExportError::Encode {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    write_file(&path, &bytes)?;

    Ok(path)
}

/// Create a directory and its parents if missing.
fn ensure_dir(dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(dir.to_path_buf())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::ALL_TIERS;
    use image::{GenericImageView, Rgba, RgbaImage};
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn write_logo(path: &Path, w: u32, h: u32) {
        RgbaImage::from_pixel(w, h, RED).save(path).unwrap();
    }

    fn count_files(dir: &Path) -> usize {
        if !dir.exists() {
            return 0;
        }
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let path = entry.unwrap().path();
                if path.is_dir() { count_files(&path) } else { 1 }
            })
            .sum()
    }

    #[test]
    fn export_writes_every_tier_and_banner() {
        let src_dir = tempdir().unwrap();
        let res_dir = tempdir().unwrap();
        let logo = src_dir.path().join("logo.png");
        write_logo(&logo, 512, 512);

        let summary = export(&logo, res_dir.path(), &Layout::default(), |_| {}).unwrap();

        assert_eq!(summary.written.len(), 11);
        for tier in ALL_TIERS {
            let dir = res_dir.path().join(tier.folder);
            let launcher = fs::read(dir.join(LAUNCHER_FILENAME)).unwrap();
            let round = fs::read(dir.join(ROUND_FILENAME)).unwrap();
            assert_eq!(launcher, round, "{} icons differ", tier.folder);

            let decoded = image::load_from_memory(&launcher).unwrap();
            assert_eq!(decoded.dimensions(), (tier.size, tier.size));
        }

        let banner = image::open(res_dir.path().join("mipmap-xhdpi").join(BANNER_FILENAME)).unwrap();
        assert_eq!(banner.dimensions(), (320, 180));
        assert_eq!(count_files(res_dir.path()), 11);
    }

    #[test]
    fn missing_source_writes_nothing() {
        let res_dir = tempdir().unwrap();
        let out = res_dir.path().join("res");
        let mut events = Vec::new();

        let result = export(
            Path::new("/nonexistent/logo.png"),
            &out,
            &Layout::default(),
            |e| events.push(e),
        );

        assert!(matches!(result, Err(ExportError::MissingInput { .. })));
        assert!(events.is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn corrupt_source_fails_before_writing() {
        let src_dir = tempdir().unwrap();
        let res_dir = tempdir().unwrap();
        let logo = src_dir.path().join("logo.png");
        fs::write(&logo, b"definitely not a png").unwrap();

        let result = export(&logo, res_dir.path(), &Layout::default(), |_| {});

        assert!(matches!(result, Err(ExportError::Decode { .. })));
        assert_eq!(count_files(res_dir.path()), 0);
    }

    #[test]
    fn blocked_directory_is_fatal() {
        let src_dir = tempdir().unwrap();
        let res_dir = tempdir().unwrap();
        let logo = src_dir.path().join("logo.png");
        write_logo(&logo, 64, 64);

        // A regular file where the first tier folder should go
        fs::write(res_dir.path().join("mipmap-mdpi"), b"in the way").unwrap();

        let result = export(&logo, res_dir.path(), &Layout::default(), |_| {});

        assert!(matches!(result, Err(ExportError::CreateDir { .. })));
        assert!(!res_dir.path().join("mipmap-hdpi").exists());
    }

    #[test]
    fn events_follow_export_order() {
        let src_dir = tempdir().unwrap();
        let res_dir = tempdir().unwrap();
        let logo = src_dir.path().join("logo.png");
        write_logo(&logo, 200, 100);
        let mut events = Vec::new();

        export(&logo, res_dir.path(), &Layout::default(), |e| events.push(e)).unwrap();

        assert_eq!(events.len(), 1 + 5 + 1 + 1);
        assert!(matches!(
            events[0],
            ExportEvent::Loaded { width: 200, height: 100, .. }
        ));
        assert!(matches!(
            &events[1],
            ExportEvent::TierWritten { folder, size: 48, index: 0, total: 5 } if folder == "mipmap-mdpi"
        ));
        assert!(matches!(events[6], ExportEvent::BannerWritten { .. }));
        assert_eq!(events[7], ExportEvent::Done { files_written: 11 });
    }

    #[test]
    fn rerun_is_byte_identical() {
        let src_dir = tempdir().unwrap();
        let res_dir = tempdir().unwrap();
        let logo = src_dir.path().join("logo.png");
        write_logo(&logo, 300, 120);

        let first = export(&logo, res_dir.path(), &Layout::default(), |_| {}).unwrap();
        let before: Vec<Vec<u8>> = first.written.iter().map(|p| fs::read(p).unwrap()).collect();

        let second = export(&logo, res_dir.path(), &Layout::default(), |_| {}).unwrap();
        let after: Vec<Vec<u8>> = second.written.iter().map(|p| fs::read(p).unwrap()).collect();

        assert_eq!(first, second);
        assert_eq!(before, after);
    }

    #[test]
    fn selected_tiers_still_write_banner() {
        let src_dir = tempdir().unwrap();
        let res_dir = tempdir().unwrap();
        let logo = src_dir.path().join("logo.png");
        write_logo(&logo, 64, 64);
        let layout = Layout::default().only(&["mdpi".to_string()]).unwrap();

        export(&logo, res_dir.path(), &layout, |_| {}).unwrap();

        assert!(res_dir.path().join("mipmap-mdpi").join(LAUNCHER_FILENAME).exists());
        assert!(!res_dir.path().join("mipmap-hdpi").exists());
        assert!(res_dir.path().join("mipmap-xhdpi").join(BANNER_FILENAME).exists());
        assert!(!res_dir.path().join("mipmap-xhdpi").join(LAUNCHER_FILENAME).exists());
    }

    #[test]
    fn project_layout_uses_conventional_paths() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("docs")).unwrap();
        write_logo(&root.path().join(PROJECT_LOGO), 96, 96);

        export_project(root.path(), &Layout::default(), |_| {}).unwrap();

        let res = root.path().join(PROJECT_RES_DIR);
        assert!(res.join("mipmap-xxxhdpi").join(ROUND_FILENAME).exists());
        assert!(res.join("mipmap-xhdpi").join(BANNER_FILENAME).exists());
    }

    #[test]
    fn project_without_logo_is_missing_input() {
        let root = tempdir().unwrap();
        let result = export_project(root.path(), &Layout::default(), |_| {});
        assert!(matches!(result, Err(ExportError::MissingInput { .. })));
    }
}
