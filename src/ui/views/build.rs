use wasm_bundle::{BuildDescription, BuildReport};

use crate::ui::blocks::banner::PipelineBanner;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_header(
    desc: &BuildDescription,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    PipelineBanner::new(Icon::Build, format!("Build {}", desc.pipeline()))
        .mode(desc.mode())
        .switch("compression", desc.compression_enabled())
        .switch("watch", desc.watch())
        .field("entry", desc.target().entry_path().display().to_string())
        .field("output", desc.target().output_dir().display().to_string())
        .render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    report: &BuildReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {} {} files into {} in {:.2}s\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Built").bold().render(supports_color),
        report.files.len(),
        report.output_dir.display(),
        report.elapsed.as_secs_f64(),
    );
    if report.assets_copied > 0 {
        out.push_str(&format!("  {} static assets copied\n", report.assets_copied));
    }
    if verbose > 0 {
        for file in &report.files {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                file.display()
            ));
        }
    }
    out
}

pub fn build_json(desc: &BuildDescription, report: &BuildReport) -> String {
    let value = serde_json::json!({
        "event": "build_complete",
        "pipeline": desc.pipeline(),
        "mode": desc.mode(),
        "output_dir": report.output_dir,
        "files": report.files,
        "assets_copied": report.assets_copied,
        "elapsed_ms": report.elapsed.as_millis() as u64,
    });
    value.to_string()
}
