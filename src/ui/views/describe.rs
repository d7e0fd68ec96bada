use wasm_bundle::BuildDescription;

use crate::ui::blocks::banner::PipelineBanner;
use crate::ui::primitives::icon::Icon;

pub fn render_description(
    desc: &BuildDescription,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let target = desc.target();
    let compile = desc.compile();

    let mut banner = PipelineBanner::new(Icon::Describe, format!("Pipeline {}", desc.pipeline()))
        .mode(desc.mode())
        .switch("compression", desc.compression_enabled())
        .switch("watch", desc.watch())
        .field("entry", target.entry_path().display().to_string())
        .field("output", target.output_dir().display().to_string())
        .field("script", target.output_filename())
        .field("binary", target.binary_output_filename())
        .field(
            "compile",
            format!(
                "{} -> {} ({}, {})",
                compile.crate_dir().display(),
                compile.out_dir().display(),
                compile.target(),
                compile.profile().as_flag()
            ),
        );
    for rule in desc.copy_rules() {
        banner = banner.field(
            "copy",
            format!(
                "{} -> {}",
                rule.source_dir().display(),
                rule.dest_dir().display()
            ),
        );
    }
    if let Some(server) = desc.server() {
        banner = banner.field("server", format!("http://{}", server.addr()));
    }

    banner.render(supports_color, supports_unicode)
}
