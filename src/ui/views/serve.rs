use wasm_bundle::domain::value_objects::ServerOptions;

use crate::ui::blocks::banner::PipelineBanner;
use crate::ui::primitives::icon::Icon;

pub fn render_serve_header(
    options: &ServerOptions,
    watching: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = PipelineBanner::new(Icon::Serve, "Dev server")
        .switch("compression", options.compression_enabled())
        .switch("watch", watching)
        .field("address", format!("http://{}", options.addr()))
        .field("root", options.root_dir().display().to_string())
        .render(supports_color, supports_unicode);
    out.push_str("Press Ctrl+C to stop\n");
    out
}
