use wasm_bundle::WatchEvent;

use crate::ui::primitives::icon::Icon;

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { pipeline, paths } => {
            let mut out = format!(
                "{} {} Watching {} inputs ({})\n",
                prefix,
                Icon::Watch.colored(supports_color, supports_unicode),
                pipeline,
                paths.len()
            );
            for path in paths {
                out.push_str(&format!("  {}\n", path));
            }
            out
        }
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::BuildStarted => format!(
            "{} {} Building...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::BuildComplete { files, elapsed_ms } => format!(
            "{} {} Built {} files in {}ms\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            files,
            elapsed_ms
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
