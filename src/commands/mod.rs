pub mod build;
pub mod describe;
pub mod serve;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use wasm_bundle::config::{self, ConfigWarning};
use wasm_bundle::{BuildContext, BuildDescription, Config, Mode, PipelineKind, WatchEvent};

use crate::cli::ProjectArgs;
use crate::ui::context::UiContext;

/// Absolute project root: `--root` if given, else the current directory.
pub(crate) fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(match &args.root {
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

/// Load the explicit config file, or the project config when present.
pub(crate) fn load_config(args: &ProjectArgs, root: &std::path::Path) -> Result<(Config, Vec<ConfigWarning>)> {
    let loaded = match &args.config {
        Some(path) => {
            let (config, warnings) = config::load_with_warnings(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            (config::with_env_overrides(config), warnings)
        }
        None => config::load_or_default(root)?,
    };
    Ok(loaded)
}

/// Resolve the per-invocation context and describe one pipeline.
pub(crate) fn resolve(kind: PipelineKind, args: &ProjectArgs, ui: UiContext) -> Result<BuildDescription> {
    let root = project_root(args)?;
    let (config, warnings) = load_config(args, &root)?;
    for warning in &warnings {
        tracing::warn!(key = %warning.key, file = %warning.file.display(), "unknown config key");
        if !ui.json {
            eprint!(
                "{}",
                crate::ui::views::warnings::render_config_warning(warning, ui.color, ui.unicode)
            );
        }
    }

    let mode = Mode::from_flag(config::mode_flag(args.mode.as_deref()).as_deref());
    let ctx = BuildContext::new(mode, root);
    tracing::debug!(mode = %mode, root = %ctx.project_root().display(), pipeline = %kind, "resolving");

    Ok(wasm_bundle::describe(kind, &ctx, &config)?)
}

/// Flag cleared by Ctrl+C.
pub(crate) fn install_stop_flag() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    Ok(running)
}

/// Print one watch event, NDJSON in `--json` mode.
pub(crate) fn print_watch_event(ui: UiContext, event: &WatchEvent) {
    if ui.json {
        println!("{}", event.to_json());
        return;
    }

    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    let rendered =
        crate::ui::views::watch::render_watch_event(&timestamp, event, ui.color, ui.unicode);

    match event {
        WatchEvent::Error { .. } => eprint!("{rendered}"),
        _ => print!("{rendered}"),
    }
}
