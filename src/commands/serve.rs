use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use wasm_bundle::infrastructure::server;
use wasm_bundle::{BuildUseCase, PipelineKind, WasmPack, WatchUseCase};

use crate::cli::ProjectArgs;
use crate::ui::context::UiContext;
use crate::ui::views::build::{build_json, render_build_summary};
use crate::ui::views::serve::render_serve_header;

pub fn cmd_serve(project: &ProjectArgs, port: Option<u16>, ui: UiContext) -> Result<()> {
    let mut desc = super::resolve(PipelineKind::App, project, ui)?;
    if let Some(port) = port {
        desc = desc.with_server_port(port);
    }
    let options = desc
        .server()
        .cloned()
        .context("app pipeline has no dev server")?;

    // The server needs a bundle to serve; a failed first build is fatal.
    let build = BuildUseCase::new(WasmPack::from_env());
    let report = build.execute(&desc)?;
    if ui.json {
        println!("{}", build_json(&desc, &report));
    } else {
        print!(
            "{}",
            render_build_summary(&report, ui.verbose, ui.color, ui.unicode)
        );
        print!(
            "{}",
            render_serve_header(&options, desc.watch(), ui.color, ui.unicode)
        );
    }

    let running = super::install_stop_flag()?;

    let watcher = if desc.watch() {
        let running = running.clone();
        let watch = WatchUseCase::new(build, desc);
        Some(std::thread::spawn(move || {
            watch.watch(running, |event| super::print_watch_event(ui, &event))
        }))
    } else {
        None
    };

    let served = server::serve(&options, running.clone());

    // Stop the watcher whether the server shut down cleanly or failed to bind.
    running.store(false, Ordering::SeqCst);
    let watched = match watcher {
        Some(handle) => handle
            .join()
            .map_err(|_| anyhow::anyhow!("watch thread panicked"))?,
        None => Ok(()),
    };

    served?;
    watched?;
    Ok(())
}
