use anyhow::Result;
use wasm_bundle::{BuildUseCase, PipelineKind, WasmPack, WatchUseCase};

use crate::cli::ProjectArgs;
use crate::ui::context::UiContext;
use crate::ui::views::build::{build_json, render_build_header, render_build_summary};

pub fn cmd_build(kind: PipelineKind, project: &ProjectArgs, no_watch: bool, ui: UiContext) -> Result<()> {
    let mut desc = super::resolve(kind, project, ui)?;
    if no_watch {
        desc = desc.without_watch();
    }

    if !ui.json {
        print!("{}", render_build_header(&desc, ui.color, ui.unicode));
    }

    let build = BuildUseCase::new(WasmPack::from_env());

    if desc.watch() {
        let running = super::install_stop_flag()?;
        WatchUseCase::new(build, desc).run(running, |event| super::print_watch_event(ui, &event))?;
        return Ok(());
    }

    let report = build.execute(&desc)?;
    if ui.json {
        println!("{}", build_json(&desc, &report));
    } else {
        print!(
            "{}",
            render_build_summary(&report, ui.verbose, ui.color, ui.unicode)
        );
    }

    Ok(())
}
