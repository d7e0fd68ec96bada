use anyhow::Result;
use wasm_bundle::PipelineKind;

use crate::cli::ProjectArgs;
use crate::ui::context::UiContext;
use crate::ui::views::describe::render_description;

pub fn cmd_describe(kind: PipelineKind, project: &ProjectArgs, ui: UiContext) -> Result<()> {
    let desc = super::resolve(kind, project, ui)?;

    if ui.json {
        println!("{}", desc.to_json());
    } else {
        print!("{}", render_description(&desc, ui.color, ui.unicode));
    }

    Ok(())
}
