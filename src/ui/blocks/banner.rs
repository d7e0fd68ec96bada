use wasm_bundle::Mode;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Opening lines of a pipeline command.
///
/// The first line carries the title, the mode tag and the `+on`/`-off`
/// switches; the fields follow indented, with their names right-aligned.
///
/// ```text
/// [BUILD] Build app [production] +compression -watch
///      entry  ffxii_tza_rng.js
///     output  dist
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBanner {
    icon: Icon,
    title: String,
    mode: Option<Mode>,
    switches: Vec<(&'static str, bool)>,
    fields: Vec<(&'static str, String)>,
}

impl PipelineBanner {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            mode: None,
            switches: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn switch(mut self, name: &'static str, enabled: bool) -> Self {
        self.switches.push((name, enabled));
        self
    }

    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut line = format!(
            "{} {}",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str()).bold().render(supports_color)
        );
        if let Some(mode) = self.mode {
            let tag = format!("[{}]", mode.as_str());
            let tag = match mode {
                Mode::Production => ColoredText::warning(tag),
                Mode::Development => ColoredText::dim(tag),
            };
            line.push(' ');
            line.push_str(&tag.render(supports_color));
        }
        for &(name, enabled) in &self.switches {
            let switch = if enabled {
                ColoredText::success(format!("+{name}"))
            } else {
                ColoredText::dim(format!("-{name}"))
            };
            line.push(' ');
            line.push_str(&switch.render(supports_color));
        }

        let mut out = line;
        out.push('\n');
        let width = self.fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, value) in &self.fields {
            let name = ColoredText::dim(format!("{name:>width$}")).render(supports_color);
            out.push_str(&format!("    {name}  {value}\n"));
        }
        out
    }
}
