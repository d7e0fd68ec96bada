use wasm_bundle::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown config key '{}' in {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(warning.key.as_str()).render(supports_color),
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("  Did you mean '{}'?\n", suggestion));
    }
    out
}
