//! Style names from the config file → ratatui styles.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Fold a list of color and modifier names into one style.
///
/// Colors are parsed by ratatui (`red`, `lightblue`, `gray`, `#ff8800`, `42`).
/// Later colors replace earlier ones.
pub fn parse_style(names: &[String]) -> Result<Style, String> {
    names.iter().try_fold(Style::default(), |style, name| {
        let name = name.trim().to_lowercase();
        let modifier = match name.as_str() {
            "bold" => Some(Modifier::BOLD),
            "dim" => Some(Modifier::DIM),
            "italic" => Some(Modifier::ITALIC),
            "underline" => Some(Modifier::UNDERLINED),
            "inverse" => Some(Modifier::REVERSED),
            "strikethrough" => Some(Modifier::CROSSED_OUT),
            _ => None,
        };

        match modifier {
            Some(modifier) => Ok(style.add_modifier(modifier)),
            None => Color::from_str(&name)
                .map(|color| style.fg(color))
                .map_err(|_| format!("unknown color or modifier '{name}'")),
        }
    })
}
