//! Auflösung von Farb-Eingaben aus dem Farb-Dialog.
//!
//! Drei Syntaxen: `$name` schlägt in der konfigurierten Palette nach,
//! `#rrggbb` parst hexadezimal (falls `hexCompatible`), alles andere
//! dezimal. Werte außerhalb von 24 Bit werden auf den Rand geklemmt.

use crate::app::prompt::Prompter;
use crate::core::Color;
use crate::shared::EditorOptions;

/// Fragt eine Farbe ab und löst die Eingabe auf.
///
/// Leere Eingabe und abgebrochener Dialog bedeuten beide Abbruch ohne
/// Fehlermeldung; nur tatsächlich ungültige Eingaben zeigen einen Fehler.
pub fn prompt_color(
    prompter: &dyn Prompter,
    options: &EditorOptions,
    title: &str,
    prompt: &str,
) -> Option<Color> {
    let input = prompter.ask_string(title, prompt)?;
    if input.is_empty() {
        return None;
    }
    resolve(prompter, options, &input)
}

/// Löst eine nicht-leere Farb-Eingabe in eine Farbe auf.
fn resolve(prompter: &dyn Prompter, options: &EditorOptions, input: &str) -> Option<Color> {
    if let Some(name) = input.strip_prefix('$') {
        let Some(&packed) = options.palette_colors.get(name) else {
            prompter.show_error("Invalid color", "The palette color entered does not exist.");
            return None;
        };
        return Some(Color::from_packed(Color::clamp_packed(packed as i64)));
    }

    if options.hex_compatible {
        if let Some(hex) = input.strip_prefix('#') {
            if let Ok(value) = i64::from_str_radix(hex, 16) {
                return Some(Color::from_packed(Color::clamp_packed(value)));
            }
            // Ungültiges Hex fällt auf die Dezimal-Auswertung durch
        }
    }

    match input.parse::<i64>() {
        Ok(value) => Some(Color::from_packed(Color::clamp_packed(value))),
        Err(_) => {
            prompter.show_error("Invalid color", "The color entered is invalid.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prompt::ScriptedPrompter;

    fn options_with_palette() -> EditorOptions {
        let mut options = EditorOptions::default();
        options.palette_colors.insert("sea".to_string(), 0x3366FF);
        options
    }

    fn ask(prompter: &ScriptedPrompter, options: &EditorOptions) -> Option<Color> {
        prompt_color(prompter, options, "Enter color", "Which color?")
    }

    #[test]
    fn test_decimal_input() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("65280");
        assert_eq!(
            ask(&prompter, &EditorOptions::default()),
            Some(Color::from_packed(0x00FF00))
        );
    }

    #[test]
    fn test_hex_input() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("#ff8000");
        assert_eq!(
            ask(&prompter, &EditorOptions::default()),
            Some(Color::from_packed(0xFF8000))
        );
    }

    #[test]
    fn test_hex_disabled_falls_back_to_decimal_error() {
        let mut options = EditorOptions::default();
        options.hex_compatible = false;
        let prompter = ScriptedPrompter::new();
        prompter.push_string("#ff8000");

        assert_eq!(ask(&prompter, &options), None);
        assert_eq!(prompter.shown_errors().len(), 1);
    }

    #[test]
    fn test_palette_lookup() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("$sea");
        assert_eq!(
            ask(&prompter, &options_with_palette()),
            Some(Color::from_packed(0x3366FF))
        );
    }

    #[test]
    fn test_missing_palette_color_reports_error() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("$lava");

        assert_eq!(ask(&prompter, &options_with_palette()), None);
        let errors = prompter.shown_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "Invalid color");
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("99999999");
        prompter.push_string("-12");

        let options = EditorOptions::default();
        assert_eq!(ask(&prompter, &options), Some(Color::from_packed(0xFFFFFF)));
        assert_eq!(ask(&prompter, &options), Some(Color::from_packed(0)));
    }

    #[test]
    fn test_blank_and_cancel_are_silent() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("");
        prompter.push_string_cancel();

        let options = EditorOptions::default();
        assert_eq!(ask(&prompter, &options), None);
        assert_eq!(ask(&prompter, &options), None);
        assert!(prompter.shown_errors().is_empty());
    }

    #[test]
    fn test_garbage_input_reports_error() {
        let prompter = ScriptedPrompter::new();
        prompter.push_string("blau");

        assert_eq!(ask(&prompter, &EditorOptions::default()), None);
        assert_eq!(prompter.shown_errors().len(), 1);
    }
}
