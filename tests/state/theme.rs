use statedeck::constants::{THEME_BUTTON_DARK, THEME_BUTTON_LIGHT};
use statedeck::state::Theme;

#[test]
fn test_theme_starts_light() {
    let theme = Theme::default();
    assert_eq!(theme, Theme::Light);
    assert_eq!(theme.button(), THEME_BUTTON_LIGHT);
}

#[test]
fn test_explicit_transitions() {
    let mut theme = Theme::Light;
    theme.to_dark();
    assert_eq!(theme, Theme::Dark);
    assert_eq!(theme.button(), THEME_BUTTON_DARK);

    // Switching to the current theme is harmless
    theme.to_dark();
    assert_eq!(theme, Theme::Dark);

    theme.to_light();
    assert_eq!(theme, Theme::Light);
}

#[test]
fn test_toggle_flips_back_and_forth() {
    let mut theme = Theme::Light;
    theme.toggle();
    assert_eq!(theme, Theme::Dark);
    theme.toggle();
    assert_eq!(theme, Theme::Light);
}

#[test]
fn test_theme_display_and_serde_names() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(theme, Theme::Dark);
}
