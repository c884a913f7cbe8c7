use vitrine_theme::{ColorScheme, ColorToken, ThemeBundle, ThemeState, DARK_CLASS};

#[test]
fn double_toggle_restores_scheme_and_root_scope() {
    for start in [ColorScheme::Light, ColorScheme::Dark] {
        let mut theme = ThemeState::new(start);
        let root_before = theme.root().clone();

        theme.toggle();
        theme.toggle();

        assert_eq!(theme.scheme(), start);
        assert_eq!(theme.root(), &root_before, "start={start:?}");
    }
}

#[test]
fn double_toggle_settles_back_on_original_colors() {
    let mut theme = ThemeState::new(ColorScheme::Light);
    theme.toggle();
    theme.tick(100.0);
    theme.toggle();
    while theme.tick(16.0) {}

    let bundle = ThemeBundle::default();
    assert_eq!(theme.colors(), bundle.for_scheme(ColorScheme::Light).colors());
}

#[test]
fn light_and_dark_differ_where_the_page_changes() {
    let bundle = ThemeBundle::default();
    let light = bundle.for_scheme(ColorScheme::Light).colors();
    let dark = bundle.for_scheme(ColorScheme::Dark).colors();

    for token in [
        ColorToken::PageBackground,
        ColorToken::Panel,
        ColorToken::TextPrimary,
        ColorToken::Accent,
        ColorToken::ToggleIcon,
    ] {
        assert_ne!(light.get(token), dark.get(token), "{token:?}");
    }
    // The navigation buttons keep their brand blue in both schemes
    assert_eq!(light.get(ColorToken::NavButton), dark.get(ColorToken::NavButton));
}

#[test]
fn root_scope_serializes_as_class_list() {
    let mut theme = ThemeState::new(ColorScheme::Light);
    theme.toggle();
    let json = serde_json::to_string(theme.root()).unwrap();
    assert_eq!(json, format!("[\"{DARK_CLASS}\"]"));
}
