use ratatui::style::{Color, Modifier, Style};

pub const BG_BASE: Color = Color::Rgb(28, 12, 14);
pub const BG_PANEL: Color = Color::Rgb(44, 20, 24);
pub const BG_HIGHLIGHT: Color = Color::Rgb(150, 36, 40);
pub const TEXT_MAIN: Color = Color::Rgb(244, 236, 236);
pub const TEXT_DIM: Color = Color::Rgb(190, 170, 172);
pub const ACCENT_RED: Color = Color::Rgb(239, 83, 80);
pub const ACCENT_GOLD: Color = Color::Rgb(250, 204, 21);
pub const ACCENT_GREEN: Color = Color::Rgb(76, 175, 80);
pub const ACCENT_ORANGE: Color = Color::Rgb(255, 152, 0);

/// Badge color per type, by feed name.
pub fn type_color(name: &str) -> Color {
    match name {
        "Normal" => Color::Rgb(158, 161, 159),
        "Feu" => Color::Rgb(229, 40, 41),
        "Eau" => Color::Rgb(40, 128, 238),
        "Plante" => Color::Rgb(63, 161, 41),
        "Électrik" => Color::Rgb(250, 191, 0),
        "Glace" => Color::Rgb(62, 216, 255),
        "Combat" => Color::Rgb(255, 128, 1),
        "Poison" => Color::Rgb(143, 64, 203),
        "Sol" => Color::Rgb(144, 81, 32),
        "Vol" => Color::Rgb(129, 184, 239),
        "Psy" => Color::Rgb(239, 65, 120),
        "Insecte" => Color::Rgb(145, 161, 25),
        "Roche" => Color::Rgb(175, 169, 128),
        "Spectre" => Color::Rgb(112, 65, 111),
        "Dragon" => Color::Rgb(79, 97, 225),
        "Ténèbres" => Color::Rgb(80, 65, 62),
        "Acier" => Color::Rgb(96, 160, 183),
        "Fée" => Color::Rgb(239, 113, 239),
        _ => Color::Rgb(119, 119, 119),
    }
}

pub fn stat_color(value: u16) -> Color {
    if value > 100 {
        ACCENT_GREEN
    } else if value > 70 {
        ACCENT_ORANGE
    } else {
        ACCENT_RED
    }
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD)
}

pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(ACCENT_GOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}
