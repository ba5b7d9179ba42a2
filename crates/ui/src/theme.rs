use clockface_protocol::ThemeToken;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
}

fn resolve_dark(token: ThemeToken) -> Color32 {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        Background => Color32::from_rgb(0x11, 0x11, 0x1b), // Crust
        FaceFill => Color32::from_rgb(0x1e, 0x1e, 0x2e),   // Base
        Bezel => Color32::from_rgb(0xcd, 0xd6, 0xf4),      // Text
        Hand => Color32::from_rgb(0xcd, 0xd6, 0xf4),
        Tick => Color32::from_rgb(0xba, 0xc2, 0xde), // Subtext1
        Label => Color32::from_rgb(0xf3, 0x8b, 0xa8), // Red
    }
}

fn resolve_light(token: ThemeToken) -> Color32 {
    use ThemeToken::*;
    match token {
        Background => Color32::from_rgb(255, 255, 255),
        FaceFill => Color32::from_rgb(245, 245, 248),
        Bezel => Color32::from_rgb(0, 0, 0),
        Hand => Color32::from_rgb(0, 0, 0),
        Tick => Color32::from_rgb(0, 0, 0),
        Label => Color32::from_rgb(255, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_face_is_black_on_white() {
        assert_eq!(resolve(ThemeToken::Hand, ThemeMode::Light), Color32::BLACK);
        assert_eq!(resolve(ThemeToken::Background, ThemeMode::Light), Color32::WHITE);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
