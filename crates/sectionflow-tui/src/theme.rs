use ratatui::style::Color;

/// Colors used by the presenter widgets
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey2: Color,

    // Content colors
    pub title: Color,
    pub subtitle: Color,
    pub item: Color,
    pub body: Color,

    // Indicator colors
    pub current: Color,
    pub visited: Color,
    pub unvisited: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            title: Color::Rgb(0xd8, 0xa6, 0x57),
            subtitle: Color::Rgb(0xd3, 0x86, 0x9b),
            item: Color::Rgb(0x89, 0xb4, 0x82),
            body: Color::Rgb(0xdd, 0xc7, 0xa1),
            current: Color::Rgb(0xd8, 0xa6, 0x57),
            visited: Color::Rgb(0xa9, 0xb6, 0x65),
            unvisited: Color::Rgb(0x7c, 0x6f, 0x64),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}
