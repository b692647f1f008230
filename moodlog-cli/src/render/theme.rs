use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Calming blue palette used across the CLI output.
pub struct Calm;

impl Calm {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Calm::PRIMARY);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Calm::PRIMARY_DARK);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.bullet.set_fg(Calm::PRIMARY);
        skin.table.set_fg(Calm::BORDER);
        skin.inline_code.set_fg(Calm::SECONDARY);
        skin.quote_mark.set_fg(Calm::ACCENT);

        skin
    }

    pub const PRIMARY: Color = Color::Rgb {
        r: 0x21,
        g: 0x96,
        b: 0xF3,
    }; // #2196F3
    pub const PRIMARY_DARK: Color = Color::Rgb {
        r: 0x19,
        g: 0x76,
        b: 0xD2,
    }; // #1976D2
    pub const SECONDARY: Color = Color::Rgb {
        r: 0x4C,
        g: 0xAF,
        b: 0x50,
    }; // #4CAF50
    pub const ACCENT: Color = Color::Rgb {
        r: 0xFF,
        g: 0x6B,
        b: 0x6B,
    }; // #FF6B6B
    pub const BORDER: Color = Color::Rgb {
        r: 0xB0,
        g: 0xBE,
        b: 0xC5,
    }; // #b0bec5
}
