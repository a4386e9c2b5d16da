// src/plotting/themes/mod.rs
//
// Color themes for the coverage plot

use plotters::style::RGBColor;

/// Color theme definition for plots
pub struct ColorTheme {
    pub name: &'static str,
    /// Coverage line color
    pub primary: RGBColor,
    /// Duplication region band
    pub region: RGBColor,
    /// Tail band, drawn over the region band
    pub tail: RGBColor,
    /// Background color
    pub base: RGBColor,
    /// Grid lines and legend border
    pub overlay: RGBColor,
    /// Text color
    pub text: RGBColor,
}

// Matplotlib-like defaults: blue line on white with orange bands
pub const CLASSIC: ColorTheme = ColorTheme {
    name: "classic",
    primary: RGBColor(0, 0, 255),
    region: RGBColor(255, 224, 178), // #ffe0b2
    tail: RGBColor(255, 171, 145),   // #ffab91
    base: RGBColor(255, 255, 255),
    overlay: RGBColor(176, 176, 176),
    text: RGBColor(0, 0, 0),
};

// Catppuccin Latte (light theme)
pub const CATPPUCCIN_LATTE: ColorTheme = ColorTheme {
    name: "latte",
    primary: RGBColor(30, 102, 245), // Blue
    region: RGBColor(223, 142, 29),  // Yellow
    tail: RGBColor(254, 100, 11),    // Peach
    base: RGBColor(239, 241, 245),   // Base
    overlay: RGBColor(204, 208, 218), // Surface0
    text: RGBColor(76, 79, 105),     // Text
};

// Catppuccin Frappe (dark theme)
pub const CATPPUCCIN_FRAPPE: ColorTheme = ColorTheme {
    name: "frappe",
    primary: RGBColor(140, 170, 238), // Blue
    region: RGBColor(229, 200, 144),  // Yellow
    tail: RGBColor(239, 159, 118),    // Peach
    base: RGBColor(48, 52, 70),       // Base
    overlay: RGBColor(81, 87, 109),   // Surface1
    text: RGBColor(198, 208, 245),    // Text
};

// Nord Theme
pub const NORD: ColorTheme = ColorTheme {
    name: "nord",
    primary: RGBColor(94, 129, 172), // Nord10 (blue)
    region: RGBColor(235, 203, 139), // Nord13 (yellow)
    tail: RGBColor(208, 135, 112),   // Nord12 (orange)
    base: RGBColor(236, 239, 244),   // Nord6
    overlay: RGBColor(216, 222, 233), // Nord4
    text: RGBColor(46, 52, 64),      // Nord0
};

// Gruvbox Light
pub const GRUVBOX_LIGHT: ColorTheme = ColorTheme {
    name: "gruvbox",
    primary: RGBColor(69, 133, 136),  // Aqua
    region: RGBColor(250, 189, 47),   // Yellow
    tail: RGBColor(254, 128, 25),     // Orange
    base: RGBColor(251, 241, 199),    // Background
    overlay: RGBColor(213, 196, 161), // bg2
    text: RGBColor(60, 56, 54),       // Foreground
};

pub const THEMES: [&ColorTheme; 5] = [
    &CLASSIC,
    &CATPPUCCIN_LATTE,
    &CATPPUCCIN_FRAPPE,
    &NORD,
    &GRUVBOX_LIGHT,
];

/// Look up a theme by name, case-insensitively
pub fn theme_by_name(name: &str) -> Option<&'static ColorTheme> {
    THEMES
        .iter()
        .copied()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
