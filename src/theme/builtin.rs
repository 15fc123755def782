//! The built-in theme table.

use super::{FillStyle, Outline, Overlay, ThemeDefinition, ThemeName};
use crate::color::Rgba;
use crate::paths::PathId;

const BLACK: FillStyle = FillStyle::Solid(Rgba::BLACK);
const WHITE: FillStyle = FillStyle::Solid(Rgba::WHITE);
const CLEAR: FillStyle = FillStyle::Solid(Rgba::TRANSPARENT);
const OFF_BLACK: FillStyle = FillStyle::Solid(Rgba::hex(0x131313));
const OFF_WHITE: FillStyle = FillStyle::Solid(Rgba::hex(0xF7F7F7));

const PRIDE: &[Rgba] = &[
    Rgba::hex(0xE50000),
    Rgba::hex(0xFF8D00),
    Rgba::hex(0xFFEE00),
    Rgba::hex(0x028121),
    Rgba::hex(0x004CFF),
    Rgba::hex(0x770088),
];

const TRANS: &[Rgba] = &[
    Rgba::hex(0x5BCFFB),
    Rgba::hex(0xF5ABB9),
    Rgba::hex(0xFFFFFF),
    Rgba::hex(0xF5ABB9),
    Rgba::hex(0x5BCFFB),
];

const ORIGINAL: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Solid(Rgba::hex(0xB40000)),
    base_overlay: None,
    glyph_primary: WHITE,
    glyph_primary_outline: None,
    glyph_secondary: BLACK,
    bar: BLACK,
    bar_path: None,
    text: WHITE,
    fill_mode_allowed: true,
};

const PLAYFULL: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Solid(Rgba::hex(0x00A0E3)),
    glyph_primary: FillStyle::Solid(Rgba::hex(0xFFB400)),
    glyph_secondary: FillStyle::Solid(Rgba::hex(0xFF78FF)),
    bar: OFF_BLACK,
    text: OFF_WHITE,
    ..ORIGINAL
};

const CLASSY: ThemeDefinition = ThemeDefinition {
    glyph_primary_outline: Some(Outline {
        width: 8.0,
        style: FillStyle::Gradient(PRIDE),
    }),
    bar: FillStyle::Gradient(&[Rgba::BLACK]),
    text: FillStyle::Gradient(PRIDE),
    ..ORIGINAL
};

const RAINBOW: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Gradient(PRIDE),
    ..ORIGINAL
};

const PHILADELPHIA: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Solid(Rgba::hex(0x794E0F)),
    glyph_primary: FillStyle::Gradient(PRIDE),
    ..ORIGINAL
};

const TRANSGENDER: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Gradient(TRANS),
    glyph_primary_outline: Some(Outline {
        width: 4.0,
        style: BLACK,
    }),
    ..ORIGINAL
};

const INTERSEX: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Solid(Rgba::hex(0xFFD800)),
    glyph_primary: FillStyle::Solid(Rgba::hex(0xFFD800)),
    glyph_primary_outline: Some(Outline {
        width: 4.0,
        style: FillStyle::Solid(Rgba::hex(0x7902AA)),
    }),
    glyph_secondary: FillStyle::Solid(Rgba::hex(0x7902AA)),
    bar: OFF_BLACK,
    text: OFF_WHITE,
    ..ORIGINAL
};

const OTHER: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Solid(Rgba::hex(0x6BD6F7)),
    base_overlay: Some(Overlay {
        path: PathId::DiagonalBase,
        style: FillStyle::Solid(Rgba::hex(0xF9B2DB)),
    }),
    glyph_secondary: FillStyle::Solid(Rgba::hex(0xED1C24)),
    ..ORIGINAL
};

const GR: ThemeDefinition = ThemeDefinition {
    base: CLEAR,
    glyph_primary_outline: Some(Outline {
        width: 8.0,
        style: BLACK,
    }),
    bar: CLEAR,
    text: CLEAR,
    ..ORIGINAL
};

const BLACK_WHITE: ThemeDefinition = ThemeDefinition {
    base: CLEAR,
    glyph_primary_outline: Some(Outline {
        width: 8.0,
        style: BLACK,
    }),
    bar_path: Some(PathId::PillBar),
    fill_mode_allowed: false,
    ..ORIGINAL
};

const TEST: ThemeDefinition = ThemeDefinition {
    base: FillStyle::Gradient(&[Rgba::hex(0x888888), Rgba::hex(0xAAAAAA)]),
    base_overlay: Some(Overlay {
        path: PathId::DiagonalBase,
        style: FillStyle::Gradient(&[Rgba::hex(0x888833), Rgba::hex(0xAAAA88)]),
    }),
    glyph_primary: FillStyle::Gradient(&[
        Rgba::new(0, 255, 0, 128),
        Rgba::new(128, 255, 128, 128),
        Rgba::new(255, 255, 255, 128),
    ]),
    glyph_primary_outline: Some(Outline {
        width: 4.0,
        style: FillStyle::Gradient(&[Rgba::hex(0xFF6666), Rgba::new(255, 0, 0, 128)]),
    }),
    glyph_secondary: FillStyle::Gradient(&[Rgba::hex(0xFF6666), Rgba::new(255, 0, 0, 128)]),
    bar: FillStyle::Gradient(&[Rgba::BLACK, Rgba::new(255, 255, 255, 204)]),
    bar_path: None,
    text: FillStyle::Gradient(PRIDE),
    fill_mode_allowed: true,
};

pub(super) fn definition(name: ThemeName) -> &'static ThemeDefinition {
    match name {
        ThemeName::Original => &ORIGINAL,
        ThemeName::Playfull => &PLAYFULL,
        ThemeName::Classy => &CLASSY,
        ThemeName::Rainbow => &RAINBOW,
        ThemeName::Philadelphia => &PHILADELPHIA,
        ThemeName::Transgender => &TRANSGENDER,
        ThemeName::Intersex => &INTERSEX,
        ThemeName::Other => &OTHER,
        ThemeName::Gr => &GR,
        ThemeName::BlackWhite => &BLACK_WHITE,
        ThemeName::Test => &TEST,
    }
}
