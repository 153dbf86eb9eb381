use std::{fmt, ops::Index};

use serde::{Deserialize, Serialize};

use crate::FaceId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Orange,
    Green,
    Red,
    Yellow,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Yellow,
    ];

    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The color of every face of a solved cube.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColorSchemeRepr", into = "ColorSchemeRepr")]
pub struct ColorScheme([Color; 6]);

impl ColorScheme {
    #[must_use]
    pub fn new(colors: impl Fn(FaceId) -> Color) -> ColorScheme {
        ColorScheme(FaceId::ALL.map(colors))
    }

    #[must_use]
    pub fn face_of(&self, color: Color) -> Option<FaceId> {
        FaceId::ALL.into_iter().find(|&face| self[face] == color)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::new(|face| match face {
            FaceId::U => Color::White,
            FaceId::F => Color::Blue,
            FaceId::R => Color::Orange,
            FaceId::B => Color::Green,
            FaceId::L => Color::Red,
            FaceId::D => Color::Yellow,
        })
    }
}

impl Index<FaceId> for ColorScheme {
    type Output = Color;

    fn index(&self, index: FaceId) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl fmt::Debug for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&ColorSchemeRepr::from(*self), f)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[allow(non_snake_case)]
struct ColorSchemeRepr {
    U: Color,
    F: Color,
    R: Color,
    B: Color,
    L: Color,
    D: Color,
}

impl From<ColorSchemeRepr> for ColorScheme {
    fn from(value: ColorSchemeRepr) -> Self {
        ColorScheme::new(|face| match face {
            FaceId::U => value.U,
            FaceId::F => value.F,
            FaceId::R => value.R,
            FaceId::B => value.B,
            FaceId::L => value.L,
            FaceId::D => value.D,
        })
    }
}

impl From<ColorScheme> for ColorSchemeRepr {
    fn from(value: ColorScheme) -> Self {
        ColorSchemeRepr {
            U: value[FaceId::U],
            F: value[FaceId::F],
            R: value[FaceId::R],
            B: value[FaceId::B],
            L: value[FaceId::L],
            D: value[FaceId::D],
        }
    }
}
