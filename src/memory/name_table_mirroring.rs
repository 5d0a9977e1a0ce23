use std::fmt;

use strum_macros::IntoStaticStr;

#[derive(PartialEq, Eq, Clone, Copy, Debug, IntoStaticStr)]
pub enum NameTableMirroring {
    Vertical,
    Horizontal,
    // Every quadrant shows the first CIRAM page.
    OneScreenLow,
    // Every quadrant shows the second CIRAM page.
    OneScreenHigh,
}

impl NameTableMirroring {
    // Which CIRAM page (0 or 1) backs each quadrant: TopLeft, TopRight, BottomLeft, BottomRight.
    pub fn ciram_pages(self) -> [u8; 4] {
        use NameTableMirroring::*;
        match self {
            Vertical => [0, 1, 0, 1],
            Horizontal => [0, 0, 1, 1],
            OneScreenLow => [0, 0, 0, 0],
            OneScreenHigh => [1, 1, 1, 1],
        }
    }

    pub fn is_vertical(self) -> bool {
        self == NameTableMirroring::Vertical
    }

    pub fn is_horizontal(self) -> bool {
        self == NameTableMirroring::Horizontal
    }

    pub fn is_one_screen(self) -> bool {
        matches!(self, NameTableMirroring::OneScreenLow | NameTableMirroring::OneScreenHigh)
    }
}

impl fmt::Display for NameTableMirroring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: &'static str = self.into();
        write!(f, "{text}")
    }
}
