//! Color definitions for residues, verdicts and UI elements

use ratatui::style::Color;

use crate::protein::{hydrophobicity_value, FunctionCategory};

/// Get the display color for a residue, graded by hydropathy
pub fn get_residue_color(residue: char) -> Color {
    match residue {
        '*' => Color::Red,
        'K' | 'R' | 'H' => Color::Blue,
        'D' | 'E' => Color::Magenta,
        _ => match hydrophobicity_value(residue) {
            Some(value) if value >= 2.0 => Color::Yellow,
            Some(value) if value >= 0.0 => Color::LightYellow,
            Some(_) => Color::Cyan,
            None => Color::DarkGray,
        },
    }
}

pub fn get_category_color(category: FunctionCategory) -> Color {
    match category {
        FunctionCategory::Enzyme => Color::Green,
        FunctionCategory::Signaling => Color::Cyan,
        FunctionCategory::Membrane => Color::Yellow,
        FunctionCategory::Structural => Color::Magenta,
        FunctionCategory::Unknown => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_colors() {
        assert_eq!(get_residue_color('I'), Color::Yellow);
        assert_eq!(get_residue_color('M'), Color::LightYellow);
        assert_eq!(get_residue_color('K'), Color::Blue);
        assert_eq!(get_residue_color('S'), Color::Cyan);
        assert_eq!(get_residue_color('?'), Color::DarkGray);
        assert_eq!(get_residue_color('*'), Color::Red);
    }
}
