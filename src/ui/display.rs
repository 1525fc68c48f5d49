//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::protein::ProteinProfile;
use crate::ui::colors::{get_category_color, get_residue_color};

/// Format sequence with spaces every 3 characters (triplets)
pub fn format_triplets(sequence: &str) -> String {
    let mut result = String::new();
    let total = sequence.chars().count();

    for (count, c) in sequence.chars().enumerate() {
        result.push(c);
        if (count + 1) % 3 == 0 && count + 1 < total {
            result.push(' ');
        }
    }

    result
}

/// One span per residue, colored by residue class
pub fn create_protein_spans(protein: &str) -> Vec<Span<'static>> {
    protein
        .chars()
        .map(|residue| {
            Span::styled(residue.to_string(), Style::default().fg(get_residue_color(residue)))
        })
        .collect()
}

/// Label/value lines for a profile, verdict highlighted
pub fn create_profile_lines(profile: &ProteinProfile, ph: f64) -> Vec<Line<'static>> {
    let category_color = get_category_color(profile.verdict.category);

    profile
        .rows(ph)
        .into_iter()
        .map(|(label, value)| {
            let value_style = match label.as_str() {
                "Predicted Function" | "Confidence (%)" => Style::default().fg(category_color),
                "Prediction Notes" => Style::default().fg(Color::DarkGray),
                _ if value == "Unknown" => Style::default().fg(Color::DarkGray),
                _ => Style::default().fg(Color::White),
            };
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
                Span::styled(value, value_style),
            ])
        })
        .collect()
}
