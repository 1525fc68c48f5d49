use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    App,
    sequence::{
        calculate_coding_fraction, calculate_gc_content, count_complete_incomplete_codons,
        count_start_codons, count_stop_codons,
    },
    ui::{create_profile_lines, create_protein_spans, format_triplets, get_category_color},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let main_horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(f.area());

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(main_horizontal_split[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(15),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(main_horizontal_split[1]);

    render_title(f, app, left_chunks[0]);
    render_protein_list(f, app, left_chunks[1]);
    render_sequence_analysis(f, app, left_chunks[2]);
    render_profile(f, app, right_chunks[0]);
    render_selected_sequences(f, app, right_chunks[1]);
    render_status_bar(f, app, right_chunks[2]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled("orfprofile", Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(app.source.clone(), Style::default().fg(Color::Green)),
        Span::raw("  pH "),
        Span::styled(format!("{:.1}", app.config.ph), Style::default().fg(Color::Yellow)),
    ];

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_protein_list(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "Proteins >= {} aa ({} of {} genes)",
        app.config.min_protein_length,
        app.profiles.len(),
        app.discovery.genes.len()
    );

    let lines: Vec<Line> = if app.profiles.is_empty() {
        vec![Line::from(vec![
            Span::styled("No proteins passed the length filter", Style::default().fg(Color::DarkGray)),
        ])]
    } else {
        app.profiles
            .iter()
            .enumerate()
            .map(|(i, profile)| {
                let selected = i == app.selected_protein_index;
                let marker = if selected { "> " } else { "  " };
                let base = if selected {
                    Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{marker}#{:<3} {:>5} aa  ", i + 1, profile.length()), base.fg(Color::White)),
                    Span::styled(
                        profile.verdict.category.to_string(),
                        base.fg(get_category_color(profile.verdict.category)),
                    ),
                ])
            })
            .collect()
    };

    // Keep the selection inside the visible rows.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible == 0 {
        0
    } else {
        app.selected_protein_index.saturating_sub(visible - 1)
    };

    let list_widget = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .scroll((offset as u16, 0));
    f.render_widget(list_widget, area);
}

fn render_sequence_analysis(f: &mut Frame, app: &App, area: Rect) {
    let (complete, incomplete) = count_complete_incomplete_codons(&app.dna);
    let lines = vec![
        Line::from(vec![
            Span::raw("Length: "),
            Span::styled(format!("{} bp", app.dna.len()), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("GC Content: "),
            Span::styled(format!("{:.1}%", calculate_gc_content(&app.dna)), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Complete/Incomplete Codons: "),
            Span::styled(format!("{complete}/{incomplete}"), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Start Codons: "),
            Span::styled(count_start_codons(&app.dna).to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Stop Codons: "),
            Span::styled(count_stop_codons(&app.dna).to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::raw("Genes: "),
            Span::styled(app.discovery.genes.len().to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Coding Fraction: "),
            Span::styled(
                format!("{:.1}%", calculate_coding_fraction(app.dna.len(), &app.discovery.genes)),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let analysis_widget = Paragraph::new(lines)
        .block(Block::default().title("Sequence Analysis").borders(Borders::ALL));
    f.render_widget(analysis_widget, area);
}

fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let lines = match app.selected_profile() {
        Some(profile) => create_profile_lines(profile, app.config.ph),
        None => vec![Line::from(vec![
            Span::styled("Nothing selected", Style::default().fg(Color::DarkGray)),
        ])],
    };

    let profile_widget = Paragraph::new(lines)
        .block(Block::default().title("Protein Profile").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(profile_widget, area);
}

fn render_selected_sequences(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(gene) = app.selected_gene() {
        lines.push(Line::from(vec![
            Span::raw("Gene: "),
            Span::styled(
                format!("{}..{} ({} codons)", gene.start, gene.end, gene.codon_count()),
                Style::default().fg(Color::Green),
            ),
        ]));
        if let Some(protein) = app.selected_protein() {
            let copies = app.discovery.copies_of(protein);
            if copies > 1 {
                lines.push(Line::from(vec![
                    Span::styled(format!("Found {copies} times in the input"), Style::default().fg(Color::Yellow)),
                ]));
            }
        }
        lines.push(Line::from(vec![Span::raw("")]));
        lines.push(Line::from(vec![
            Span::raw("DNA: "),
            Span::styled(format_triplets(&gene.sequence), Style::default().fg(Color::Magenta)),
        ]));
        lines.push(Line::from(vec![Span::raw("")]));
    }

    if let Some(protein) = app.selected_protein() {
        let mut spans = vec![Span::raw("Protein: ")];
        spans.extend(create_protein_spans(protein));
        lines.push(Line::from(spans));
    }

    let sequence_widget = Paragraph::new(lines)
        .block(Block::default().title("Selected Gene").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(sequence_widget, area);
}

fn render_status_bar(f: &mut Frame, _app: &App, area: Rect) {
    let status_text = "Up/Down select protein, +/- change pH, 'q' to quit.";

    let status_widget = Paragraph::new(vec![Line::from(vec![
        Span::styled(status_text, Style::default().fg(Color::White)),
    ])])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_ui_draws_profile() {
        let dna = format!("ATG{}TAA", "CTG".repeat(80));
        let app = App::new("test.txt", dna, PipelineConfig::default());

        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("orfprofile"));
        assert!(text.contains("Protein Profile"));
        // Diffusion and compact shape outweigh the hydrophobic core here.
        assert!(text.contains("Signaling"));
    }

    #[test]
    fn test_render_ui_without_proteins() {
        let app = App::new("empty.txt", "CCCC".to_string(), PipelineConfig::default());

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();

        let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("No proteins passed"));
    }
}
