use log::{debug, info, trace};

use crate::config::{PipelineConfig, MAX_PH, MIN_PH};
use crate::pipeline::{discover, profile_discovered, Discovery};
use crate::protein::ProteinProfile;
use crate::sequence::Gene;

/// pH change per key press
pub const PH_STEP: f64 = 0.5;

pub struct App {
    pub source: String,
    pub dna: String,
    pub config: PipelineConfig,
    pub discovery: Discovery,
    /// One profile per retained protein, in the same order
    pub profiles: Vec<ProteinProfile>,
    pub selected_protein_index: usize,
}

impl App {
    pub fn new(source: impl Into<String>, dna: String, config: PipelineConfig) -> App {
        let source = source.into();
        debug!("Creating new App instance for {source}");

        let discovery = discover(&dna, config.min_protein_length);
        let profiles = profile_discovered(&discovery, config.ph);

        App {
            source,
            dna,
            config,
            discovery,
            profiles,
            selected_protein_index: 0,
        }
    }

    pub fn selected_profile(&self) -> Option<&ProteinProfile> {
        self.profiles.get(self.selected_protein_index)
    }

    /// Retained protein (stop symbol kept) behind the current selection
    pub fn selected_protein(&self) -> Option<&String> {
        self.discovery.retained.iter().nth(self.selected_protein_index)
    }

    pub fn selected_gene(&self) -> Option<&Gene> {
        self.selected_protein()
            .and_then(|protein| self.discovery.gene_for(protein))
    }

    pub fn next_protein(&mut self) {
        if !self.profiles.is_empty() {
            self.selected_protein_index = (self.selected_protein_index + 1) % self.profiles.len();
            trace!("Selected protein {}", self.selected_protein_index);
        }
    }

    pub fn prev_protein(&mut self) {
        if !self.profiles.is_empty() {
            self.selected_protein_index = if self.selected_protein_index == 0 {
                self.profiles.len() - 1
            } else {
                self.selected_protein_index - 1
            };
            trace!("Selected protein {}", self.selected_protein_index);
        }
    }

    pub fn raise_ph(&mut self) {
        self.set_ph(self.config.ph + PH_STEP);
    }

    pub fn lower_ph(&mut self) {
        self.set_ph(self.config.ph - PH_STEP);
    }

    fn set_ph(&mut self, ph: f64) {
        let ph = ph.clamp(MIN_PH, MAX_PH);
        if ph == self.config.ph {
            return;
        }

        info!("Changing pH from {:.1} to {ph:.1}", self.config.ph);
        self.config.ph = ph;
        self.profiles = profile_discovered(&self.discovery, ph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dna() -> String {
        // Two distinct retained proteins and one short one.
        format!(
            "ATG{}TAAC{}ATG{}TGA",
            "AAG".repeat(60),
            "ATGGCTTAG",
            "CTG".repeat(70)
        )
    }

    #[test]
    fn test_new_runs_pipeline() {
        let app = App::new("sample", sample_dna(), PipelineConfig::default());
        assert_eq!(app.discovery.genes.len(), 3);
        assert_eq!(app.profiles.len(), 2);
        assert!(app.selected_profile().is_some());
        assert!(app.selected_gene().is_some());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::new("sample", sample_dna(), PipelineConfig::default());
        app.prev_protein();
        assert_eq!(app.selected_protein_index, 1);
        app.next_protein();
        assert_eq!(app.selected_protein_index, 0);
    }

    #[test]
    fn test_selected_gene_matches_profile() {
        let mut app = App::new("sample", sample_dna(), PipelineConfig::default());
        for _ in 0..app.profiles.len() {
            let gene = app.selected_gene().unwrap();
            let profile = app.selected_profile().unwrap();
            assert_eq!(gene.codon_count() - 1, profile.length());
            app.next_protein();
        }
    }

    #[test]
    fn test_ph_changes_recompute_charge() {
        let mut app = App::new("sample", sample_dna(), PipelineConfig::default());
        let before = app.selected_profile().unwrap().biophysics.charge;

        app.lower_ph();
        assert_eq!(app.config.ph, 6.5);
        let after = app.selected_profile().unwrap().biophysics.charge;
        assert_ne!(before, after);
    }

    #[test]
    fn test_ph_is_clamped() {
        let config = PipelineConfig { ph: 14.0, ..PipelineConfig::default() };
        let mut app = App::new("sample", sample_dna(), config);
        app.raise_ph();
        assert_eq!(app.config.ph, 14.0);
    }

    #[test]
    fn test_empty_sequence_has_no_selection() {
        let mut app = App::new("empty", String::new(), PipelineConfig::default());
        app.next_protein();
        app.prev_protein();
        assert_eq!(app.selected_protein_index, 0);
        assert!(app.selected_profile().is_none());
        assert!(app.selected_gene().is_none());
    }
}
