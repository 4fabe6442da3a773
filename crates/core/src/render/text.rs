//! Plain-text rendering for terminals.

use crate::prediction::PredictionCard;
use crate::view::RegionState;

/// Renders one prediction card as indented plain text.
pub fn card_text(card: &PredictionCard) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} (match: {})\n", card.disease, card.match_label()));
    if !card.description.is_empty() {
        out.push_str(&format!("  {}\n", card.description));
    }

    out.push_str(&format!(
        "  Your symptoms: {}\n",
        card.selected_symptoms.join(", ")
    ));

    let all: Vec<String> = card
        .all_symptoms
        .iter()
        .map(|m| {
            if m.matched {
                format!("[x] {}", m.symptom)
            } else {
                format!("[ ] {}", m.symptom)
            }
        })
        .collect();
    out.push_str(&format!("  All symptoms of {}: {}\n", card.disease, all.join(", ")));
    out.push_str(&format!(
        "  Other symptoms to check: {}\n",
        card.remaining_symptoms.join(", ")
    ));

    out.push_str("  Precautions:\n");
    for p in &card.precautions {
        out.push_str(&format!("    - {p}\n"));
    }
    out.push_str("  Medications:\n");
    for m in &card.medications {
        out.push_str(&format!("    - {m}\n"));
    }
    out
}

/// Renders the whole page state for a terminal session.
///
/// The dropdown is capped at `dropdown_limit` rows; a trailer line counts the rest.
pub fn page_text(state: &RegionState, dropdown_limit: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Search: {}\n", state.search_text));
    out.push_str("Symptoms:\n");
    for entry in state.dropdown.iter().take(dropdown_limit) {
        let marker = if entry.active { "*" } else { " " };
        out.push_str(&format!("  {marker} {}\n", entry.symptom));
    }
    if state.dropdown.len() > dropdown_limit {
        out.push_str(&format!(
            "  ... {} more\n",
            state.dropdown.len() - dropdown_limit
        ));
    }

    if state.selected.is_empty() {
        out.push_str("Selected: (none)\n");
    } else {
        out.push_str(&format!("Selected: {}\n", state.selected.join(", ")));
    }

    if state.loading {
        out.push_str("Analyzing symptoms...\n");
    }
    if let Some(error) = &state.error {
        out.push_str(&format!("Error: {error}\n"));
    }
    for card in &state.results {
        out.push('\n');
        out.push_str(&card_text(card));
    }
    out
}
