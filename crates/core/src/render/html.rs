//! HTML rendering for the symptom checker page.
//!
//! Produces the markup fragments each page region holds: dropdown list items, selected-symptom
//! badges and prediction result cards. All interpolated text is escaped, so symptom names and
//! service-provided descriptions cannot inject markup into the page.
//!
//! [`HtmlPage`] implements [`View`] by keeping the current markup and visibility of every region.

use crate::prediction::PredictionCard;
use crate::selector::DropdownEntry;
use crate::view::View;

/// Escapes text for use inside HTML element content and double-quoted attributes.
///
/// Escaping rules:
/// - `&` → `&amp;`
/// - `<` → `&lt;`, `>` → `&gt;`
/// - `"` → `&quot;`, `'` → `&#39;`
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the filtered dropdown as `<li>` items.
///
/// Selected entries carry the `active` class. Each anchor carries the symptom in
/// `data-symptom`, which is what a click handler turns into [`crate::UiEvent::DropdownClick`].
pub fn dropdown_html(entries: &[DropdownEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let symptom = escape_html(&entry.symptom);
            let active = if entry.active { " active" } else { "" };
            format!(
                "<li><a class=\"dropdown-item{active}\" href=\"#\" data-symptom=\"{symptom}\">{symptom}</a></li>\n"
            )
        })
        .collect()
}

/// Renders the selection as removable badges, in selection order.
pub fn selected_html(symptoms: &[String]) -> String {
    symptoms
        .iter()
        .map(|s| {
            let symptom = escape_html(s);
            format!(
                "<span class=\"badge bg-primary me-2 mb-2\">{symptom}<button type=\"button\" class=\"btn-close btn-close-white ms-2\" aria-label=\"Remove\" data-symptom=\"{symptom}\"></button></span>\n"
            )
        })
        .collect()
}

fn badge_list(class: &str, items: impl IntoIterator<Item = (String, &'static str)>) -> String {
    let mut out = format!("<div class=\"{class}\">");
    for (text, badge) in items {
        out.push_str(&format!(
            "<span class=\"badge {badge} me-2 mb-2\">{}</span>",
            escape_html(&text)
        ));
    }
    out.push_str("</div>");
    out
}

fn item_list(class: &str, item_class: &str, icon: &str, items: &[String]) -> String {
    let mut out = format!("<div class=\"{class}\">");
    for item in items {
        out.push_str(&format!(
            "<div class=\"{item_class} mb-2\"><i class=\"{icon} me-2\"></i><span>{}</span></div>",
            escape_html(item)
        ));
    }
    out.push_str("</div>");
    out
}

/// Renders one prediction as a result card.
///
/// Sections, in order: header with disease name and `Match: NN.N%`, description, the user's
/// symptoms (all green), every symptom of the disease (green when selected, blue otherwise), the
/// remaining symptoms to check, precautions and medications.
pub fn card_html(card: &PredictionCard) -> String {
    let disease = escape_html(&card.disease);
    let mut out = String::new();

    out.push_str("<div class=\"card mb-3\">\n");
    out.push_str(&format!(
        "<div class=\"card-header\"><h5 class=\"mb-0\">{disease}</h5><small class=\"text-muted\">Match: {}</small></div>\n",
        card.match_label()
    ));
    out.push_str("<div class=\"card-body\">\n");
    out.push_str(&format!(
        "<p class=\"card-text\">{}</p>\n",
        escape_html(&card.description)
    ));

    out.push_str("<div class=\"symptoms-section mb-3\"><h6><i class=\"fas fa-check-circle text-success me-2\"></i>Your Symptoms:</h6>");
    out.push_str(&badge_list(
        "selected-symptoms-list",
        card.selected_symptoms.iter().map(|s| (s.clone(), "bg-success")),
    ));
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<div class=\"all-symptoms-section mb-3\"><h6><i class=\"fas fa-list text-primary me-2\"></i>All Symptoms of {disease}:</h6>"
    ));
    out.push_str(&badge_list(
        "all-symptoms-list",
        card.all_symptoms.iter().map(|m| {
            let badge = if m.matched { "bg-success" } else { "bg-primary" };
            (m.symptom.clone(), badge)
        }),
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"remaining-symptoms-section mb-3\"><h6><i class=\"fas fa-question-circle text-warning me-2\"></i>Other Symptoms to Check:</h6>");
    out.push_str(&badge_list(
        "remaining-symptoms-list",
        card.remaining_symptoms
            .iter()
            .map(|s| (s.clone(), "bg-warning text-dark")),
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"precautions-section mb-4\"><h6 class=\"section-heading\"><i class=\"fas fa-shield-alt text-primary me-2\"></i>Precautions</h6>");
    out.push_str(&item_list(
        "precautions-list",
        "precaution-item",
        "fas fa-check-circle text-success",
        &card.precautions,
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"medications-section\"><h6 class=\"section-heading\"><i class=\"fas fa-pills text-info me-2\"></i>Medications</h6>");
    out.push_str(&item_list(
        "medications-list",
        "medication-item",
        "fas fa-capsules text-info",
        &card.medications,
    ));
    out.push_str("</div>\n");

    out.push_str("</div>\n</div>\n");
    out
}

/// Renders every prediction card, in service order.
pub fn results_html(cards: &[PredictionCard]) -> String {
    cards.iter().map(card_html).collect()
}

/// Current markup and visibility of every page region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    pub dropdown: String,
    pub selected: String,
    pub search_value: String,
    pub loading_visible: bool,
    pub error_text: String,
    pub error_visible: bool,
    pub results: String,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the regions into one document fragment, hiding regions with `d-none`.
    pub fn fragment(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " d-none" };
        let mut out = String::new();
        out.push_str(&format!(
            "<input type=\"text\" id=\"symptomSearch\" value=\"{}\">\n",
            escape_html(&self.search_value)
        ));
        out.push_str(&format!(
            "<ul id=\"symptomsDropdown\">\n{}</ul>\n",
            self.dropdown
        ));
        out.push_str(&format!(
            "<div id=\"selectedSymptoms\">\n{}</div>\n",
            self.selected
        ));
        out.push_str(&format!(
            "<div id=\"loadingSpinner\" class=\"spinner-border{}\"></div>\n",
            hidden(self.loading_visible)
        ));
        out.push_str(&format!(
            "<div id=\"errorMessage\" class=\"alert alert-danger{}\">{}</div>\n",
            hidden(self.error_visible),
            escape_html(&self.error_text)
        ));
        out.push_str(&format!("<div id=\"results\">\n{}</div>\n", self.results));
        out
    }
}

impl View for HtmlPage {
    fn render_dropdown(&mut self, entries: &[DropdownEntry]) {
        self.dropdown = dropdown_html(entries);
    }

    fn render_selected(&mut self, symptoms: &[String]) {
        self.selected = selected_html(symptoms);
    }

    fn set_search_text(&mut self, text: &str) {
        self.search_value = text.to_string();
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error_text = message.to_string();
        self.error_visible = true;
        self.results.clear();
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn render_results(&mut self, cards: &[PredictionCard]) {
        self.results = results_html(cards);
    }

    fn clear_results(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::PredictionCard;
    use api_shared::PredictionRecord;

    fn card() -> PredictionCard {
        PredictionCard::from_record(
            PredictionRecord {
                disease: "Influenza".into(),
                match_percentage: 50.0,
                description: "Fever & <chills>".into(),
                symptoms: vec!["Fever".into(), "Cough".into()],
                precautions: vec!["Rest".into()],
                medications: vec!["Paracetamol".into()],
            },
            &["Fever".to_string()],
        )
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn dropdown_marks_active_items() {
        let html = dropdown_html(&[
            DropdownEntry {
                symptom: "Cough".into(),
                active: true,
            },
            DropdownEntry {
                symptom: "Fever".into(),
                active: false,
            },
        ]);
        assert_eq!(
            html,
            "<li><a class=\"dropdown-item active\" href=\"#\" data-symptom=\"Cough\">Cough</a></li>\n\
             <li><a class=\"dropdown-item\" href=\"#\" data-symptom=\"Fever\">Fever</a></li>\n"
        );
    }

    #[test]
    fn selected_badges_carry_remove_button() {
        let html = selected_html(&["Chest pain".to_string()]);
        assert!(html.contains(">Chest pain<button"));
        assert!(html.contains("aria-label=\"Remove\" data-symptom=\"Chest pain\""));
    }

    #[test]
    fn card_contains_every_section_in_order() {
        let html = card_html(&card());
        let order = [
            "<h5 class=\"mb-0\">Influenza</h5>",
            "Match: 50.0%",
            "Fever &amp; &lt;chills&gt;",
            "Your Symptoms:",
            "All Symptoms of Influenza:",
            "Other Symptoms to Check:",
            "Precautions",
            "Medications",
        ];
        let mut from = 0;
        for needle in order {
            let at = html[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            from += at + needle.len();
        }
    }

    #[test]
    fn card_colours_matched_and_unmatched_symptoms() {
        let html = card_html(&card());
        assert!(html.contains(
            "<div class=\"all-symptoms-list\"><span class=\"badge bg-success me-2 mb-2\">Fever</span><span class=\"badge bg-primary me-2 mb-2\">Cough</span></div>"
        ));
        assert!(html.contains(
            "<div class=\"remaining-symptoms-list\"><span class=\"badge bg-warning text-dark me-2 mb-2\">Cough</span></div>"
        ));
    }

    #[test]
    fn show_error_clears_results_and_fragment_hides_spinner() {
        let mut page = HtmlPage::new();
        page.render_results(&[card()]);
        page.show_error("Please select at least one symptom");
        assert!(page.results.is_empty());

        let fragment = page.fragment();
        assert!(fragment.contains("<div id=\"loadingSpinner\" class=\"spinner-border d-none\">"));
        assert!(fragment.contains(
            "<div id=\"errorMessage\" class=\"alert alert-danger\">Please select at least one symptom</div>"
        ));
    }
}
