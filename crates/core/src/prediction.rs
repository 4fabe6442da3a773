//! Prediction results shaped for display.

use api_shared::PredictionRecord;

/// A disease symptom together with whether the user selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomMark {
    pub symptom: String,
    pub matched: bool,
}

/// Everything a result card shows for one predicted disease.
///
/// All lists keep the order the service sent them in.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    pub disease: String,
    pub match_percentage: f64,
    pub description: String,
    /// The symptoms that were submitted, all of which count as matched.
    pub selected_symptoms: Vec<String>,
    /// The disease's full symptom list, each flagged against the submitted symptoms.
    pub all_symptoms: Vec<SymptomMark>,
    /// Disease symptoms the user did not select.
    pub remaining_symptoms: Vec<String>,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
}

impl PredictionCard {
    /// Builds a card from a service record and the symptoms that were submitted for it.
    pub fn from_record(record: PredictionRecord, submitted: &[String]) -> Self {
        let is_selected = |s: &String| submitted.contains(s);

        let all_symptoms = record
            .symptoms
            .iter()
            .map(|s| SymptomMark {
                symptom: s.clone(),
                matched: is_selected(s),
            })
            .collect();

        Self {
            remaining_symptoms: remaining_symptoms(&record.symptoms, submitted),
            all_symptoms,
            selected_symptoms: submitted.to_vec(),
            disease: record.disease,
            match_percentage: record.match_percentage,
            description: record.description,
            precautions: record.precautions,
            medications: record.medications,
        }
    }

    /// Match percentage with one decimal place, e.g. `"66.7%"`.
    pub fn match_label(&self) -> String {
        format!("{:.1}%", self.match_percentage)
    }
}

/// `disease_symptoms` minus `selected`, keeping the disease's own order.
pub fn remaining_symptoms(disease_symptoms: &[String], selected: &[String]) -> Vec<String> {
    disease_symptoms
        .iter()
        .filter(|s| !selected.contains(s))
        .cloned()
        .collect()
}
