use std::collections::{BTreeSet, HashMap};

use crate::models::domain::{CorrectOption, Label, ProcessedSection};

/// Every name of each requested label, grouped by the section it was found in.
///
/// Built once per quiz and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct OptionPool {
    names: HashMap<Label, Vec<Vec<String>>>,
}

impl OptionPool {
    /// Labels without a single name still get one (empty) list per section.
    pub fn build(sections: &[ProcessedSection], labels: &[Label]) -> Self {
        let mut names: HashMap<Label, Vec<Vec<String>>> = labels
            .iter()
            .map(|label| (*label, vec![Vec::new(); sections.len()]))
            .collect();

        for (index, section) in sections.iter().enumerate() {
            for processed in section {
                if let Some(per_section) = names.get_mut(&processed.label) {
                    per_section[index].extend(processed.names.iter().cloned());
                }
            }
        }

        Self { names }
    }

    pub fn sections(&self, label: Label) -> Option<&[Vec<String>]> {
        self.names.get(&label).map(Vec::as_slice)
    }

    pub fn section_names(&self, label: Label, section: usize) -> &[String] {
        self.sections(label)
            .and_then(|sections| sections.get(section))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Same-section names become the relevant options; names from every other section, minus
    /// those already relevant, become the cross-section options.
    pub fn correct_option(&self, label: Label, section: usize, answer: &str) -> CorrectOption {
        let mut relevant: BTreeSet<String> =
            self.section_names(label, section).iter().cloned().collect();
        relevant.insert(answer.to_string());

        let others: BTreeSet<String> = self
            .sections(label)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != section)
            .flat_map(|(_, names)| names.iter())
            .filter(|name| !relevant.contains(*name))
            .cloned()
            .collect();

        CorrectOption::new(relevant, others, answer)
    }
}
