use crate::model::SpecSheet;
use indexmap::IndexMap;

pub const DEFAULT_GROUP_TITLE: &str = "Main Feature";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecPair {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecGroupDraft {
    pub title: String,
    pub pairs: Vec<SpecPair>,
}

impl SpecGroupDraft {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            pairs: vec![SpecPair::default()],
        }
    }
}

/// Ordered specification groups as the seller is typing them.
///
/// Every group always keeps at least one pair. Out-of-range indexes are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDraft {
    groups: Vec<SpecGroupDraft>,
}

impl Default for SpecDraft {
    fn default() -> Self {
        Self {
            groups: vec![SpecGroupDraft::titled(DEFAULT_GROUP_TITLE)],
        }
    }
}

impl SpecDraft {
    pub fn groups(&self) -> &[SpecGroupDraft] {
        &self.groups
    }

    /// Appends an untitled group with one empty pair; returns its index.
    pub fn add_group(&mut self) -> usize {
        self.groups.push(SpecGroupDraft::titled(""));
        self.groups.len() - 1
    }

    pub fn set_group_title(&mut self, group: usize, title: impl Into<String>) {
        if let Some(g) = self.groups.get_mut(group) {
            g.title = title.into();
        }
    }

    pub fn add_pair(&mut self, group: usize) {
        if let Some(g) = self.groups.get_mut(group) {
            g.pairs.push(SpecPair::default());
        }
    }

    pub fn set_pair_key(&mut self, group: usize, pair: usize, key: impl Into<String>) {
        if let Some(p) = self.pair_mut(group, pair) {
            p.key = key.into();
        }
    }

    pub fn set_pair_value(&mut self, group: usize, pair: usize, value: impl Into<String>) {
        if let Some(p) = self.pair_mut(group, pair) {
            p.value = value.into();
        }
    }

    /// Removes a pair unless it is the last one in its group.
    pub fn remove_pair(&mut self, group: usize, pair: usize) -> bool {
        match self.groups.get_mut(group) {
            Some(g) if g.pairs.len() > 1 && pair < g.pairs.len() => {
                g.pairs.remove(pair);
                true
            }
            _ => false,
        }
    }

    fn pair_mut(&mut self, group: usize, pair: usize) -> Option<&mut SpecPair> {
        self.groups.get_mut(group)?.pairs.get_mut(pair)
    }

    /// The groups as they are submitted: trimmed, blank titles and half-filled
    /// pairs dropped.
    ///
    /// A titled group with no complete pair is kept as an empty group. When
    /// two groups trim to the same title the later one replaces the earlier
    /// in the earlier one's position.
    pub fn to_spec_sheet(&self) -> SpecSheet {
        let mut sheet = SpecSheet::new();
        for group in &self.groups {
            let title = group.title.trim();
            if title.is_empty() {
                continue;
            }
            let entries: IndexMap<String, String> = group
                .pairs
                .iter()
                .filter_map(|p| {
                    let (key, value) = (p.key.trim(), p.value.trim());
                    (!key.is_empty() && !value.is_empty())
                        .then(|| (key.to_string(), value.to_string()))
                })
                .collect();
            sheet.insert(title.to_string(), entries);
        }
        sheet
    }
}
