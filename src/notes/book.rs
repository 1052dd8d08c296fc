use crate::domain::Annotation;

/// Session notes ordered by video time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteBook {
    notes: Vec<Annotation>,
}

impl NoteBook {
    pub fn new(mut notes: Vec<Annotation>) -> Self {
        notes.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { notes }
    }

    pub fn notes(&self) -> &[Annotation] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Annotation> {
        self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Insert keeping time order; notes at the same time stay in insertion order
    pub fn add(&mut self, note: Annotation) {
        let at = self.notes.partition_point(|n| n.t <= note.t);
        self.notes.insert(at, note);
    }

    /// Remove a note by id, returning whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&Annotation> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }
}
