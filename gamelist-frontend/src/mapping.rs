use gamelist_core::Field;

/// Ordered table pairing canonical fields with one dialect's XML tag names.
///
/// The order of the table is the order tags are written in. Lookups work in
/// both directions; `inverted` gives the tag-to-field view explicitly.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    entries: &'static [(Field, &'static str)],
}

impl FieldMapping {
    pub const fn new(entries: &'static [(Field, &'static str)]) -> Self {
        Self { entries }
    }

    /// `(field, tag)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// XML tag used for a canonical field, if the dialect knows it.
    pub fn tag(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, tag)| *tag)
    }

    /// Canonical field for an XML tag, if the dialect knows it.
    pub fn field(&self, tag: &str) -> Option<Field> {
        self.entries
            .iter()
            .find(|(_, t)| *t == tag)
            .map(|(field, _)| *field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.tag(field).is_some()
    }

    /// The same table keyed by tag.
    pub fn inverted(&self) -> Vec<(&'static str, Field)> {
        self.entries.iter().map(|(f, t)| (*t, *f)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
