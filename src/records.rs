use std::cmp::Ordering;

/// Last measured area of one polygon, keyed by the caller's id.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaRecord {
    pub id: String,
    pub area: f64,
}

/// Area list owned by the editing surface. Insertion order is kept;
/// `sorted` gives the display order.
#[derive(Clone, Debug, Default)]
pub struct AreaRecords {
    records: Vec<AreaRecord>,
}

impl AreaRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AreaRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AreaRecord> {
        self.records.iter()
    }

    /// Replaces the area of an existing id or appends a new record.
    pub fn upsert(&mut self, id: &str, area: f64) {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(r) => r.area = area,
            None => self.records.push(AreaRecord {
                id: id.to_string(),
                area,
            }),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<AreaRecord> {
        let i = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(i))
    }

    /// Largest area first, ties by id.
    pub fn sorted(&self) -> Vec<&AreaRecord> {
        let mut ret: Vec<&AreaRecord> = self.records.iter().collect();
        ret.sort_by(|a, b| match b.area.total_cmp(&a.area) {
            Ordering::Equal => a.id.cmp(&b.id),
            o => o,
        });
        ret
    }
}
