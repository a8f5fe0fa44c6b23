/// Simple in-memory, append-only list of block records.
///
/// Records are opaque strings; no format or linkage checks happen here.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record to the end of the ledger.
    pub fn append(&mut self, record: impl Into<String>) {
        self.records.push(record.into());
    }

    /// Every record in insertion order, each followed by `\n`.
    /// An empty ledger renders as the empty string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.records.iter().map(|r| r.len() + 1).sum());
        for record in &self.records {
            out.push_str(record);
            out.push('\n');
        }
        out
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
