//! Effects - side effects declared by the reducer

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full catalog from the given url, once
    LoadCatalog { url: String },
}
