//! Session wish list.
//!
//! An insertion-ordered set of cuisine names. It only grows: there is no
//! removal, and it lives as long as the session that owns it.

/// Result of adding a name, used for the confirmation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Default)]
pub struct WishList {
    names: Vec<String>,
}

impl WishList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it is already listed
    pub fn add(&mut self, name: &str) -> AddOutcome {
        if self.contains(name) {
            log::debug!("{} is already on the wish list", name);
            return AddOutcome::AlreadyPresent;
        }
        self.names.push(name.to_string());
        log::info!("Added {} to wish list ({} entries)", name, self.names.len());
        AddOutcome::Added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
