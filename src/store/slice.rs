use crate::model::Entity;

/// One partition of the store: a collection in server order plus the state
/// of the last fetch.
#[derive(Debug, Clone)]
pub struct Slice<T> {
    loading: bool,
    items: Vec<T>,
    error: Option<String>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            loading: false,
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T: Entity> Slice<T> {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks the slice as loading. Returns `false` when a fetch is already
    /// pending, in which case the caller should not issue another request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// A failed fetch keeps the previous collection.
    pub fn finish_fetch(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
