use super::{Item, ItemKind};

/// An ordered, read-only collection of items of a single kind.
pub trait ItemSource {
    fn kind(&self) -> ItemKind;

    /// Items in document order.
    fn items(&self) -> &[Item];
}

/// The `file` entries of a summary report.
#[derive(Debug, Clone, Default)]
pub struct Files {
    items: Vec<Item>,
}

impl Files {
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl ItemSource for Files {
    fn kind(&self) -> ItemKind {
        ItemKind::File
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

/// The `function` entries of a summary report.
#[derive(Debug, Clone, Default)]
pub struct Functions {
    items: Vec<Item>,
}

impl Functions {
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl ItemSource for Functions {
    fn kind(&self) -> ItemKind {
        ItemKind::Function
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}
