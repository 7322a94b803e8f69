//! Binding storage, partitioned by the clause that owns the placeholders.

/// Clause category a bound value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingCategory {
    Where,
    Having,
    Insert,
    Update,
}

/// Ordered bound values per category.
///
/// Every mutator that records a placeholder-producing entry pushes the
/// matching values here in the same call, so each category always holds
/// exactly as many values as the compiler emits placeholders for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    where_values: Vec<String>,
    having_values: Vec<String>,
    insert_values: Vec<String>,
    update_values: Vec<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl Ledger {
    fn category_mut(&mut self, category: BindingCategory) -> &mut Vec<String> {
        match category {
            BindingCategory::Where => &mut self.where_values,
            BindingCategory::Having => &mut self.having_values,
            BindingCategory::Insert => &mut self.insert_values,
            BindingCategory::Update => &mut self.update_values,
        }
    }

    /// Append one value to a category.
    pub(crate) fn push(&mut self, category: BindingCategory, value: String) {
        self.category_mut(category).push(value);
    }

    /// Append values to a category, preserving their order.
    pub(crate) fn extend(
        &mut self,
        category: BindingCategory,
        values: impl IntoIterator<Item = String>,
    ) {
        self.category_mut(category).extend(values);
    }

    /// Values recorded for a category.
    pub(crate) fn slice(&self, category: BindingCategory) -> &[String] {
        match category {
            BindingCategory::Where => &self.where_values,
            BindingCategory::Having => &self.having_values,
            BindingCategory::Insert => &self.insert_values,
            BindingCategory::Update => &self.update_values,
        }
    }

    /// Store LIMIT; empty text clears it.
    pub(crate) fn set_limit(&mut self, text: String) {
        self.limit = non_empty(text);
    }

    /// Store OFFSET; empty text clears it.
    pub(crate) fn set_offset(&mut self, text: String) {
        self.offset = non_empty(text);
    }

    pub(crate) fn limit(&self) -> Option<&str> {
        self.limit.as_deref()
    }

    pub(crate) fn offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    /// Pagination values in placeholder order: LIMIT, then OFFSET.
    pub(crate) fn pagination(&self) -> impl Iterator<Item = &str> {
        self.limit().into_iter().chain(self.offset())
    }

    pub(crate) fn has_pagination(&self) -> bool {
        self.limit.is_some() || self.offset.is_some()
    }

    /// Total number of recorded values.
    pub(crate) fn len(&self) -> usize {
        self.where_values.len()
            + self.having_values.len()
            + self.insert_values.len()
            + self.update_values.len()
            + usize::from(self.limit.is_some())
            + usize::from(self.offset.is_some())
    }
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
