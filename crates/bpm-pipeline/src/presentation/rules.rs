use bpm_model::CatalogItem;

/// One conditional entry: when `predicate` holds, `factory` produces the entry
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    /// Whether the rule applies to an item
    pub predicate: fn(&CatalogItem) -> bool,
    /// Entry produced for an item
    pub factory: fn(&CatalogItem) -> T,
}

impl<T> Rule<T> {
    /// Create rule
    #[inline]
    #[must_use]
    pub const fn new(predicate: fn(&CatalogItem) -> bool, factory: fn(&CatalogItem) -> T) -> Self {
        Self { predicate, factory }
    }

    /// Rule that always applies
    #[inline]
    #[must_use]
    pub const fn always(factory: fn(&CatalogItem) -> T) -> Self {
        Self {
            predicate: any_item,
            factory,
        }
    }
}

fn any_item(_: &CatalogItem) -> bool {
    true
}

/// Ordered rules, generic fillers and count bounds for one list
///
/// Rules are evaluated in order and stop once `max` entries exist. Fillers
/// run only while the list is below `min`. Duplicate entries are skipped.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<T: 'static> {
    /// Conditional rules, in priority order
    pub rules: &'static [Rule<T>],
    /// Generic entries used to reach `min`
    pub fillers: &'static [Rule<T>],
    /// Lower bound reached with fillers
    pub min: usize,
    /// Hard upper bound
    pub max: usize,
}

impl<T: PartialEq> RuleTable<T> {
    /// Entries for `item`
    #[must_use]
    pub fn generate(&self, item: &CatalogItem) -> Vec<T> {
        let mut entries = Vec::with_capacity(self.max);
        fill(&mut entries, self.rules, item, self.max);
        fill(&mut entries, self.fillers, item, self.min.min(self.max));
        entries
    }
}

fn fill<T: PartialEq>(entries: &mut Vec<T>, rules: &[Rule<T>], item: &CatalogItem, limit: usize) {
    for rule in rules {
        if entries.len() >= limit {
            return;
        }
        if (rule.predicate)(item) {
            let entry = (rule.factory)(item);
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
    }
}
