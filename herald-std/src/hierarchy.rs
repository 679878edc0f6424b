//! The closed set of participating event kinds.
//!
//! A [`Hierarchy`] is assembled once, before dispatching starts, from an
//! explicit enumeration of kinds. Building it precomputes every member's
//! ancestors within the set, so hierarchy-aware routing never has to inspect
//! types at post time.

use herald_core::{Event, HierarchyError, Kind, KindEntry, KindSet};
use std::collections::{HashMap, HashSet};

/// A closed, ordered set of event kinds and their ancestor table.
///
/// Kinds outside the set can still be posted and handled directly; they
/// just never take part in connected routing.
///
/// # Example
/// ```ignore
/// let hierarchy = Hierarchy::of::<kinds![Connected, Reconnected]>()?;
/// assert!(hierarchy.derives(Reconnected::kind(), Connected::kind()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Hierarchy {
    members: Vec<Kind>,
    ancestors: HashMap<Kind, Vec<Kind>>,
}

impl Hierarchy {
    /// A hierarchy with no members. Only direct routing applies.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the hierarchy enumerated by a type-level kind list.
    pub fn of<S: KindSet>() -> Result<Self, HierarchyError> {
        let mut entries = Vec::new();
        S::entries(&mut entries);
        Self::from_entries(entries)
    }

    /// Start building a hierarchy kind by kind.
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder::new()
    }

    /// Build the hierarchy from explicit entries, in enumeration order.
    pub fn from_entries(entries: Vec<KindEntry>) -> Result<Self, HierarchyError> {
        let mut position = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if position.insert(entry.kind, index).is_some() {
                return Err(HierarchyError::DuplicateKind { kind: entry.kind });
            }
        }

        let declared: HashMap<Kind, &[Kind]> = entries
            .iter()
            .map(|entry| (entry.kind, entry.ancestors.as_slice()))
            .collect();

        let mut ancestors = HashMap::with_capacity(entries.len());
        for entry in &entries {
            let reachable = reachable_from(entry.kind, &declared)?;
            let mut within: Vec<Kind> = reachable
                .into_iter()
                .filter(|kind| position.contains_key(kind))
                .collect();
            within.sort_by_key(|kind| position.get(kind).copied().unwrap_or(usize::MAX));
            ancestors.insert(entry.kind, within);
        }

        Ok(Self {
            members: entries.into_iter().map(|entry| entry.kind).collect(),
            ancestors,
        })
    }

    /// Every member `kind` derives from, in enumeration order.
    ///
    /// Empty for kinds outside the hierarchy.
    pub fn ancestors(&self, kind: Kind) -> &[Kind] {
        self.ancestors.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `kind` participates in this hierarchy.
    pub fn contains(&self, kind: Kind) -> bool {
        self.ancestors.contains_key(&kind)
    }

    /// Whether `derived` is a member deriving from the member `base`.
    pub fn derives(&self, derived: Kind, base: Kind) -> bool {
        self.ancestors(derived).contains(&base)
    }

    /// The participating kinds, in enumeration order.
    pub fn members(&self) -> &[Kind] {
        &self.members
    }

    /// Number of participating kinds.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if no kinds participate.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Every kind reachable from `start` through declared ancestors.
fn reachable_from(
    start: Kind,
    declared: &HashMap<Kind, &[Kind]>,
) -> Result<HashSet<Kind>, HierarchyError> {
    let mut seen = HashSet::new();
    let mut pending: Vec<Kind> = declared.get(&start).map(|d| d.to_vec()).unwrap_or_default();
    while let Some(kind) = pending.pop() {
        if kind == start {
            return Err(HierarchyError::Cycle { kind: start });
        }
        if !seen.insert(kind) {
            continue;
        }
        // Only members carry known declarations.
        if let Some(next) = declared.get(&kind) {
            pending.extend_from_slice(next);
        }
    }
    Ok(seen)
}

/// Builder for constructing a [`Hierarchy`].
///
/// # Example
/// ```ignore
/// let hierarchy = Hierarchy::builder()
///     .kind::<Connected>()
///     .kind::<Reconnected>()
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    entries: Vec<KindEntry>,
}

impl HierarchyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add kind `E` as the next member.
    pub fn kind<E: Event>(self) -> Self {
        self.entry(KindEntry::of::<E>())
    }

    /// Add a prepared entry as the next member.
    pub fn entry(mut self, entry: KindEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Get the number of listed kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no kinds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the enumeration and compute the ancestor table.
    pub fn build(self) -> Result<Hierarchy, HierarchyError> {
        Hierarchy::from_entries(self.entries)
    }
}
