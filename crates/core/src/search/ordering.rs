//! Resolution of sort field names into comparators.

use std::cmp::Ordering;

use crate::entity::CatalogEntity;

use super::SearchOrder;

/// Fields a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Id,
    CreatedAt,
}

impl SortField {
    /// Field used when the request names none, or one we do not know.
    pub const DEFAULT: SortField = SortField::Name;

    /// Exact, case-sensitive match on the wire name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(SortField::Name),
            "id" => Some(SortField::Id),
            "createdAt" => Some(SortField::CreatedAt),
            _ => None,
        }
    }

    /// Like [`SortField::parse`], falling back to [`SortField::DEFAULT`].
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or(Self::DEFAULT)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Id => "id",
            SortField::CreatedAt => "createdAt",
        }
    }

    /// Ascending comparison of two records on this field.
    ///
    /// Names compare by code point, never by locale.
    pub fn compare<T: CatalogEntity>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortField::Name => a.name().cmp(b.name()),
            SortField::Id => a.id().cmp(&b.id()),
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        }
    }
}

/// Build the comparator for a sort field name and direction.
///
/// Unknown or empty names order by [`SortField::DEFAULT`]; the direction is
/// applied either way.
pub fn resolve<T: CatalogEntity>(
    field_name: &str,
    order: SearchOrder,
) -> impl Fn(&T, &T) -> Ordering {
    let field = SortField::resolve(field_name);
    move |a: &T, b: &T| order.apply(field.compare(a, b))
}
