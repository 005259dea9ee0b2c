//! Tag and member-role filters over borrowed entities.

use crate::models::{Member, Node, Relation, TaggedEntity, Tags, Way};

/// Anything carrying an OSM tag mapping.
pub trait Tagged {
    fn tags(&self) -> &Tags;

    fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tags().get(key).is_some_and(|v| v == value)
    }
}

impl Tagged for Node {
    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Tagged for Way {
    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Tagged for Relation {
    fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Tagged for TaggedEntity {
    fn tags(&self) -> &Tags {
        TaggedEntity::tags(self)
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tags(&self) -> &Tags {
        (**self).tags()
    }
}

/// Entities whose `key` tag maps to one of `values`, in input order.
pub fn filter_by_tag<'a, T, I>(entities: I, key: &str, values: &[&str]) -> Vec<&'a T>
where
    T: Tagged + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entities
        .into_iter()
        .filter(|e| e.tags().get(key).is_some_and(|v| values.contains(&v.as_str())))
        .collect()
}

/// Entities whose `key` tag equals `value`, in input order.
pub fn filter_by_tag_value<'a, T, I>(entities: I, key: &str, value: &str) -> Vec<&'a T>
where
    T: Tagged + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entities.into_iter().filter(|e| e.has_tag(key, value)).collect()
}

/// Members with `role` across all relations, in relation then member order.
///
/// A member referenced by several relations appears once per relation.
pub fn filter_members<'a, I>(relations: I, role: &str) -> Vec<&'a Member>
where
    I: IntoIterator<Item = &'a Relation>,
{
    relations
        .into_iter()
        .flat_map(|r| r.members.iter())
        .filter(|m| m.role == role)
        .collect()
}
