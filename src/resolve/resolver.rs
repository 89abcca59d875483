//! Dotted-path resolution over an object graph.

use crate::node::{Key, Value};

use super::error::ResolveError;
use super::interface::Interface;

/// The separator a [`Resolver::new`] resolver splits expressions on.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A path expression before splitting.
///
/// Most callers pass a string and never name this type; the `From`
/// impls let [`Resolver::get`] and [`Resolver::set`] accept anything
/// path-shaped. A scalar expression is split on the resolver's
/// separator into name-form keys. A sequence is taken as the key path
/// verbatim, each key keeping the spelling it was given, and is never
/// split further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpression {
    /// One unsplit expression.
    Scalar(Key),
    /// An already-split key path.
    Keys(Vec<Key>),
}

impl From<&str> for PathExpression {
    fn from(text: &str) -> Self {
        PathExpression::Scalar(Key::name(text))
    }
}

impl From<String> for PathExpression {
    fn from(text: String) -> Self {
        PathExpression::Scalar(Key::Name(text))
    }
}

impl From<Key> for PathExpression {
    fn from(key: Key) -> Self {
        PathExpression::Scalar(key)
    }
}

impl From<Vec<Key>> for PathExpression {
    fn from(keys: Vec<Key>) -> Self {
        PathExpression::Keys(keys)
    }
}

impl From<&[Key]> for PathExpression {
    fn from(keys: &[Key]) -> Self {
        PathExpression::Keys(keys.to_vec())
    }
}

impl<const N: usize> From<[Key; N]> for PathExpression {
    fn from(keys: [Key; N]) -> Self {
        PathExpression::Keys(keys.into())
    }
}

impl From<Vec<&str>> for PathExpression {
    fn from(keys: Vec<&str>) -> Self {
        PathExpression::Keys(keys.into_iter().map(Key::name).collect())
    }
}

impl From<&[&str]> for PathExpression {
    fn from(keys: &[&str]) -> Self {
        PathExpression::Keys(keys.iter().copied().map(Key::name).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathExpression {
    fn from(keys: [&str; N]) -> Self {
        PathExpression::Keys(keys.into_iter().map(Key::name).collect())
    }
}

/// Resolves dotted-path expressions against a [`Value`] graph.
///
/// A resolver owns two things: the separator it splits expressions on,
/// and the [`Interface`] it delegates every single hop to. Reads walk
/// the split path and resolve to `None` as soon as a hop is absent.
/// Writes walk the same way but construct absent intermediate
/// containers as they go, each one mirroring the shape of its parent.
///
/// Resolvers compare and hash by separator.
///
/// ## Examples
///
/// ```
/// use keypath::{table, Resolver, Value};
///
/// let resolver = Resolver::new();
/// let mut employee = Value::Table(table! {
///     "id" => 1,
///     "demographics" => table! { "first" => "Matt" },
/// });
///
/// assert_eq!(
///     resolver.get(&employee, "demographics.first"),
///     Some(&Value::from("Matt")),
/// );
///
/// resolver.set(&mut employee, "statuses.active", true)?;
/// assert_eq!(
///     resolver.get(&employee, "statuses.active"),
///     Some(&Value::Boolean(true)),
/// );
/// # Ok::<(), keypath::ResolveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resolver {
    separator: String,
    interface: Interface,
}

impl Resolver {
    /// Creates a resolver splitting on [`DEFAULT_SEPARATOR`].
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Creates a resolver splitting on `separator`.
    ///
    /// An empty separator disables splitting: every scalar expression
    /// becomes a single key.
    ///
    /// ## Examples
    ///
    /// ```
    /// use keypath::{table, Resolver, Value};
    ///
    /// let resolver = Resolver::with_separator("$");
    /// let node = Value::Table(table! {
    ///     "demographics" => table! { "first" => "Matt" },
    /// });
    ///
    /// assert_eq!(
    ///     resolver.get(&node, "demographics$first"),
    ///     Some(&Value::from("Matt")),
    /// );
    /// ```
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Resolver {
            separator: separator.into(),
            interface: Interface::new(),
        }
    }

    /// The separator this resolver splits on.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Resolves `expression` against `object`, yielding the value at the
    /// end of the path.
    ///
    /// Any absent hop resolves the whole path to `None`. An empty key
    /// sequence resolves to `object` itself.
    pub fn get<'v>(
        &self,
        object: &'v Value,
        expression: impl Into<PathExpression>,
    ) -> Option<&'v Value> {
        self.traverse(object, self.key_path(expression.into()))
    }

    /// Resolves `expression` against `object`, yielding the value at the
    /// end of the path mutably.
    pub fn get_mut<'v>(
        &self,
        object: &'v mut Value,
        expression: impl Into<PathExpression>,
    ) -> Option<&'v mut Value> {
        let mut pointer = Some(object);
        for key in self.key_path(expression.into()) {
            pointer = pointer.and_then(|node| self.interface.get_mut(node, &key));
        }
        pointer
    }

    /// Reads `key` as one hop against `object`, without any splitting.
    ///
    /// The counterpart of [`get`](Resolver::get) for keys that may
    /// contain the separator as literal text.
    ///
    /// ## Examples
    ///
    /// ```
    /// use keypath::{table, Resolver, Value};
    ///
    /// let resolver = Resolver::new();
    /// let node = Value::Table(table! { "a.b" => 1 });
    ///
    /// assert_eq!(resolver.get(&node, "a.b"), None);
    /// assert_eq!(resolver.get_direct(&node, "a.b"), Some(&Value::Integer(1)));
    /// ```
    pub fn get_direct<'v>(&self, object: &'v Value, key: impl Into<Key>) -> Option<&'v Value> {
        self.interface.get(object, &key.into())
    }

    /// Writes `value` to the end of the path, constructing absent
    /// intermediate containers on the way.
    ///
    /// Each constructed container mirrors the shape of its parent: an
    /// empty table under a table, whatever
    /// [`Record::empty_child`](crate::Record::empty_child) answers under
    /// a record. After every intermediate hop the pointer re-reads the
    /// node it just ensured, so setters that transform what they store
    /// are honored.
    ///
    /// ## Examples
    ///
    /// ```
    /// use keypath::{table, Resolver, Value};
    ///
    /// let resolver = Resolver::new();
    /// let mut node = Value::Table(table! { "id" => 1 });
    ///
    /// resolver.set(&mut node, "statuses.active", true)?;
    /// assert_eq!(
    ///     resolver.get(&node, "statuses.active"),
    ///     Some(&Value::Boolean(true)),
    /// );
    /// # Ok::<(), keypath::ResolveError>(())
    /// ```
    pub fn set(
        &self,
        object: &mut Value,
        expression: impl Into<PathExpression>,
        value: impl Into<Value>,
    ) -> Result<(), ResolveError> {
        self.build_up(object, &self.key_path(expression.into()), value.into())
    }

    /// Writes `value` under `key` as one hop against `object`, without
    /// splitting or construction.
    pub fn set_direct(&self, object: &mut Value, key: impl Into<Key>, value: impl Into<Value>) {
        self.interface.set(object, &key.into(), value.into());
    }

    /// Splits an expression into the key path to walk.
    ///
    /// Sequences pass through verbatim. Scalar expressions split on the
    /// separator into name-form keys, or stand whole when the separator
    /// is empty.
    fn key_path(&self, expression: PathExpression) -> Vec<Key> {
        match expression {
            PathExpression::Keys(keys) => keys,
            PathExpression::Scalar(key) if self.separator.is_empty() => vec![key],
            PathExpression::Scalar(key) => key
                .text()
                .split(self.separator.as_str())
                .map(Key::name)
                .collect(),
        }
    }

    fn traverse<'v>(&self, object: &'v Value, through: Vec<Key>) -> Option<&'v Value> {
        let mut pointer = Some(object);
        for key in through {
            pointer = pointer.and_then(|node| self.interface.get(node, &key));
        }
        pointer
    }

    fn build_up(
        &self,
        object: &mut Value,
        through: &[Key],
        value: Value,
    ) -> Result<(), ResolveError> {
        let (last, preceding) = match through.split_last() {
            Some(split) => split,
            None => return Err(ResolveError::EmptyPath),
        };

        let mut pointer = object;
        for key in preceding {
            if self.interface.get(pointer, key).is_none() {
                let child = self
                    .interface
                    .empty_child(pointer)
                    .ok_or_else(|| ResolveError::Unbuildable { key: key.clone() })?;
                self.interface.set(pointer, key, child);
            }
            pointer = self
                .interface
                .get_mut(pointer, key)
                .ok_or_else(|| ResolveError::NotWritable { key: key.clone() })?;
        }

        self.interface.set(pointer, last, value);
        Ok(())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::record::fixtures::{Demographics, Device, Employee, OpenRecord, Vault};
    use crate::table;

    fn string_keyed() -> Value {
        Value::Table(table! {
            "id" => 1,
            Key::symbol("demographics") => table! { "first" => "Matt" },
        })
    }

    fn symbol_keyed() -> Value {
        Value::Table(table! {
            Key::symbol("id") => 1,
            Key::symbol("demographics") => table! { Key::symbol("first") => "Matt" },
        })
    }

    fn employee() -> Value {
        Value::record(Employee {
            id: Some(Value::Integer(1)),
            demographics: Some(Value::record(Demographics {
                first: Some(Value::from("Matt")),
                last: None,
            })),
        })
    }

    #[test]
    fn test_resolves_top_level_members() {
        let resolver = Resolver::new();
        let node = string_keyed();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(1)));
        assert_eq!(
            resolver.get(&node, [Key::symbol("id")]),
            Some(&Value::Integer(1))
        );
    }

    #[test]
    fn test_walks_dotted_expressions() {
        let resolver = Resolver::new();
        let node = string_keyed();

        assert_eq!(
            resolver.get(&node, "demographics.first"),
            Some(&Value::from("Matt"))
        );
    }

    #[test]
    fn test_walks_through_symbol_keyed_tables() {
        let resolver = Resolver::new();
        let node = symbol_keyed();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(1)));
        assert_eq!(
            resolver.get(&node, "demographics.first"),
            Some(&Value::from("Matt"))
        );
    }

    #[test]
    fn test_symbol_expressions_split_like_strings() {
        let resolver = Resolver::new();
        let node = string_keyed();

        assert_eq!(
            resolver.get(&node, Key::symbol("demographics.first")),
            Some(&Value::from("Matt"))
        );
        assert_eq!(
            resolver.get(&node, Key::symbol("id")),
            Some(&Value::Integer(1))
        );
    }

    #[test]
    fn test_missing_paths_resolve_to_none() {
        let resolver = Resolver::new();
        let node = string_keyed();

        assert_eq!(resolver.get(&node, "demographics.age"), None);
        assert_eq!(resolver.get(&node, "a.b.c"), None);
    }

    #[test]
    fn test_absent_spines_short_circuit() {
        let resolver = Resolver::new();
        let node = Value::Table(table! {});

        assert_eq!(resolver.get(&node, "a.b.c"), None);
    }

    #[test]
    fn test_empty_sequences_resolve_to_the_object_itself() {
        let resolver = Resolver::new();
        let node = string_keyed();

        let resolved = resolver.get(&node, Vec::<Key>::new()).unwrap();
        assert!(std::ptr::eq(resolved, &node));
    }

    #[test]
    fn test_sequences_use_their_keys_verbatim() {
        let resolver = Resolver::new();
        let node = Value::Table(table! { "a.b" => 1 });

        assert_eq!(resolver.get(&node, "a.b"), None);
        assert_eq!(
            resolver.get(&node, [Key::name("a.b")]),
            Some(&Value::Integer(1))
        );
    }

    #[test]
    fn test_string_vectors_are_convenient_sequences() {
        let resolver = Resolver::new();
        let node = string_keyed();

        assert_eq!(
            resolver.get(&node, vec!["demographics", "first"]),
            Some(&Value::from("Matt"))
        );
    }

    #[test]
    fn test_empty_segments_are_keys_like_any_other() {
        let resolver = Resolver::new();
        let node = Value::Table(table! {
            "a" => table! { "" => table! { "b" => 1 } },
        });

        assert_eq!(resolver.get(&node, "a..b"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_reads_record_members() {
        let resolver = Resolver::new();
        let node = employee();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(1)));
        assert_eq!(resolver.get(&node, "missing"), None);
    }

    #[test]
    fn test_walks_nested_records() {
        let resolver = Resolver::new();
        let node = employee();

        assert_eq!(
            resolver.get(&node, "demographics.first"),
            Some(&Value::from("Matt"))
        );
        assert_eq!(resolver.get(&node, "demographics.last"), None);
    }

    #[test]
    fn test_get_mut_edits_members_in_place() {
        let resolver = Resolver::new();
        let mut node = string_keyed();

        *resolver.get_mut(&mut node, "demographics.first").unwrap() = Value::from("Nick");

        assert_eq!(
            resolver.get(&node, "demographics.first"),
            Some(&Value::from("Nick"))
        );
    }

    #[test]
    fn test_sets_existing_table_members() {
        let resolver = Resolver::new();
        let mut node = string_keyed();

        resolver.set(&mut node, "id", 999).unwrap();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(999)));
    }

    #[test]
    fn test_adds_members_to_nested_tables() {
        let resolver = Resolver::new();

        for mut node in [string_keyed(), symbol_keyed()] {
            resolver
                .set(&mut node, "demographics.last", "Smith")
                .unwrap();

            assert_eq!(
                resolver.get(&node, "demographics.last"),
                Some(&Value::from("Smith"))
            );
            assert_eq!(
                resolver.get(&node, "demographics.first"),
                Some(&Value::from("Matt"))
            );
        }
    }

    #[test]
    fn test_written_name_forms_shadow_symbol_entries() {
        let resolver = Resolver::new();
        let mut node = symbol_keyed();

        resolver.set(&mut node, "id", 999).unwrap();

        // The symbol entry survives underneath; the name form wins reads.
        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(999)));
        assert_eq!(
            node.as_table().unwrap().get(&Key::symbol("id")),
            Some(&Value::Integer(1))
        );
    }

    #[test]
    fn test_sets_existing_record_members() {
        let resolver = Resolver::new();
        let mut node = employee();

        resolver.set(&mut node, "id", 999).unwrap();
        resolver.set(&mut node, "demographics.last", "Ruggio").unwrap();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(999)));
        assert_eq!(
            resolver.get(&node, "demographics.last"),
            Some(&Value::from("Ruggio"))
        );
    }

    #[test]
    fn test_set_builds_missing_tables() {
        let resolver = Resolver::new();
        let mut node = string_keyed();

        resolver.set(&mut node, "statuses.active", true).unwrap();

        assert_eq!(
            resolver.get(&node, "statuses.active"),
            Some(&Value::Boolean(true))
        );
        assert_eq!(
            resolver.get(&node, "statuses"),
            Some(&Value::Table(table! { "active" => true }))
        );
    }

    #[test]
    fn test_set_builds_through_open_records() {
        let resolver = Resolver::new();
        let mut node = Value::record(OpenRecord::default());

        resolver
            .set(&mut node, "powers.super_power", "thunder")
            .unwrap();

        assert_eq!(
            resolver.get(&node, "powers.super_power"),
            Some(&Value::from("thunder"))
        );

        let mut expected = OpenRecord::default();
        expected
            .members
            .insert(Key::name("super_power"), Value::from("thunder"));
        assert_eq!(resolver.get(&node, "powers"), Some(&Value::record(expected)));
    }

    #[test]
    fn test_built_children_mirror_the_parent_shape() {
        let resolver = Resolver::new();

        let mut table_root = Value::Table(table! {});
        resolver.set(&mut table_root, "a.b", 1).unwrap();
        assert!(resolver.get(&table_root, "a").unwrap().is_table());

        let mut record_root = Value::record(OpenRecord::default());
        resolver.set(&mut record_root, "a.b", 1).unwrap();
        assert!(resolver.get(&record_root, "a").unwrap().is_record());
    }

    #[test]
    fn test_built_spines_deepen_as_far_as_needed() {
        let resolver = Resolver::new();
        let mut node = Value::Table(table! {});

        resolver.set(&mut node, "a.b.c.d", 1).unwrap();

        assert_eq!(resolver.get(&node, "a.b.c.d"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_transforming_setters_are_honored_while_building() {
        let resolver = Resolver::new();
        let mut node = Value::record(Vault::default());

        resolver.set(&mut node, "a.b", 1).unwrap();

        // The vault wrapped the constructed child, so the walk continued
        // inside the wrapper table rather than the child it grafted.
        assert_eq!(resolver.get(&node, "a.b"), Some(&Value::Integer(1)));
        assert!(resolver.get(&node, "a.sealed").unwrap().is_record());
    }

    #[test]
    fn test_empty_expressions_cannot_be_written() {
        let resolver = Resolver::new();
        let mut node = string_keyed();

        let error = resolver.set(&mut node, Vec::<Key>::new(), 1).unwrap_err();
        assert!(matches!(error, ResolveError::EmptyPath));
    }

    #[test]
    fn test_scalar_spines_cannot_be_built() {
        let resolver = Resolver::new();

        let mut root = Value::Integer(1);
        let error = resolver.set(&mut root, "a.b", 2).unwrap_err();
        assert!(matches!(error, ResolveError::Unbuildable { key } if key.text() == "a"));

        let mut node = string_keyed();
        let error = resolver.set(&mut node, "id.x.y", 2).unwrap_err();
        assert!(matches!(error, ResolveError::Unbuildable { key } if key.text() == "x"));
    }

    #[test]
    fn test_closed_records_cannot_grow_spines() {
        let resolver = Resolver::new();
        let mut node = employee();

        let error = resolver.set(&mut node, "statuses.active", true).unwrap_err();
        assert!(matches!(error, ResolveError::Unbuildable { key } if key.text() == "statuses"));
    }

    #[test]
    fn test_final_hops_on_leaves_are_silent_noops() {
        let resolver = Resolver::new();
        let mut node = string_keyed();

        resolver.set(&mut node, "id.x", 1).unwrap();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(1)));
        assert_eq!(resolver.get(&node, "id.x"), None);
    }

    #[test]
    fn test_read_only_members_cannot_be_written_through() {
        let resolver = Resolver::new();
        let mut node = Value::record(Device::new("X-100"));

        let error = resolver.set(&mut node, "serial.x", 1).unwrap_err();
        assert!(matches!(error, ResolveError::NotWritable { key } if key.text() == "serial"));
    }

    #[test]
    fn test_custom_separators_split_accordingly() {
        let resolver = Resolver::with_separator("$");
        let node = string_keyed();

        assert_eq!(
            resolver.get(&node, "demographics$first"),
            Some(&Value::from("Matt"))
        );
        assert_eq!(resolver.get(&node, "demographics.first"), None);
    }

    #[test]
    fn test_empty_separators_treat_expressions_whole() {
        let resolver = Resolver::with_separator("");
        let mut node = string_keyed();

        assert_eq!(resolver.get(&node, "id"), Some(&Value::Integer(1)));
        assert_eq!(resolver.get(&node, "demographics.first"), None);

        resolver.set(&mut node, "x.y", 1).unwrap();
        assert_eq!(
            node.as_table().unwrap().get(&Key::name("x.y")),
            Some(&Value::Integer(1))
        );

        // A symbol scalar keeps its form when nothing splits it.
        resolver.set(&mut node, Key::symbol("flag"), true).unwrap();
        assert_eq!(
            node.as_table().unwrap().get(&Key::symbol("flag")),
            Some(&Value::Boolean(true))
        );
    }

    #[test]
    fn test_direct_reads_and_writes_skip_parsing() {
        let resolver = Resolver::new();
        let mut node = Value::Table(table! { "a.b" => 1 });

        assert_eq!(resolver.get_direct(&node, "a.b"), Some(&Value::Integer(1)));

        resolver.set_direct(&mut node, Key::symbol("c.d"), 2);
        assert_eq!(
            node.as_table().unwrap().get(&Key::symbol("c.d")),
            Some(&Value::Integer(2))
        );
    }

    #[test]
    fn test_direct_mode_reaches_record_members() {
        let resolver = Resolver::new();
        let mut node = Value::record(Demographics::default());

        resolver.set_direct(&mut node, "first", "Matt");

        assert_eq!(
            resolver.get_direct(&node, "first"),
            Some(&Value::from("Matt"))
        );
    }

    #[test]
    fn test_resolvers_compare_by_separator() {
        assert_eq!(Resolver::new(), Resolver::default());
        assert_eq!(Resolver::new(), Resolver::with_separator("."));
        assert_ne!(Resolver::new(), Resolver::with_separator("$"));
        assert_eq!(Resolver::new().separator(), DEFAULT_SEPARATOR);
    }
}
