//! Declarative generators for the clause catalogue.
//!
//! Every clause is a thin newtype over [`Object`](crate::object::Object) and
//! every setter is a single call into one of the three mutators in
//! [`mutate`](crate::mutate). These macros stamp out that boilerplate so each
//! clause module only lists its keys.

/// Declare a clause newtype over `Object`.
///
/// The generated type serializes exactly like the wrapped document and
/// converts into both `Object` and `serde_json::Value`.
macro_rules! clause {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(transparent)]
        $vis struct $name($crate::object::Object);

        impl $name {
            /// Borrow the underlying document.
            pub fn as_object(&self) -> &$crate::object::Object {
                &self.0
            }

            /// Consume the builder and return the underlying document.
            pub fn into_object(self) -> $crate::object::Object {
                self.0
            }
        }

        impl From<$name> for $crate::object::Object {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for ::serde_json::Value {
            fn from(value: $name) -> Self {
                value.0.into()
            }
        }
    };
}

/// Generate chained setters that write one key through a mutator.
///
/// - `field "k"`: static wrapper key, writes into `root["k"]`.
/// - `first_child "k"`: dynamic field under a static key, writes into the
///   first object inside `root["k"]`.
/// - `first_object`: no wrapper, writes into the first object of the root.
macro_rules! setters {
    ($ty:ident, field $parent:literal {
        $( $(#[$meta:meta])* fn $name:ident($arg:ty) => $key:literal; )*
    }) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub fn $name(mut self, value: $arg) -> Self {
                    $crate::mutate::put_in_field(&mut self.0, $parent, $key, value);
                    self
                }
            )*
        }
    };
    ($ty:ident, first_child $parent:literal {
        $( $(#[$meta:meta])* fn $name:ident($arg:ty) => $key:literal; )*
    }) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub fn $name(mut self, value: $arg) -> Self {
                    $crate::mutate::put_in_first_child_field(&mut self.0, $parent, $key, value);
                    self
                }
            )*
        }
    };
    ($ty:ident, first_object {
        $( $(#[$meta:meta])* fn $name:ident($arg:ty) => $key:literal; )*
    }) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub fn $name(mut self, value: $arg) -> Self {
                    $crate::mutate::put_in_first_object_field(&mut self.0, $key, value);
                    self
                }
            )*
        }
    };
}

/// Implement [`IntoClause`](crate::object::IntoClause) for clause types whose
/// document is already the query clause itself.
macro_rules! impl_into_clause {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::object::IntoClause for $name {
                fn into_clause(self) -> Option<::serde_json::Value> {
                    Some(self.into())
                }
            }
        )*
    };
}

/// Collect clauses of different types into one list for a combinator.
///
/// ```
/// use es_query_builder::clauses;
/// use es_query_builder::query::{BoolQuery, ExistsQuery, TermQuery};
///
/// let query = BoolQuery::new().filter(clauses![
///     TermQuery::new("status", "active"),
///     ExistsQuery::new_if("deleted_at", false),
/// ]);
/// assert_eq!(query.as_object()["filter"].as_array().unwrap().len(), 1);
/// ```
#[macro_export]
macro_rules! clauses {
    ($($clause:expr),* $(,)?) => {
        ::std::vec![$($crate::object::IntoClause::into_clause($clause)),*]
    };
}
