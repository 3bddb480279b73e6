//! String-constant sets accepted by clause setters.
//!
//! Each enum serializes to the exact token the search engine expects and
//! parses back from it.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{QueryBuilderError, Result};

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident {
        $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The wire token for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = QueryBuilderError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)*
                    other => Err(QueryBuilderError::invalid_argument(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::String(value.as_str().to_owned())
            }
        }
    };
}

string_enum! {
    /// Boolean logic used to combine analyzed terms.
    Operator {
        Or => "or",
        And => "and",
    }
}

string_enum! {
    /// What a match query does when the analyzer removes every token.
    ZeroTermsQuery {
        All => "all",
        None => "none",
    }
}

string_enum! {
    /// How a nested query combines scores of matching child documents.
    ScoreMode {
        Avg => "avg",
        Max => "max",
        Min => "min",
        None => "none",
        Sum => "sum",
    }
}

string_enum! {
    /// Sort direction.
    Order {
        Asc => "asc",
        Desc => "desc",
        /// Let the engine pick the direction.
        Default => "_default",
    }
}

string_enum! {
    /// How multi-valued fields are reduced to a single sort value.
    SortMode {
        Min => "min",
        Max => "max",
        Sum => "sum",
        Avg => "avg",
        Median => "median",
        Default => "_default",
    }
}

string_enum! {
    /// Execution strategy of multi_match and query_string.
    TextQueryType {
        BestFields => "best_fields",
        MostFields => "most_fields",
        CrossFields => "cross_fields",
        Phrase => "phrase",
        PhrasePrefix => "phrase_prefix",
        BoolPrefix => "bool_prefix",
    }
}

string_enum! {
    /// How a range query matches range-typed fields.
    RangeRelation {
        Within => "within",
        Contains => "contains",
        Intersects => "intersects",
    }
}

string_enum! {
    /// Script language.
    ScriptLanguage {
        Painless => "painless",
        Expression => "expression",
        Mustache => "mustache",
        Java => "java",
    }
}

string_enum! {
    /// Order in which a terms aggregation builds its sub-aggregation tree.
    CollectMode {
        BreadthFirst => "breadth_first",
        DepthFirst => "depth_first",
    }
}

string_enum! {
    /// Terms aggregation execution hint.
    ExecutionHint {
        Map => "map",
        GlobalOrdinals => "global_ordinals",
        FieldData => "fielddata",
    }
}
