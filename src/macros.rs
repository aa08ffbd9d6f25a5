//! Declarative helpers for the closed identifier namespaces.

/// Declare a closed identifier enum with an `Invalid` sentinel, display
/// names, and a lazily built reverse lookup.
///
/// Every generated enum gets `ALL` (valid ids in declaration order),
/// `name()`, `is_valid()`, `from_name()`, and `Display`.
macro_rules! id_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            /// Absent / not decoded.
            #[default]
            Invalid,
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Every valid identifier, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Display name; the invalid sentinel maps to `""`.
            pub const fn name(self) -> &'static str {
                match self {
                    $name::Invalid => "",
                    $( $name::$variant => $text, )*
                }
            }

            /// True for every id except the sentinel.
            pub const fn is_valid(self) -> bool {
                !matches!(self, $name::Invalid)
            }

            /// Reverse lookup by display name.
            pub fn from_name(name: &str) -> Option<Self> {
                static BY_NAME: once_cell::sync::Lazy<
                    std::collections::HashMap<&'static str, $name>,
                > = once_cell::sync::Lazy::new(|| {
                    $name::ALL.iter().map(|id| (id.name(), *id)).collect()
                });
                BY_NAME.get(name).copied()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
