// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Declarative helpers for the repetitive parts of the model surface.

/// Declares a closed enumeration of wire strings.
///
/// Each variant maps to exactly one case-sensitive wire string. The
/// generated type serializes as that string and offers `as_str`, `values`,
/// `from_value`, `FromStr`, `Display` and `From<_> for String`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Every member, in declaration order.
            pub fn values() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }

            /// Looks up the member whose wire string equals `value`.
            ///
            /// Absent, empty and unknown strings are rejected.
            pub fn from_value(value: Option<&str>) -> $crate::Result<Self> {
                match value {
                    $( Some($wire) => Ok(Self::$variant), )+
                    other => {
                        tracing::trace!(
                            type_name = stringify!($name),
                            value = ?other,
                            "rejected enum value"
                        );
                        Err($crate::SsmError::InvalidEnumValue {
                            type_name: stringify!($name),
                            value: other.map(str::to_owned),
                        })
                    }
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::SsmError;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::from_value(Some(s))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}

/// Implements `Display` for models through [`crate::render`].
macro_rules! impl_display {
    ($($model:ident),+ $(,)?) => {
        $(
            impl std::fmt::Display for $model {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::render::render(self, f)
                }
            }
        )+
    };
}
