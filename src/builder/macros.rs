//! Macros for declaring the closed guidance enums.

/// Declare a closed, `Copy` guidance enum with canonical wire names.
///
/// Every variant is paired with its canonical SCREAMING_SNAKE_CASE name,
/// which is used for `Display`, `FromStr` and serde. The generated type
/// also gets an `ALL` slice in declaration order and a compact `u8` index.
///
/// `unknown:` names the [`GuidanceError`](crate::GuidanceError) variant
/// returned when parsing an unrecognised name.
///
/// # Example
///
/// ```
/// use guidance_state::guidance_enum;
///
/// guidance_enum! {
///     pub enum Lamp {
///         Off => "OFF",
///         On => "ON",
///     }
///     unknown: UnknownState
/// }
///
/// assert_eq!(Lamp::ALL, &[Lamp::Off, Lamp::On]);
/// assert_eq!("on".parse::<Lamp>().unwrap(), Lamp::On);
/// assert_eq!(Lamp::Off.to_string(), "OFF");
/// ```
#[macro_export]
macro_rules! guidance_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        unknown: $unknown:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Canonical name of the variant.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Compact index of the variant, stable for the lifetime of the process.
            pub fn index(self) -> u8 {
                self as u8
            }

            /// Inverse of [`index`](Self::index).
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(usize::from(index)).copied()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::GuidanceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.name() == normalized)
                    .ok_or_else(|| $crate::GuidanceError::$unknown(s.to_string()))
            }
        }
    };
}
