/// Declare a closed set of API string values.
///
/// Generates the enum with serde renames, `as_str`, an `ALL` list of every
/// variant in declaration order, and `Display`.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    api_enum! {
        pub enum Color {
            Red => "RED",
            LightBlue => "light-blue",
        }
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert_eq!(Color::ALL, &[Color::Red, Color::LightBlue]);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(Color::LightBlue.to_string(), "light-blue");
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "\"RED\"");
        assert_eq!(
            serde_json::from_str::<Color>("\"light-blue\"").unwrap(),
            Color::LightBlue
        );
        assert!(serde_json::from_str::<Color>("\"GREEN\"").is_err());
    }
}
