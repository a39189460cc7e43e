//! Project (portfolio entry) domain types.
//!
//! Every categorical attribute of a project is a closed enumeration matching
//! the values the public site filters on. They are stored as text columns
//! with CHECK constraints; the API boundary rejects anything outside the
//! declared sets.

use crate::error::CoreError;

/// Declare a text-backed enumeration with exact wire strings.
///
/// Generates serde renames, `as_str`, `FromStr`/`TryFrom<String>` (returning
/// [`CoreError::Validation`] for unknown values), and `Display`.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "'{}' is not a valid {}",
                        other,
                        stringify!($name),
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum! {
    /// Room or scope category shown on the portfolio grid.
    Category {
        LivingRoom => "Living Room",
        Bedroom => "Bedroom",
        Kitchen => "Kitchen",
        FullHome => "Full Home",
    }
}

text_enum! {
    /// Interior style of the finished work.
    Style {
        Contemporary => "Contemporary",
        Modern => "Modern",
        Traditional => "Traditional",
        Minimalist => "Minimalist",
    }
}

text_enum! {
    /// Floor-plan layout (kitchen layouts included).
    Layout {
        Parallel => "Parallel",
        LShaped => "L-Shaped",
        UShaped => "U-Shaped",
        Island => "Island",
        Straight => "Straight",
    }
}

text_enum! {
    /// Budget bucket in lakhs, matching the site's pricing filter.
    Pricing {
        From10To20 => "10-20",
        From20To30 => "20-30",
        Above30 => "30+",
        Above40 => "40+",
        Above50 => "50+",
    }
}

text_enum! {
    /// Bedroom-hall-kitchen configuration of the property.
    Bhk {
        One => "1-BHK",
        Two => "2-BHK",
        Three => "3-BHK",
        Four => "4-BHK",
        Five => "5-BHK",
    }
}

text_enum! {
    /// Kind of property the project was executed in.
    PropertyType {
        Apartment => "Apartment",
        Villa => "Villa",
        IndependentHouse => "Independent House",
        Duplex => "Duplex",
    }
}

text_enum! {
    /// Built-up area bucket.
    SizeBucket {
        UpTo1000 => "500 to 1000 sq ft",
        UpTo2500 => "1000 to 2500 sq ft",
        UpTo5000 => "2500 to 5000 sq ft",
        Above5000 => "5000+ sq ft",
    }
}
