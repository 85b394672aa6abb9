//! Domain entities - the resources the tracker API serves.
//!
//! Wire format is the API's snake_case JSON. Columns the API may leave empty
//! are `Option`. Categorical columns are stored as free text by the API, so
//! entities keep the raw string and expose a typed accessor.

/// Declares a categorical enum with its wire names, `ALL`, `as_str`,
/// case-insensitive `FromStr` and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| $crate::error::DomainError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod de;
mod investor;
mod job_posting;
mod news_article;
mod startup;
mod user;

pub use investor::{Investor, InvestorType};
pub use job_posting::{JobDepartment, JobPosting};
pub use news_article::NewsArticle;
pub use startup::{FundingStage, Startup};
pub use user::{User, UserRole};
