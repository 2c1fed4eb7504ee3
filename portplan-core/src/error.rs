//! Error types for the portplan core library.
//!
//! Infeasible networks are not errors: they surface as
//! [`crate::PlanOutcome::Infeasible`]. The variants below cover malformed
//! construction input and arithmetic that would otherwise wrap.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )?
                    => $code:literal as $kind:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Returns the stable machine-readable representation of this code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Returns the broad category this code belongs to.
            #[must_use]
            pub const fn kind(self) -> PlanErrorKind {
                match self {
                    $(Self::$CodeVariant => PlanErrorKind::$kind,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieves the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Returns the broad category of this error.
            #[must_use]
            pub const fn kind(&self) -> PlanErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Broad categories of [`PlanError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum PlanErrorKind {
    /// The caller supplied a value outside the accepted domain.
    InvalidArgument,
    /// A checked cost sum exceeded the `u64` range.
    Overflow,
    /// Storage for the network could not be allocated.
    ResourceExhausted,
}

/// Error type produced while constructing a network or planning over it.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PlanError {
    /// The network was declared with zero cities.
    #[error("a network must contain at least one city")]
    EmptyNetwork,
    /// A city id fell outside `1..=city_count`.
    #[error("city {city} is out of range; valid ids are 1..={city_count}")]
    CityOutOfRange {
        /// The offending city id as supplied.
        city: usize,
        /// Number of cities in the network.
        city_count: usize,
    },
    /// A disjoint set did not track exactly the cities of the network.
    #[error("disjoint set tracks {tracked} cities but the network has {city_count}")]
    SetSizeMismatch {
        /// Cities tracked by the disjoint set.
        tracked: usize,
        /// Number of cities in the network.
        city_count: usize,
    },
    /// A highway id did not name a highway of the network.
    #[error("highway {highway} is out of range; the network has {highway_count} highways")]
    UnknownHighway {
        /// The offending zero-based highway position.
        highway: usize,
        /// Number of highways in the network.
        highway_count: usize,
    },
    /// Per-city storage for the declared city count could not be reserved.
    #[error("cannot allocate storage for {city_count} cities")]
    NetworkTooLarge {
        /// Number of cities declared.
        city_count: usize,
    },
    /// Summing costs overflowed `u64`.
    #[error("cost overflow while accumulating {context}")]
    CostOverflow {
        /// Which sum overflowed.
        context: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`PlanError`] variants.
    enum PlanErrorCode for PlanError {
        /// The network was declared with zero cities.
        EmptyNetwork => EmptyNetwork => "PLAN_EMPTY_NETWORK" as InvalidArgument,
        /// A city id fell outside the network.
        CityOutOfRange => CityOutOfRange { .. } => "PLAN_CITY_OUT_OF_RANGE" as InvalidArgument,
        /// A disjoint set did not match the network size.
        SetSizeMismatch => SetSizeMismatch { .. } => "PLAN_SET_SIZE_MISMATCH" as InvalidArgument,
        /// A highway id did not name a highway of the network.
        UnknownHighway => UnknownHighway { .. } => "PLAN_UNKNOWN_HIGHWAY" as InvalidArgument,
        /// Per-city storage could not be reserved.
        NetworkTooLarge => NetworkTooLarge { .. } => "PLAN_NETWORK_TOO_LARGE" as ResourceExhausted,
        /// Summing costs overflowed `u64`.
        CostOverflow => CostOverflow { .. } => "PLAN_COST_OVERFLOW" as Overflow,
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PlanError>;
