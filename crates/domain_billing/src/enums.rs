//! Provider enumerations
//!
//! Each enumeration is closed, but decodes unrecognized wire codes to its
//! `Unknown` variant instead of failing.

use serde::{Serialize, Serializer};
use std::fmt;

use core_kernel::WireEnum;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// Unrecognized or absent wire value
            #[default]
            Unknown,
        }

        impl WireEnum for $name {
            const UNKNOWN: Self = $name::Unknown;
            const VARIANTS: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn wire_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown => "unknown",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.wire_name())
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                <$name as WireEnum>::from_wire(raw)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.wire_name())
            }
        }
    };
}

wire_enum! {
    /// Billing period kind of a manifest
    PeriodType {
        /// A regular renewal period
        Recurring => "recurring",
    }
}

wire_enum! {
    /// What a line item charges for
    TransactionChargeKind {
        Baseline => "baseline",
        Initial => "initial",
        Trial => "trial",
        QuantityBasedComponent => "quantity_based_component",
        OnOffComponent => "on_off_component",
        MeteredComponent => "metered_component",
        PrepaidUsageComponent => "prepaid_usage_component",
        EventBasedComponent => "event_based_component",
        DelayCapture => "delay_capture",
        Coupon => "coupon",
        Tax => "tax",
    }
}

wire_enum! {
    /// Ledger effect of a line item
    TransactionType {
        Charge => "charge",
        Refund => "refund",
        Payment => "payment",
        Credit => "credit",
        PaymentAuthorization => "payment_authorization",
        Info => "info",
        Adjustment => "adjustment",
    }
}
