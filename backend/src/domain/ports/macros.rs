//! Declares port error enums whose variants each carry a detail message.
//!
//! Every variant gets a snake_case constructor taking `impl Into<String>`,
//! and the enum gets a `message()` accessor. Display renders as
//! `"<summary>: <message>"`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $summary:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {message}", $summary)]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+

            /// Detail text carried by the variant.
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } )|+ => message,
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum LedgerPortError {
            Offline => "ledger offline",
            RejectedWrite => "ledger rejected the write",
        }
    }

    #[rstest]
    fn constructors_are_snake_case() {
        assert_eq!(
            LedgerPortError::rejected_write("duplicate key"),
            LedgerPortError::RejectedWrite {
                message: "duplicate key".to_owned()
            }
        );
    }

    #[rstest]
    #[case(LedgerPortError::offline("no route"), "ledger offline: no route")]
    #[case(
        LedgerPortError::rejected_write("duplicate key"),
        "ledger rejected the write: duplicate key"
    )]
    fn display_prefixes_the_summary(#[case] error: LedgerPortError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn message_returns_the_detail() {
        assert_eq!(LedgerPortError::offline("no route").message(), "no route");
    }
}
