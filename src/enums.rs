//! Wire enumerations.
//!
//! Every enum in the API surface is a closed set of named values with a fixed
//! string encoding. Single-valued enums are plain Rust enums; flag enums are
//! `bitflags` sets whose members are comma-joined on the wire. Both are
//! declared through the `wire_enum!` and `wire_flags!` macros.
//!
//! Parsing never fails hard: a string the SDK does not know yet yields
//! `None` so that values added to the service later are tolerated.

use std::fmt;

/// Common contract of every generated enum.
pub trait WireEnum: Sized + Copy + fmt::Display + 'static {
    /// `true` for OR-combinable flag sets.
    const MULTI_VALUE: bool;

    /// Reverse lookup of the wire string. Unknown input is `None`.
    fn parse(value: &str) -> Option<Self>;

    /// Whether values of this type are bit-flag combinations.
    fn is_multi_value() -> bool {
        Self::MULTI_VALUE
    }

    /// Canonical wire string.
    fn to_wire(&self) -> String {
        self.to_string()
    }
}

/// Map a sequence of enum values to their wire strings, keeping order and length.
pub fn serialize_values<E: WireEnum>(values: &[E]) -> Vec<String> {
    values.iter().map(WireEnum::to_wire).collect()
}

/// Parse a flag string: every comma-separated token must be known.
///
/// One unrecognized token discards the whole value.
pub(crate) fn parse_flag_tokens<F>(value: &str, names: &[(F, &'static str)]) -> Option<F>
where
    F: bitflags::Flags + Copy,
{
    let mut result = F::empty();
    // The empty set renders as "", so it must read back as the empty set
    if value.is_empty() {
        return Some(result);
    }
    for token in value.split(',') {
        let (flag, _) = names.iter().find(|(_, name)| *name == token)?;
        result.insert(*flag);
    }
    Some(result)
}

/// Join the wire names of every member contained in `value`, in declaration order.
pub(crate) fn join_flag_names<F>(value: F, names: &[(F, &'static str)]) -> String
where
    F: bitflags::Flags + Copy,
{
    names
        .iter()
        .filter(|(flag, _)| value.contains(*flag))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    bitflags::bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Days: u32 {
            const MON = 1;
            const TUE = 2;
            const WED = 4;
        }
    }

    const NAMES: &[(Days, &str)] = &[(Days::MON, "mon"), (Days::TUE, "tue"), (Days::WED, "wed")];

    #[test]
    fn join_follows_declaration_order() {
        let days = Days::WED | Days::MON;
        assert_eq!(join_flag_names(days, NAMES), "mon,wed");
        assert_eq!(join_flag_names(Days::empty(), NAMES), "");
    }

    #[test]
    fn bad_token_discards_everything() {
        assert_eq!(parse_flag_tokens("tue,mon", NAMES), Some(Days::MON | Days::TUE));
        assert_eq!(parse_flag_tokens("tue,fri", NAMES), None);
        assert_eq!(parse_flag_tokens("", NAMES), Some(Days::empty()));
        assert_eq!(parse_flag_tokens(",", NAMES), None);
        assert_eq!(parse_flag_tokens("mon, tue", NAMES), None);
    }
}
