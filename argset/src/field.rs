use crate::error::ConversionError;

/// A type a flag value can be converted into
pub trait FlagValue: Sized {
    /// Name of the type, as shown in diagnostics
    const EXPECTED: &'static str;
    /// Construct type from string
    fn parse_value(val: &str) -> Result<Self, ConversionError>;
}

macro_rules! impl_on_number {
    ($($ty:ty),*) => {
        $(
            impl FlagValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn parse_value(val: &str) -> Result<Self, ConversionError> {
                    Ok(val.parse()?)
                }
            }
        )*
    };
}

// `str::parse` lets a leading `+` through for unsigned types, so signs are rejected up front
macro_rules! impl_on_unsigned {
    ($($ty:ty),*) => {
        $(
            impl FlagValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn parse_value(val: &str) -> Result<Self, ConversionError> {
                    if val.starts_with(['+', '-']) {
                        return Err(ConversionError::SignedUnsigned);
                    }
                    Ok(val.parse()?)
                }
            }
        )*
    };
}

// `str::parse` rounds overflowing floats to infinity instead of failing
macro_rules! impl_on_float {
    ($($ty:ty),*) => {
        $(
            impl FlagValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn parse_value(val: &str) -> Result<Self, ConversionError> {
                    let parsed: $ty = val.parse()?;
                    if parsed.is_infinite() && !spells_infinity(val) {
                        return Err(ConversionError::OutOfRange);
                    }
                    Ok(parsed)
                }
            }
        )*
    };
}

fn spells_infinity(val: &str) -> bool {
    let digits = val.strip_prefix(['+', '-']).unwrap_or(val);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

impl_on_number!(i8, i16, i32, i64, i128, isize);
impl_on_unsigned!(u8, u16, u32, u64, u128, usize);
impl_on_float!(f32, f64);
impl FlagValue for String {
    const EXPECTED: &'static str = "string";

    fn parse_value(val: &str) -> Result<Self, ConversionError> {
        Ok(val.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_rejects_signs() {
        assert_eq!(u64::parse_value("-5"), Err(ConversionError::SignedUnsigned));
        assert_eq!(u64::parse_value("+5"), Err(ConversionError::SignedUnsigned));
        assert_eq!(u64::parse_value("5"), Ok(5));
    }

    #[test]
    fn signed_accepts_signs() {
        assert_eq!(i64::parse_value("-5"), Ok(-5));
        assert_eq!(i64::parse_value("+5"), Ok(5));
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            u8::parse_value("256"),
            Err(ConversionError::ParseInt(_))
        ));
    }

    #[test]
    fn floats() {
        assert_eq!(f64::parse_value("2.5"), Ok(2.5));
        assert!(matches!(
            f64::parse_value("two"),
            Err(ConversionError::ParseFloat(_))
        ));
    }

    #[test]
    fn float_overflow() {
        assert_eq!(f64::parse_value("1e400"), Err(ConversionError::OutOfRange));
        assert_eq!(f64::parse_value("-1e400"), Err(ConversionError::OutOfRange));
        assert_eq!(f32::parse_value("1e39"), Err(ConversionError::OutOfRange));
        assert_eq!(f64::parse_value("-Infinity"), Ok(f64::NEG_INFINITY));
        assert_eq!(f64::parse_value("+inf"), Ok(f64::INFINITY));
    }
}
