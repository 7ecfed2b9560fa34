use crate::data::records::Record;
use crate::error::Result;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DexRegion {
    National,
    Xeno,
    Vintage,
}

impl DexRegion {
    pub fn prefix(self) -> &'static str {
        match self {
            DexRegion::National => "",
            DexRegion::Xeno => "X",
            DexRegion::Vintage => "V",
        }
    }

    /// Highest number of each dex.
    pub fn last(self) -> u32 {
        match self {
            DexRegion::National => 583,
            DexRegion::Xeno => 44,
            DexRegion::Vintage => 207,
        }
    }
}

/// A wiki dex number such as `025`, `X031` or `V004`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DexNumber {
    pub region: DexRegion,
    pub number: u32,
}

impl DexNumber {
    pub fn new(region: DexRegion, number: u32) -> Self {
        Self { region, number }
    }

    /// Converts the `RegionalNumbers` field (`national,xeno,vintage`, only
    /// one non-zero). The game skips Xeno number 30, while the wiki keeps
    /// X030 for Mewtwo X, so Xeno numbers above 29 shift down by one.
    pub fn from_regional_numbers(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        let national = parts.first().copied().unwrap_or("0");
        let xeno = parts.get(1).copied().unwrap_or("0");
        if national != "0" {
            return parse_number(national).map(|n| Self::new(DexRegion::National, n));
        }
        if xeno != "0" {
            let n = parse_number(xeno)?;
            let n = if n > 29 { n - 1 } else { n };
            return Some(Self::new(DexRegion::Xeno, n));
        }
        let vintage = parts.get(2).copied()?;
        parse_number(vintage).map(|n| Self::new(DexRegion::Vintage, n))
    }

    pub fn from_record(record: &Record) -> Result<Self> {
        let raw = record.require("RegionalNumbers")?;
        Self::from_regional_numbers(raw).ok_or_else(|| record.invalid("RegionalNumbers"))
    }

    /// Previous entry, wrapping to the end of the same dex.
    pub fn prev(self) -> Self {
        if self.number > 1 {
            Self::new(self.region, self.number - 1)
        } else {
            Self::new(self.region, self.region.last())
        }
    }

    /// Next entry, wrapping to 001 of the same dex.
    pub fn next(self) -> Self {
        if self.number < self.region.last() {
            Self::new(self.region, self.number + 1)
        } else {
            Self::new(self.region, 1)
        }
    }
}

impl fmt::Display for DexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.region.prefix(), self.number)
    }
}

/// Form suffixes such as `_1` never reach the wiki.
fn parse_number(raw: &str) -> Option<u32> {
    raw.split('_').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_dex() {
        assert_eq!(DexNumber::from_regional_numbers("25,0,0").unwrap().to_string(), "025");
        assert_eq!(DexNumber::from_regional_numbers("0,12,0").unwrap().to_string(), "X012");
        assert_eq!(DexNumber::from_regional_numbers("0,0,4").unwrap().to_string(), "V004");
        assert_eq!(DexNumber::from_regional_numbers("12_1,0,0").unwrap().to_string(), "012");
    }

    #[test]
    fn xeno_numbers_skip_thirty() {
        assert_eq!(DexNumber::from_regional_numbers("0,29,0").unwrap().to_string(), "X029");
        assert_eq!(DexNumber::from_regional_numbers("0,31,0").unwrap().to_string(), "X030");
    }

    #[test]
    fn prev_next_wrap_within_dex() {
        let first = DexNumber::new(DexRegion::Xeno, 1);
        assert_eq!(first.prev().to_string(), "X044");
        let last = DexNumber::new(DexRegion::Vintage, 207);
        assert_eq!(last.next().to_string(), "V001");
        assert_eq!(DexNumber::new(DexRegion::National, 25).next().to_string(), "026");
    }

    #[test]
    fn rejects_garbage() {
        assert!(DexNumber::from_regional_numbers("abc,0,0").is_none());
    }
}
