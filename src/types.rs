use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Host platform family used for OS-conditional defaults and path adaptation.
///
/// Resolution never inspects the host directly; callers pass a `Platform`
/// (usually [`Platform::current`]) so both branches are testable anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "unix" | "linux" | "macos" | "darwin" => Ok(Platform::Unix),
            other => Err(format!(
                "invalid platform: {other} (expected \"windows\" or \"unix\")"
            )),
        }
    }
}

/// Grace period between interrupting the app and killing it.
///
/// Accepts either an integer number of nanoseconds (the historic format) or a
/// duration string such as `"500ms"` or `"2s"`. Serializes as nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KillDelay(pub Duration);

impl KillDelay {
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Serialize for KillDelay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = u64::try_from(self.0.as_nanos()).unwrap_or(u64::MAX);
        serializer.serialize_u64(nanos)
    }
}

impl<'de> Deserialize<'de> for KillDelay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KillDelayVisitor;

        impl Visitor<'_> for KillDelayVisitor {
            type Value = KillDelay;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("nanoseconds as an integer or a duration string like \"500ms\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<KillDelay, E> {
                Ok(KillDelay(Duration::from_nanos(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<KillDelay, E> {
                u64::try_from(v)
                    .map(|n| KillDelay(Duration::from_nanos(n)))
                    .map_err(|_| E::custom(format!("kill_delay must not be negative (got {v})")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<KillDelay, E> {
                parse_duration(v).map(KillDelay).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(KillDelayVisitor)
    }
}

/// Parse a duration string like `"250ms"`, `"1.5s"` or `"1h30m"`.
///
/// A bare integer is read as nanoseconds. Otherwise the string is a sequence
/// of decimal numbers, each with an optional fraction and a unit (`ns`, `us`
/// or `µs`, `ms`, `s`, `m`, `h`). The total must fit in `u64` nanoseconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse::<u64>()
            .map(Duration::from_nanos)
            .map_err(|e| format!("invalid duration number '{s}': {e}"));
    }

    let is_number = |c: char| c.is_ascii_digit() || c == '.';
    let mut rest = s;
    let mut total: u128 = 0;

    while !rest.is_empty() {
        let num_len = rest.find(|c: char| !is_number(c)).unwrap_or(rest.len());
        let (num_part, tail) = rest.split_at(num_len);
        if num_part.is_empty() || num_part == "." {
            return Err(format!("duration '{s}' must start with a number"));
        }

        let unit_len = tail.find(is_number).unwrap_or(tail.len());
        let (unit_part, tail) = tail.split_at(unit_len);
        let unit = unit_part.to_lowercase();
        let scale = unit_nanos(&unit).ok_or_else(|| {
            if unit.is_empty() {
                format!("missing unit after '{num_part}' in duration '{s}'")
            } else {
                format!("unsupported duration unit '{unit}'; expected ns, us, ms, s, m, or h")
            }
        })?;

        total = scaled_nanos(num_part, scale)
            .and_then(|n| total.checked_add(n))
            .ok_or_else(|| format!("duration '{s}' is out of range"))?;
        rest = tail;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| format!("duration '{s}' is out of range"))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}

/// `num` (digits with an optional fraction) times `scale`, truncated to whole
/// nanoseconds. `None` on a malformed number or overflow.
fn scaled_nanos(num: &str, scale: u128) -> Option<u128> {
    let (int_part, frac_part) = num.split_once('.').unwrap_or((num, ""));
    if frac_part.contains('.') {
        return None;
    }

    let whole = if int_part.is_empty() {
        0
    } else {
        int_part.parse::<u128>().ok()?.checked_mul(scale)?
    };

    // Digits past nanosecond precision of the largest unit cannot matter.
    let frac_digits = &frac_part[..frac_part.len().min(18)];
    if frac_digits.is_empty() {
        return Some(whole);
    }
    let frac = frac_digits.parse::<u128>().ok()?;
    let denom = 10u128.pow(frac_digits.len() as u32);
    whole.checked_add(frac * scale / denom)
}
