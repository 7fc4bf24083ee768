//! Repetition counts
//!
//! A repeat count is `n`, `*`, `n*`, `*m` or `n*m` (RFC 5234 section 3.6).
//! Leading zeros are ignored, so `0*` is the same as `*`. The count is first
//! reduced to [`Bounds`] and then rendered with the narrowest PEGTL rule:
//!
//! ```text
//! 3x      rep< 3, x >
//! *x      star< x >
//! 1*x     plus< x >
//! 2*x     rep_min< 2, x >
//! *1x     opt< x >
//! *4x     rep_max< 4, x >
//! 2*2x    rep< 2, x >
//! 1*3x    seq< x, rep_opt< 2, x > >
//! 2*3x    seq< rep< 2, x >, opt< x > >
//! ```

use crate::abnf::resolve::SemanticErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// `n`
    Exactly(u64),
    /// `*`
    Any,
    /// `n*`
    AtLeast(u64),
    /// `*m`
    AtMost(u64),
    /// `n*m`
    Between(u64, u64),
}

/// Reduce a repeat count to its bounds.
pub fn parse_bounds(count: &str) -> Result<Bounds, SemanticErrorKind> {
    let Some((min, max)) = count.split_once('*') else {
        let n = strip_zeros(count);
        if n.is_empty() {
            return Err(SemanticErrorKind::ZeroRepetition);
        }
        return Ok(Bounds::Exactly(number(n)?));
    };

    let (min, max_text) = (strip_zeros(min), max);
    let max = strip_zeros(max_text);
    if !max_text.is_empty() && max.is_empty() {
        return Err(SemanticErrorKind::ZeroMaximum);
    }

    match (min.is_empty(), max.is_empty()) {
        (true, true) => Ok(Bounds::Any),
        (false, true) => Ok(Bounds::AtLeast(number(min)?)),
        (true, false) => Ok(Bounds::AtMost(number(max)?)),
        (false, false) => {
            let (n, m) = (number(min)?, number(max)?);
            if n > m {
                return Err(SemanticErrorKind::MinimumAboveMaximum);
            }
            Ok(Bounds::Between(n, m))
        }
    }
}

/// Render `content` repeated within `bounds`.
pub fn render(bounds: Bounds, content: &str, prefix: &str) -> String {
    match bounds {
        Bounds::Exactly(n) => format!("{}rep< {}, {} >", prefix, n, content),
        Bounds::Any => format!("{}star< {} >", prefix, content),
        Bounds::AtLeast(1) => format!("{}plus< {} >", prefix, content),
        Bounds::AtLeast(n) => format!("{}rep_min< {}, {} >", prefix, n, content),
        Bounds::AtMost(1) => format!("{}opt< {} >", prefix, content),
        Bounds::AtMost(m) => format!("{}rep_max< {}, {} >", prefix, m, content),
        Bounds::Between(n, m) => {
            let lower = if n == 1 {
                content.to_string()
            } else {
                format!("{}rep< {}, {} >", prefix, n, content)
            };
            if n == m {
                return lower;
            }
            let upper = if m - n == 1 {
                format!("{}opt< {} >", prefix, content)
            } else {
                format!("{}rep_opt< {}, {} >", prefix, m - n, content)
            };
            format!("{}seq< {}, {} >", prefix, lower, upper)
        }
    }
}

fn strip_zeros(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

fn number(digits: &str) -> Result<u64, SemanticErrorKind> {
    digits
        .parse()
        .map_err(|_| SemanticErrorKind::NumericOutOfRange)
}
