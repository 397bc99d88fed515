//! printf-style formatting of a block's text
//!
//! A block's `format` is a printf spec with the block's text as its single
//! argument: `%4s` right-justifies in four columns, `%06d` zero-pads an
//! integer, `%.2f` rounds. Supported flags are `-`, `+`, space, `0` and `#`;
//! supported conversions are `s d i u f F e E x X o b c` plus `%%`.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// Failures raised while applying a format spec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("malformed format spec '{spec}'")]
    Malformed { spec: String },

    #[error("unsupported conversion '%{conversion}' in '{spec}'")]
    Unsupported { spec: String, conversion: char },

    #[error("'{argument}' is not a valid argument for '%{conversion}'")]
    InvalidArgument { argument: String, conversion: char },

    #[error("format spec '{spec}' expects more than one argument")]
    TooFewArguments { spec: String },
}

/// Formats a block's text according to its `format` spec
///
/// Implementations must be shareable across worker tasks.
pub trait Formatter: Send + Sync {
    fn format(&self, spec: &str, text: &str) -> Result<String, FormatError>;
}

/// Built-in printf implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct Printf;

impl Formatter for Printf {
    fn format(&self, spec: &str, text: &str) -> Result<String, FormatError> {
        sprintf(spec, text)
    }
}

#[derive(Debug, Default)]
struct Directive {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Apply `spec` to a single argument
pub fn sprintf(spec: &str, argument: &str) -> Result<String, FormatError> {
    let mut output = String::with_capacity(spec.len() + argument.len());
    let mut chars = spec.chars().peekable();
    let mut consumed = false;

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }
        if chars.next_if_eq(&'%').is_some() {
            output.push('%');
            continue;
        }

        let directive = parse_directive(&mut chars).ok_or_else(|| FormatError::Malformed {
            spec: spec.to_string(),
        })?;
        if consumed {
            return Err(FormatError::TooFewArguments {
                spec: spec.to_string(),
            });
        }
        consumed = true;
        output.push_str(&convert(spec, &directive, argument)?);
    }

    Ok(output)
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Option<Directive> {
    let mut directive = Directive::default();

    while let Some(flag) = chars.next_if(|c| matches!(*c, '-' | '+' | ' ' | '0' | '#')) {
        match flag {
            '-' => directive.left = true,
            '+' => directive.plus = true,
            ' ' => directive.space = true,
            '0' => directive.zero = true,
            _ => directive.alternate = true,
        }
    }

    directive.width = parse_number(chars);
    if chars.next_if_eq(&'.').is_some() {
        directive.precision = Some(parse_number(chars).unwrap_or(0));
    }

    directive.conversion = chars.next()?;
    Some(directive)
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        let value = digit.to_digit(10).unwrap_or(0) as usize;
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(value));
    }
    number
}

fn invalid(directive: &Directive, argument: &str) -> FormatError {
    FormatError::InvalidArgument {
        argument: argument.to_string(),
        conversion: directive.conversion,
    }
}

fn parse_integer(directive: &Directive, argument: &str) -> Result<i64, FormatError> {
    let trimmed = argument.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
        _ => Err(invalid(directive, argument)),
    }
}

fn parse_float(directive: &Directive, argument: &str) -> Result<f64, FormatError> {
    argument
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(directive, argument))
}

fn convert(spec: &str, directive: &Directive, argument: &str) -> Result<String, FormatError> {
    match directive.conversion {
        's' => {
            let text: String = match directive.precision {
                Some(precision) => argument.chars().take(precision).collect(),
                None => argument.to_string(),
            };
            Ok(pad(directive, "", &text, false))
        }
        'd' | 'i' => {
            let value = parse_integer(directive, argument)?;
            let mut digits = value.unsigned_abs().to_string();
            if let Some(precision) = directive.precision {
                digits = format!("{:0>width$}", digits, width = precision);
            }
            let sign = sign(directive, value < 0);
            Ok(pad(directive, sign, &digits, directive.precision.is_none()))
        }
        'u' | 'x' | 'X' | 'o' | 'b' => {
            let value = parse_integer(directive, argument)? as u32;
            let (prefix, digits) = match directive.conversion {
                'u' => ("", value.to_string()),
                'x' => ("0x", format!("{:x}", value)),
                'X' => ("0X", format!("{:X}", value)),
                'o' => ("0", format!("{:o}", value)),
                _ => ("0b", format!("{:b}", value)),
            };
            let prefix = if directive.alternate && value != 0 {
                prefix
            } else {
                ""
            };
            Ok(pad(directive, prefix, &digits, true))
        }
        'f' | 'F' => {
            let value = parse_float(directive, argument)?;
            let digits = match directive.precision {
                Some(precision) => format!("{:.*}", precision, value.abs()),
                None => value.abs().to_string(),
            };
            let sign = sign(directive, value.is_sign_negative() && value != 0.0);
            Ok(pad(directive, sign, &digits, value.is_finite()))
        }
        'e' | 'E' => {
            let value = parse_float(directive, argument)?;
            let mantissa = match directive.precision {
                Some(precision) => format!("{:.*e}", precision, value.abs()),
                None => format!("{:e}", value.abs()),
            };
            let mut digits = signed_exponent(&mantissa);
            if directive.conversion == 'E' {
                digits = digits.to_uppercase();
            }
            let sign = sign(directive, value.is_sign_negative() && value != 0.0);
            Ok(pad(directive, sign, &digits, value.is_finite()))
        }
        'c' => {
            let code = parse_integer(directive, argument)?;
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| invalid(directive, argument))?;
            Ok(pad(directive, "", &c.to_string(), false))
        }
        conversion => Err(FormatError::Unsupported {
            spec: spec.to_string(),
            conversion,
        }),
    }
}

fn sign(directive: &Directive, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if directive.plus {
        "+"
    } else if directive.space {
        " "
    } else {
        ""
    }
}

/// `1.5e2` → `1.5e+2`
fn signed_exponent(mantissa: &str) -> String {
    match mantissa.split_once('e') {
        Some((base, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", base, exponent),
        _ => mantissa.to_string(),
    }
}

/// Justify `prefix + body` to the directive's width
///
/// Zero padding goes between the prefix and the body and only applies to
/// numeric conversions.
fn pad(directive: &Directive, prefix: &str, body: &str, numeric: bool) -> String {
    let len = prefix.chars().count() + body.chars().count();
    let missing = directive.width.unwrap_or(0).saturating_sub(len);
    let fill = |c: char| std::iter::repeat_n(c, missing).collect::<String>();

    if missing == 0 {
        format!("{}{}", prefix, body)
    } else if directive.left {
        format!("{}{}{}", prefix, body, fill(' '))
    } else if directive.zero && numeric {
        format!("{}{}{}", prefix, fill('0'), body)
    } else {
        format!("{}{}{}", fill(' '), prefix, body)
    }
}
