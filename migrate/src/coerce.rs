//! Loose coercions for legacy values.
//!
//! Legacy settings were written by hand and by older releases, so nothing about their types can
//! be trusted. Instead of rejecting odd values, rules coerce them with the same truthiness the
//! settings were originally read with.

use earcon_common::types::AnnouncementPolicy;
use serde_json::Value;

/// Whether `value` counts as set: `null`, `false`, `0`, `NaN` and `""` do not, everything else
/// (including empty arrays and objects) does.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// `a || b || c`: the first truthy operand, otherwise the last operand (which may itself be a
/// falsy but present value like `false`).
///
/// A falsy value in any position but the last is skipped, so a stored `0` or `false` loses to a
/// value from a lower priority source.
pub fn or_chain<'a, I>(operands: I) -> Option<Value>
where
	I: IntoIterator<Item = Option<&'a Value>>,
{
	let mut last = None;
	for operand in operands {
		if operand.is_some_and(is_truthy) {
			return operand.cloned();
		}
		last = operand;
	}
	last.cloned()
}

/// `a ?? b ?? c`: the first operand that is present and not `null`.
pub fn nullish_coalesce<'a, I>(operands: I) -> Option<Value>
where
	I: IntoIterator<Item = Option<&'a Value>>,
{
	operands.into_iter().flatten().find(|value| !value.is_null()).cloned()
}

/// Announcements used to be booleans; they are now `"auto"` or `"off"`.
/// Strings are kept as they are, anything else maps through [`is_truthy`] to an
/// [`AnnouncementPolicy`].
#[must_use]
pub fn normalize_announcement(value: Value) -> Value {
	match value {
		Value::String(_) => value,
		other => Value::from(AnnouncementPolicy::from(is_truthy(&other)).to_string()),
	}
}
