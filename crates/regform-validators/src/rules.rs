//! Static rule sets
//!
//! One [`RuleSet`] per [`FieldKey`], fixed for the process lifetime. The
//! order of a rule set's `checks` is its priority order: validation stops at
//! the first failing check and reports that check's message.

use crate::field::FieldKey;
use regex::Regex;
use std::sync::LazyLock;

/// Characters of which a password must contain at least one.
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

// local@domain.tld: three non-space blocks, no extra '@'.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// A single failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
	Required,
	TooShort,
	InvalidFormat,
	MissingUppercase,
	MissingLowercase,
	MissingDigit,
	MissingSpecial,
	Mismatch,
}

/// Constraints and messages of one field.
#[derive(Debug)]
pub struct RuleSet {
	pub key: FieldKey,
	/// Whether surrounding whitespace is stripped before checking.
	pub trim: bool,
	/// Minimum length in UTF-16 code units, the unit of a DOM value's `length`.
	pub min_length: Option<usize>,
	pub pattern: Option<&'static LazyLock<Regex>>,
	/// Field whose current value this field is compared against.
	pub depends_on: Option<FieldKey>,
	checks: &'static [(Failure, &'static str)],
}

static RULES: [RuleSet; 5] = [
	RuleSet {
		key: FieldKey::Name,
		trim: true,
		min_length: Some(3),
		pattern: None,
		depends_on: None,
		checks: &[
			(Failure::Required, "Name is required"),
			(Failure::TooShort, "Name must be at least 3 characters long"),
		],
	},
	RuleSet {
		key: FieldKey::Email,
		trim: true,
		min_length: None,
		pattern: Some(&EMAIL_REGEX),
		depends_on: None,
		checks: &[
			(Failure::Required, "Email is required"),
			(Failure::InvalidFormat, "Please enter a valid email address"),
		],
	},
	RuleSet {
		key: FieldKey::Password,
		trim: false,
		min_length: Some(8),
		pattern: None,
		depends_on: None,
		checks: &[
			(Failure::Required, "Password is required"),
			(
				Failure::TooShort,
				"Password must be at least 8 characters long",
			),
			(
				Failure::MissingUppercase,
				"Password must contain at least one uppercase letter",
			),
			(
				Failure::MissingLowercase,
				"Password must contain at least one lowercase letter",
			),
			(
				Failure::MissingDigit,
				"Password must contain at least one number",
			),
			(
				Failure::MissingSpecial,
				"Password must contain at least one special character (@$!%*?&)",
			),
		],
	},
	RuleSet {
		key: FieldKey::ConfirmPassword,
		trim: false,
		min_length: None,
		pattern: None,
		depends_on: Some(FieldKey::Password),
		checks: &[
			(Failure::Required, "Please confirm your password"),
			(Failure::Mismatch, "Passwords do not match"),
		],
	},
	RuleSet {
		key: FieldKey::Message,
		trim: true,
		min_length: Some(10),
		pattern: None,
		depends_on: None,
		checks: &[
			(Failure::Required, "Message is required"),
			(
				Failure::TooShort,
				"Message must be at least 10 characters long",
			),
		],
	},
];

impl RuleSet {
	/// The rule set of `key`.
	///
	/// # Examples
	///
	/// ```
	/// use regform_validators::{FieldKey, RuleSet};
	///
	/// let rules = RuleSet::for_field(FieldKey::Message);
	/// assert_eq!(rules.min_length, Some(10));
	/// assert!(rules.trim);
	/// ```
	pub fn for_field(key: FieldKey) -> &'static RuleSet {
		&RULES[key.index()]
	}

	/// Checks in priority order.
	pub fn checks(&self) -> impl Iterator<Item = Failure> + '_ {
		self.checks.iter().map(|(failure, _)| *failure)
	}

	/// User-facing message for `failure`, if this field performs that check.
	pub fn message(&self, failure: Failure) -> Option<&'static str> {
		self.checks
			.iter()
			.find(|(candidate, _)| *candidate == failure)
			.map(|(_, message)| *message)
	}

	/// The portion of `raw` the checks look at.
	pub fn prepare<'a>(&self, raw: &'a str) -> &'a str {
		if self.trim {
			raw.trim_matches(is_trimmed_space)
		} else {
			raw
		}
	}
}

/// Whitespace stripped from trimmed fields: the browser's `trim` set, which
/// includes the byte order mark and excludes U+0085.
fn is_trimmed_space(c: char) -> bool {
	c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}
