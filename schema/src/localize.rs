//! Display strings.
//!
//! The catalog never decides the final wording of a description on its own; every string goes
//! through a [`Localizer`] first, so a host can swap in translated text.

/// Turns a message key and its English template into the displayed string.
pub trait Localizer {
	/// `template` may contain positional placeholders `{0}`, `{1}`, ... which are filled from `args`.
	fn localize(&self, key: &str, template: &str, args: &[&str]) -> String;
}

/// The fallback localizer: ignores the key and fills placeholders in the English template.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateLocalizer;

impl Localizer for TemplateLocalizer {
	fn localize(&self, _key: &str, template: &str, args: &[&str]) -> String {
		format_template(template, args)
	}
}

/// Replace `{n}` with `args[n]`. Placeholders without a matching argument are left as they are.
/// Substituted text is never scanned again.
#[must_use]
pub fn format_template(template: &str, args: &[&str]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let tail = &rest[open..];
		let arg = tail
			.find('}')
			.and_then(|close| tail[1..close].parse::<usize>().ok().map(|i| (i, close)))
			.and_then(|(i, close)| args.get(i).map(|arg| (*arg, close)));
		match arg {
			Some((arg, close)) => {
				out.push_str(arg);
				rest = &tail[close + 1..];
			}
			None => {
				out.push('{');
				rest = &tail[1..];
			}
		}
	}
	out.push_str(rest);
	out
}
