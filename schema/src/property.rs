//! Declarative property definitions and the checks a settings store runs against them.

use std::collections::BTreeMap;

use earcon_common::errors::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON type of a property.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
	/// `true` or `false`.
	Boolean,
	/// Any finite number.
	Number,
	/// A number without a fractional part.
	Integer,
	/// A string, usually further restricted by `enum`.
	String,
	/// A JSON object.
	Object,
	/// A JSON array.
	Array,
}

impl PropertyType {
	fn name(self) -> &'static str {
		match self {
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::Integer => "integer",
			Self::String => "string",
			Self::Object => "object",
			Self::Array => "array",
		}
	}

	fn accepts(self, value: &Value) -> bool {
		match self {
			Self::Boolean => value.is_boolean(),
			Self::Number => value.is_number(),
			Self::Integer => {
				value.is_i64()
					|| value.is_u64() || value.as_f64().is_some_and(|n| n.fract() == 0.0)
			}
			Self::String => value.is_string(),
			Self::Object => value.is_object(),
			Self::Array => value.is_array(),
		}
	}
}

/// Where a setting may be overridden.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
	/// Only in user settings.
	Application,
	/// User or remote settings, never workspace settings.
	Machine,
	/// User, remote or workspace settings.
	Window,
	/// Any level, including per-folder.
	Resource,
	/// Any level, including per-language overrides.
	LanguageOverridable,
	/// Like [`Scope::Machine`] but may be overridden by the workspace.
	MachineOverridable,
}

/// Definition of one setting, or of one sub-property of an object setting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
	/// The JSON type.
	#[serde(rename = "type")]
	pub kind: PropertyType,
	/// Value used when the user did not set one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<Value>,
	/// Closed set of accepted values.
	#[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
	pub choices: Option<Vec<Value>>,
	/// One description per `enum` entry.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub enum_descriptions: Option<Vec<String>>,
	/// One display label per `enum` entry.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub enum_item_labels: Option<Vec<String>>,
	/// Inclusive lower bound for numbers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub minimum: Option<f64>,
	/// Inclusive upper bound for numbers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub maximum: Option<f64>,
	/// Declared sub-properties of an object.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub properties: Option<BTreeMap<String, PropertySchema>>,
	/// `Some(false)` rejects sub-properties missing from `properties`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub additional_properties: Option<bool>,
	/// Plain text description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Markdown description, shown instead of `description` where supported.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub markdown_description: Option<String>,
	/// Overrides the scope of the enclosing node.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<Scope>,
	/// Search tags for the settings UI.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
}

impl PropertySchema {
	/// A bare property of the given type.
	#[must_use]
	pub fn new(kind: PropertyType) -> Self {
		Self {
			kind,
			default: None,
			choices: None,
			enum_descriptions: None,
			enum_item_labels: None,
			minimum: None,
			maximum: None,
			properties: None,
			additional_properties: None,
			description: None,
			markdown_description: None,
			scope: None,
			tags: Vec::new(),
		}
	}

	/// Set the default value.
	#[must_use]
	pub fn with_default(mut self, default: impl Into<Value>) -> Self {
		self.default = Some(default.into());
		self
	}

	/// Set the description.
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the inclusive numeric bounds.
	#[must_use]
	pub fn with_bounds(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
		self.minimum = minimum;
		self.maximum = maximum;
		self
	}

	/// Restrict a string property to `choices`, described one by one.
	#[must_use]
	pub fn with_choices<I, S>(mut self, choices: I, descriptions: Vec<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.choices = Some(choices.into_iter().map(|c| Value::String(c.into())).collect());
		self.enum_descriptions = Some(descriptions);
		self
	}

	/// Add a search tag.
	#[must_use]
	pub fn tagged(mut self, tag: &str) -> Self {
		self.tags.push(tag.to_owned());
		self
	}

	/// Check `value` against this schema.
	/// `key` is only used to name the offending setting in the error.
	///
	/// # Errors
	///
	/// The first violation found, as a [`SchemaError`].
	pub fn validate(&self, key: &str, value: &Value) -> Result<(), SchemaError> {
		if !self.kind.accepts(value) {
			return Err(SchemaError::TypeMismatch {
				key: key.to_owned(),
				expected: self.kind.name(),
			});
		}
		if let Some(choices) = &self.choices {
			if !choices.contains(value) {
				return Err(SchemaError::NotInEnum {
					key: key.to_owned(),
					value: value.to_string(),
				});
			}
		}
		if let Some(n) = value.as_f64() {
			if let Some(minimum) = self.minimum.filter(|min| n < *min) {
				return Err(SchemaError::BelowMinimum {
					key: key.to_owned(),
					minimum,
					value: n,
				});
			}
			if let Some(maximum) = self.maximum.filter(|max| n > *max) {
				return Err(SchemaError::AboveMaximum {
					key: key.to_owned(),
					maximum,
					value: n,
				});
			}
		}
		if let Value::Object(fields) = value {
			for (name, field) in fields {
				match self.properties.as_ref().and_then(|props| props.get(name)) {
					Some(schema) => schema.validate(&format!("{key}.{name}"), field)?,
					None if self.additional_properties == Some(false) => {
						return Err(SchemaError::UnknownProperty {
							key: key.to_owned(),
							property: name.clone(),
						});
					}
					None => {}
				}
			}
		}
		Ok(())
	}

	/// Pull a numeric value back inside `[minimum, maximum]`.
	/// Anything that is not a number, or has no bounds, comes back unchanged.
	#[must_use]
	pub fn clamp(&self, value: &Value) -> Value {
		let Some(n) = value.as_f64() else {
			return value.clone();
		};
		let bound = match (self.minimum, self.maximum) {
			(Some(min), _) if n < min => min,
			(_, Some(max)) if n > max => max,
			_ => return value.clone(),
		};
		serde_json::Number::from_f64(bound).map_or_else(|| value.clone(), Value::Number)
	}
}

/// A named group of properties, registered as one unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigurationNode {
	/// Registration identity; registering another node with the same id replaces this one.
	pub id: String,
	/// Heading in the settings UI.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Always [`PropertyType::Object`].
	#[serde(rename = "type")]
	pub kind: PropertyType,
	/// Default scope of every property in the node.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<Scope>,
	/// Setting key to definition.
	#[serde(default)]
	pub properties: BTreeMap<String, PropertySchema>,
}

impl ConfigurationNode {
	/// An empty node.
	#[must_use]
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: Some(title.into()),
			kind: PropertyType::Object,
			scope: None,
			properties: BTreeMap::new(),
		}
	}

	/// Add a property.
	#[must_use]
	pub fn with_property(mut self, key: impl Into<String>, schema: PropertySchema) -> Self {
		self.properties.insert(key.into(), schema);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn delays() -> PropertySchema {
		let mut general = PropertySchema::new(PropertyType::Object);
		general.additional_properties = Some(false);
		general.properties = Some(BTreeMap::from([(
			"sound".to_owned(),
			PropertySchema::new(PropertyType::Number).with_bounds(Some(0.0), None),
		)]));
		general
	}

	#[test]
	fn rejects_wrong_type() {
		let schema = PropertySchema::new(PropertyType::Boolean);
		assert_eq!(
			schema.validate("accessibility.underlineLinks", &json!("yes")),
			Err(SchemaError::TypeMismatch {
				key: "accessibility.underlineLinks".to_owned(),
				expected: "boolean"
			})
		);
	}

	#[test]
	fn integer_accepts_whole_floats() {
		let schema = PropertySchema::new(PropertyType::Integer);
		assert!(schema.validate("k", &json!(3.0)).is_ok());
		assert!(schema.validate("k", &json!(3.5)).is_err());
	}

	#[test]
	fn enum_membership_is_checked() {
		let schema = PropertySchema::new(PropertyType::String)
			.with_choices(["auto", "off"], vec![String::new(), String::new()]);
		assert!(schema.validate("k", &json!("auto")).is_ok());
		assert!(matches!(
			schema.validate("k", &json!("on")),
			Err(SchemaError::NotInEnum { .. })
		));
	}

	#[test]
	fn nested_violation_names_full_path() {
		assert_eq!(
			delays().validate("delays", &json!({ "sound": -1 })),
			Err(SchemaError::BelowMinimum {
				key: "delays.sound".to_owned(),
				minimum: 0.0,
				value: -1.0
			})
		);
		assert_eq!(
			delays().validate("delays", &json!({ "volume": 1 })),
			Err(SchemaError::UnknownProperty {
				key: "delays".to_owned(),
				property: "volume".to_owned()
			})
		);
	}

	#[test]
	fn clamp_only_touches_out_of_range_numbers() {
		let schema = PropertySchema::new(PropertyType::Number).with_bounds(Some(0.2), Some(1.0));
		assert_eq!(schema.clamp(&json!(0.1)), json!(0.2));
		assert_eq!(schema.clamp(&json!(3)), json!(1.0));
		assert_eq!(schema.clamp(&json!(0.5)), json!(0.5));
		assert_eq!(schema.clamp(&json!("x")), json!("x"));
	}
}
