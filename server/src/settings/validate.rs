//! Declarative validation of raw settings submissions
//!
//! The rule set mirrors the admin form field by field. All offending
//! fields are collected into one `FieldErrors` map so the UI can render
//! every problem at once; a document is only produced when the map stays
//! empty.

use serde_json::Value;

use crate::prelude::*;

use super::types::ConsentSettings;

const POSITIONS: [&str; 3] = ["bottom", "top", "center"];
const LAYOUTS: [&str; 3] = ["bar", "box", "popup"];
const THEMES: [&str; 3] = ["light", "dark", "auto"];

const COLOR_FIELDS: [&str; 4] =
	["primaryColor", "secondaryColor", "backgroundColor", "textColor"];
const BOOL_FIELDS: [&str; 4] =
	["enabled", "showRejectAll", "showCustomize", "blockScriptsUntilConsent"];
const TEXT_FIELDS: [(&str, usize); 7] = [
	("bannerTitle", 255),
	("bannerDescription", 1000),
	("acceptAll", 50),
	("rejectAll", 50),
	("customize", 50),
	("savePreferences", 50),
	("close", 50),
];
const CATEGORY_KEYS: [&str; 4] = ["necessary", "functional", "analytics", "marketing"];
const SCRIPT_KEYS: [&str; 3] = ["analytics", "marketing", "functional"];

/// Validates a raw settings document against the schema rules.
///
/// On success the document is coerced into a typed [`ConsentSettings`]
/// with absent optional fields taken from the canonical defaults. On
/// failure every offending field path is reported; no document is
/// produced.
pub fn validate_settings(raw: &Value) -> Result<ConsentSettings, FieldErrors> {
	let mut errors = FieldErrors::new();

	let Some(obj) = raw.as_object() else {
		errors.insert("settings".into(), "must be an object".into());
		return Err(errors);
	};

	check_enum(obj.get("position"), "position", &POSITIONS, &mut errors);
	check_enum(obj.get("layout"), "layout", &LAYOUTS, &mut errors);
	check_enum(obj.get("theme"), "theme", &THEMES, &mut errors);

	for field in COLOR_FIELDS {
		check_string(obj.get(field), field, 20, Req::Required, &mut errors);
	}

	check_expiry_days(obj.get("cookieExpiryDays"), &mut errors);

	for field in BOOL_FIELDS {
		check_bool(obj.get(field), field, &mut errors);
	}

	check_string(obj.get("privacyPolicyUrl"), "privacyPolicyUrl", 255, Req::Optional, &mut errors);
	check_string(obj.get("cookiePolicyUrl"), "cookiePolicyUrl", 255, Req::Optional, &mut errors);

	check_texts(obj.get("texts"), &mut errors);
	check_categories(obj.get("categories"), &mut errors);
	check_scripts(obj.get("scripts"), &mut errors);
	check_sort_order(obj.get("sortOrder"), &mut errors);

	if !errors.is_empty() {
		return Err(errors);
	}

	ConsentSettings::merged_with_defaults(raw).map_err(|err| {
		let mut errors = FieldErrors::new();
		errors.insert("settings".into(), err.to_string());
		errors
	})
}

enum Req {
	Required,
	Optional,
}

fn check_enum(value: Option<&Value>, path: &str, allowed: &[&str], errors: &mut FieldErrors) {
	match value {
		None | Some(Value::Null) => {
			errors.insert(path.into(), "required field is missing".into());
		}
		Some(Value::String(s)) => {
			if !allowed.contains(&s.as_str()) {
				errors.insert(path.into(), format!("must be one of: {}", allowed.join(", ")));
			}
		}
		Some(_) => {
			errors.insert(path.into(), "must be a string".into());
		}
	}
}

fn check_string(value: Option<&Value>, path: &str, max: usize, req: Req, errors: &mut FieldErrors) {
	match value {
		None | Some(Value::Null) => {
			if matches!(req, Req::Required) {
				errors.insert(path.into(), "required field is missing".into());
			}
		}
		Some(Value::String(s)) => {
			if s.chars().count() > max {
				errors.insert(path.into(), format!("must be at most {} characters", max));
			}
		}
		Some(_) => {
			errors.insert(path.into(), "must be a string".into());
		}
	}
}

fn check_bool(value: Option<&Value>, path: &str, errors: &mut FieldErrors) {
	match value {
		None | Some(Value::Bool(_)) => {}
		Some(_) => {
			errors.insert(path.into(), "must be a boolean".into());
		}
	}
}

fn check_expiry_days(value: Option<&Value>, errors: &mut FieldErrors) {
	const PATH: &str = "cookieExpiryDays";
	match value {
		None | Some(Value::Null) => {
			errors.insert(PATH.into(), "required field is missing".into());
		}
		Some(Value::Number(n)) => match n.as_i64() {
			Some(days) if (1..=730).contains(&days) => {}
			Some(_) => {
				errors.insert(PATH.into(), "must be between 1 and 730".into());
			}
			None => {
				errors.insert(PATH.into(), "must be an integer".into());
			}
		},
		Some(_) => {
			errors.insert(PATH.into(), "must be an integer".into());
		}
	}
}

fn check_sort_order(value: Option<&Value>, errors: &mut FieldErrors) {
	const PATH: &str = "sortOrder";
	// The typed field is a u32, so the rule walk bounds the value the same
	// way; anything larger must fail here with the real field path.
	match value {
		None => {}
		Some(Value::Number(n)) => match n.as_u64() {
			Some(order) if order <= u64::from(u32::MAX) => {}
			_ => {
				errors.insert(
					PATH.into(),
					format!("must be an integer between 0 and {}", u32::MAX),
				);
			}
		},
		Some(_) => {
			errors.insert(PATH.into(), format!("must be an integer between 0 and {}", u32::MAX));
		}
	}
}

fn check_texts(value: Option<&Value>, errors: &mut FieldErrors) {
	let Some(obj) = value.and_then(Value::as_object) else {
		errors.insert("texts".into(), "required field is missing".into());
		return;
	};
	for (field, max) in TEXT_FIELDS {
		check_string(obj.get(field), &format!("texts.{}", field), max, Req::Required, errors);
	}
}

fn check_categories(value: Option<&Value>, errors: &mut FieldErrors) {
	let Some(obj) = value.and_then(Value::as_object) else {
		errors.insert("categories".into(), "required field is missing".into());
		return;
	};
	for key in CATEGORY_KEYS {
		let path = format!("categories.{}", key);
		let Some(entry) = obj.get(key).and_then(Value::as_object) else {
			errors.insert(path, "required field is missing".into());
			continue;
		};
		check_bool(entry.get("enabled"), &format!("{}.enabled", path), errors);
		check_bool(entry.get("readonly"), &format!("{}.readonly", path), errors);
		check_string(entry.get("title"), &format!("{}.title", path), 100, Req::Required, errors);
		check_string(
			entry.get("description"),
			&format!("{}.description", path),
			500,
			Req::Required,
			errors,
		);
	}

	// The necessary category is the invariant of the whole model: it can
	// never be disabled or made editable by the visitor.
	if let Some(necessary) = obj.get("necessary").and_then(Value::as_object) {
		if necessary.get("enabled") == Some(&Value::Bool(false)) {
			errors.insert(
				"categories.necessary.enabled".into(),
				"the necessary category cannot be disabled".into(),
			);
		}
		if necessary.get("readonly") == Some(&Value::Bool(false)) {
			errors.insert(
				"categories.necessary.readonly".into(),
				"the necessary category must stay readonly".into(),
			);
		}
	}
}

fn check_scripts(value: Option<&Value>, errors: &mut FieldErrors) {
	match value {
		None => {}
		Some(Value::Object(obj)) => {
			for key in SCRIPT_KEYS {
				check_string(
					obj.get(key),
					&format!("scripts.{}", key),
					10000,
					Req::Optional,
					errors,
				);
			}
		}
		Some(_) => {
			errors.insert("scripts".into(), "must be an object".into());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::types::{BannerLayout, BannerPosition, BannerTheme};

	fn valid_document() -> Value {
		serde_json::json!({
			"enabled": true,
			"position": "top",
			"layout": "box",
			"theme": "dark",
			"primaryColor": "#4F46E5",
			"secondaryColor": "#6B7280",
			"backgroundColor": "#FFFFFF",
			"textColor": "#1F2937",
			"cookieExpiryDays": 180,
			"showRejectAll": true,
			"showCustomize": true,
			"blockScriptsUntilConsent": true,
			"privacyPolicyUrl": "/privacy-policy",
			"cookiePolicyUrl": "/cookie-policy",
			"texts": {
				"bannerTitle": "We use cookies",
				"bannerDescription": "Cookies make the store work.",
				"acceptAll": "Accept All",
				"rejectAll": "Reject All",
				"customize": "Customize",
				"savePreferences": "Save Preferences",
				"close": "Close",
			},
			"categories": {
				"necessary": {
					"enabled": true, "readonly": true,
					"title": "Necessary", "description": "Essential cookies.",
				},
				"functional": {
					"enabled": false, "readonly": false,
					"title": "Functional", "description": "Feature cookies.",
				},
				"analytics": {
					"enabled": true, "readonly": false,
					"title": "Analytics", "description": "Traffic cookies.",
				},
				"marketing": {
					"enabled": false, "readonly": false,
					"title": "Marketing", "description": "Ad cookies.",
				},
			},
			"scripts": { "analytics": "ga.js" },
			"sortOrder": 2,
		})
	}

	#[test]
	fn valid_document_round_trips() {
		let settings = validate_settings(&valid_document()).unwrap();
		assert!(settings.enabled);
		assert_eq!(settings.position, BannerPosition::Top);
		assert_eq!(settings.layout, BannerLayout::Box);
		assert_eq!(settings.theme, BannerTheme::Dark);
		assert_eq!(settings.cookie_expiry_days, 180);
		assert_eq!(settings.scripts.analytics.as_deref(), Some("ga.js"));
		assert_eq!(settings.sort_order, 2);
		// absent script slots default to the canonical empty value
		assert_eq!(settings.scripts.marketing.as_deref(), Some(""));
	}

	#[test]
	fn unknown_position_is_rejected() {
		let mut doc = valid_document();
		doc["position"] = "sideways".into();
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["position"], "must be one of: bottom, top, center");
	}

	#[test]
	fn expiry_days_boundaries() {
		for (days, ok) in [(0i64, false), (1, true), (730, true), (731, false)] {
			let mut doc = valid_document();
			doc["cookieExpiryDays"] = days.into();
			let result = validate_settings(&doc);
			assert_eq!(result.is_ok(), ok, "cookieExpiryDays = {}", days);
			if !ok {
				assert!(result.unwrap_err().contains_key("cookieExpiryDays"));
			}
		}
	}

	#[test]
	fn missing_close_text_names_the_field() {
		let mut doc = valid_document();
		doc["texts"].as_object_mut().unwrap().remove("close");
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["texts.close"], "required field is missing");
	}

	#[test]
	fn missing_category_is_rejected() {
		let mut doc = valid_document();
		doc["categories"].as_object_mut().unwrap().remove("marketing");
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["categories.marketing"], "required field is missing");
	}

	#[test]
	fn necessary_category_cannot_be_disabled() {
		let mut doc = valid_document();
		doc["categories"]["necessary"]["enabled"] = false.into();
		doc["categories"]["necessary"]["readonly"] = false.into();
		let errors = validate_settings(&doc).unwrap_err();
		assert!(errors.contains_key("categories.necessary.enabled"));
		assert!(errors.contains_key("categories.necessary.readonly"));
	}

	#[test]
	fn overlong_color_is_rejected() {
		let mut doc = valid_document();
		doc["primaryColor"] = "#".repeat(21).into();
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["primaryColor"], "must be at most 20 characters");
	}

	#[test]
	fn non_boolean_flag_is_rejected() {
		let mut doc = valid_document();
		doc["showRejectAll"] = "yes".into();
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["showRejectAll"], "must be a boolean");
	}

	#[test]
	fn all_errors_are_collected_at_once() {
		let mut doc = valid_document();
		doc["layout"] = "circle".into();
		doc["cookieExpiryDays"] = 0.into();
		doc["texts"].as_object_mut().unwrap().remove("acceptAll");
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors.len(), 3);
	}

	#[test]
	fn null_scripts_is_rejected_with_its_own_field_path() {
		let mut doc = valid_document();
		doc["scripts"] = Value::Null;
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["scripts"], "must be an object");
		assert!(!errors.contains_key("settings"));
	}

	#[test]
	fn sort_order_beyond_u32_is_rejected_with_its_own_field_path() {
		let mut doc = valid_document();
		doc["sortOrder"] = 4_294_967_296i64.into();
		let errors = validate_settings(&doc).unwrap_err();
		assert_eq!(errors["sortOrder"], "must be an integer between 0 and 4294967295");
		assert!(!errors.contains_key("settings"));

		// the u32 boundary itself is still accepted
		doc["sortOrder"] = 4_294_967_295i64.into();
		let settings = validate_settings(&doc).unwrap();
		assert_eq!(settings.sort_order, u32::MAX);
	}

	#[test]
	fn negative_sort_order_is_rejected() {
		let mut doc = valid_document();
		doc["sortOrder"] = (-1).into();
		let errors = validate_settings(&doc).unwrap_err();
		assert!(errors.contains_key("sortOrder"));
	}

	#[test]
	fn non_object_input_is_rejected() {
		let errors = validate_settings(&Value::String("nope".into())).unwrap_err();
		assert_eq!(errors["settings"], "must be an object");
	}
}

// vim: ts=4
