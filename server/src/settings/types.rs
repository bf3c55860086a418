//! Settings schema types and the canonical default document
//!
//! The `Default` impls here are the single source of the default settings
//! document. The read-path merge, the validator, and the tests all
//! reference these; nothing else restates a default value.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Module slug under which settings are persisted per store
pub const MODULE_SLUG: &str = "cookie-consent";

/// Where the banner is rendered on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
	Bottom,
	Top,
	Center,
}

/// Visual shape of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLayout {
	Bar,
	Box,
	Popup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTheme {
	Light,
	Dark,
	Auto,
}

/// The banner's text bundle. All seven keys are required on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerTexts {
	pub banner_title: String,
	pub banner_description: String,
	pub accept_all: String,
	pub reject_all: String,
	pub customize: String,
	pub save_preferences: String,
	pub close: String,
}

impl Default for BannerTexts {
	fn default() -> Self {
		Self {
			banner_title: "We use cookies".into(),
			banner_description: "We use cookies to enhance your browsing experience, serve \
				personalized ads or content, and analyze our traffic. By clicking \"Accept \
				All\", you consent to our use of cookies."
				.into(),
			accept_all: "Accept All".into(),
			reject_all: "Reject All".into(),
			customize: "Customize".into(),
			save_preferences: "Save Preferences".into(),
			close: "Close".into(),
		}
	}
}

/// One consent category entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySettings {
	pub enabled: bool,
	pub readonly: bool,
	pub title: String,
	pub description: String,
}

/// The four consent categories. `necessary` is always enabled and readonly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentCategories {
	pub necessary: CategorySettings,
	pub functional: CategorySettings,
	pub analytics: CategorySettings,
	pub marketing: CategorySettings,
}

impl Default for ConsentCategories {
	fn default() -> Self {
		Self {
			necessary: CategorySettings {
				enabled: true,
				readonly: true,
				title: "Necessary".into(),
				description: "These cookies are essential for the website to function \
					properly. They cannot be disabled."
					.into(),
			},
			functional: CategorySettings {
				enabled: false,
				readonly: false,
				title: "Functional".into(),
				description: "These cookies enable personalized features and functionality."
					.into(),
			},
			analytics: CategorySettings {
				enabled: false,
				readonly: false,
				title: "Analytics".into(),
				description: "These cookies help us understand how visitors interact with \
					the website."
					.into(),
			},
			marketing: CategorySettings {
				enabled: false,
				readonly: false,
				title: "Marketing".into(),
				description: "These cookies are used to deliver personalized advertisements."
					.into(),
			},
		}
	}
}

/// Raw script snippets loaded only after consent for the matching category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentScripts {
	pub analytics: Option<String>,
	pub marketing: Option<String>,
	pub functional: Option<String>,
}

impl Default for ConsentScripts {
	fn default() -> Self {
		Self {
			analytics: Some(String::new()),
			marketing: Some(String::new()),
			functional: Some(String::new()),
		}
	}
}

/// The full per-store settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSettings {
	pub enabled: bool,
	pub position: BannerPosition,
	pub layout: BannerLayout,
	pub theme: BannerTheme,

	// Colors
	pub primary_color: String,
	pub secondary_color: String,
	pub background_color: String,
	pub text_color: String,

	// Behavior
	pub cookie_expiry_days: u32,
	pub show_reject_all: bool,
	pub show_customize: bool,
	pub block_scripts_until_consent: bool,

	// Links
	pub privacy_policy_url: Option<String>,
	pub cookie_policy_url: Option<String>,

	pub texts: BannerTexts,
	pub categories: ConsentCategories,
	pub scripts: ConsentScripts,

	pub sort_order: u32,
}

impl Default for ConsentSettings {
	fn default() -> Self {
		Self {
			enabled: false,
			position: BannerPosition::Bottom,
			layout: BannerLayout::Bar,
			theme: BannerTheme::Light,
			primary_color: "#4F46E5".into(),
			secondary_color: "#6B7280".into(),
			background_color: "#FFFFFF".into(),
			text_color: "#1F2937".into(),
			cookie_expiry_days: 365,
			show_reject_all: true,
			show_customize: true,
			block_scripts_until_consent: true,
			privacy_policy_url: Some("/privacy-policy".into()),
			cookie_policy_url: Some("/cookie-policy".into()),
			texts: BannerTexts::default(),
			categories: ConsentCategories::default(),
			scripts: ConsentScripts::default(),
			sort_order: 0,
		}
	}
}

impl ConsentSettings {
	/// The canonical default document as raw JSON
	pub fn default_document() -> CcResult<serde_json::Value> {
		serde_json::to_value(Self::default())
			.map_err(|err| Error::Internal(format!("Failed to serialize defaults: {}", err)))
	}

	/// Deserializes a stored document, substituting the canonical default
	/// for every missing key. Always yields a fully-populated document.
	pub fn merged_with_defaults(stored: &serde_json::Value) -> CcResult<Self> {
		let mut merged = Self::default_document()?;
		deep_merge(&mut merged, stored);
		serde_json::from_value(merged)
			.map_err(|err| Error::Internal(format!("Stored settings are malformed: {}", err)))
	}
}

/// Recursively overlays `overlay` onto `base`. Objects merge key by key,
/// everything else (including null) replaces the base value.
fn deep_merge(base: &mut serde_json::Value, overlay: &serde_json::Value) {
	match (base, overlay) {
		(serde_json::Value::Object(base_map), serde_json::Value::Object(overlay_map)) => {
			for (key, value) in overlay_map {
				match base_map.get_mut(key) {
					Some(slot) => deep_merge(slot, value),
					None => {
						base_map.insert(key.clone(), value.clone());
					}
				}
			}
		}
		(base, overlay) => *base = overlay.clone(),
	}
}

// Option lists //
//**************//
/// One `{value, label}` pair for the admin UI's select inputs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionItem {
	pub value: &'static str,
	pub label: &'static str,
}

/// Static option lists for the three enum fields
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SettingsOptions {
	pub position: [OptionItem; 3],
	pub layout: [OptionItem; 3],
	pub theme: [OptionItem; 3],
}

pub fn option_lists() -> SettingsOptions {
	SettingsOptions {
		position: [
			OptionItem { value: "bottom", label: "Bottom" },
			OptionItem { value: "top", label: "Top" },
			OptionItem { value: "center", label: "Center (Modal)" },
		],
		layout: [
			OptionItem { value: "bar", label: "Bar" },
			OptionItem { value: "box", label: "Box" },
			OptionItem { value: "popup", label: "Popup" },
		],
		theme: [
			OptionItem { value: "light", label: "Light" },
			OptionItem { value: "dark", label: "Dark" },
			OptionItem { value: "auto", label: "Auto (System)" },
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_serialize_with_camel_case_keys() {
		let doc = ConsentSettings::default_document().unwrap();
		assert_eq!(doc["position"], "bottom");
		assert_eq!(doc["cookieExpiryDays"], 365);
		assert_eq!(doc["texts"]["bannerTitle"], "We use cookies");
		assert_eq!(doc["categories"]["necessary"]["readonly"], true);
	}

	#[test]
	fn merge_fills_missing_keys_from_defaults() {
		let stored = serde_json::json!({
			"theme": "dark",
			"texts": { "bannerTitle": "Cookies?" },
		});
		let merged = ConsentSettings::merged_with_defaults(&stored).unwrap();
		assert_eq!(merged.theme, BannerTheme::Dark);
		assert_eq!(merged.texts.banner_title, "Cookies?");
		// untouched keys come from the canonical defaults
		assert_eq!(merged.texts.close, "Close");
		assert_eq!(merged.position, BannerPosition::Bottom);
	}

	#[test]
	fn merge_of_empty_document_equals_defaults() {
		let merged = ConsentSettings::merged_with_defaults(&serde_json::json!({})).unwrap();
		assert_eq!(merged, ConsentSettings::default());
	}

	#[test]
	fn option_lists_have_three_entries_each() {
		let options = option_lists();
		assert_eq!(options.position.map(|o| o.value), ["bottom", "top", "center"]);
		assert_eq!(options.layout.map(|o| o.value), ["bar", "box", "popup"]);
		assert_eq!(options.theme.map(|o| o.value), ["light", "dark", "auto"]);
	}
}

// vim: ts=4
