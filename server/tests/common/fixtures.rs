//! Reusable test fixtures and test data

use strata_core::StaticSettings;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Static settings with the admin token and one static-only value
pub fn admin_static_settings() -> StaticSettings {
	let mut system = StaticSettings::default();
	system.set("server.admin_token", ADMIN_TOKEN);
	system.set("smtp.host", "static.example.com");
	system
}

/// Email settings as submitted by an admin form
pub fn sample_email_settings() -> serde_json::Value {
	serde_json::json!({
		"email.smtp_port": "25",
		"email.smtp_secure_connection": "starttls",
		"email.from": "noreply@example.com",
		"email.prefix": "[STRATA]",
		"email.smtp_password": null
	})
}
