//! The generated `src/default-config.ts` document.

use super::credential::Credential;

/// Relative path of the generated file inside the plugin project.
pub const DEFAULT_OUTPUT_FILE: &str = "src/default-config.ts";

/// Fixed development config consumed by the plugin build.
///
/// `validated` is always `true` when written; the plugin's checked-in
/// template carries `false` and an empty key.
#[derive(Debug, Clone)]
pub struct GeneratedConfig<'a> {
    credential: &'a Credential,
}

impl<'a> GeneratedConfig<'a> {
    pub const fn new(credential: &'a Credential) -> Self {
        Self { credential }
    }

    /// Render the file contents. The key is embedded verbatim and the
    /// document ends at `};` with no trailing newline.
    pub fn render(&self) -> String {
        format!(
            "/**
 * Default configuration for development
 * THIS FILE SHOULD NOT BE COMMITTED TO GIT
 * Add to .gitignore: {DEFAULT_OUTPUT_FILE}
 */

// For production/distribution, this should be empty
// For your personal development, your API key is included
export const DEFAULT_CONFIG = {{
  apiKey: '{}',
  validated: true
}};",
            self.credential.expose()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXPECTED: &str = "/**\n * Default configuration for development\n * THIS FILE SHOULD NOT BE COMMITTED TO GIT\n * Add to .gitignore: src/default-config.ts\n */\n\n// For production/distribution, this should be empty\n// For your personal development, your API key is included\nexport const DEFAULT_CONFIG = {\n  apiKey: 'AIzaSyTestKey1234567890ABCDEF',\n  validated: true\n};";

    #[test]
    fn test_render_exact_template() {
        let credential = Credential::new("gemini", "AIzaSyTestKey1234567890ABCDEF").unwrap();
        assert_eq!(GeneratedConfig::new(&credential).render(), EXPECTED);
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let credential = Credential::new("gemini", "k").unwrap();
        assert!(GeneratedConfig::new(&credential).render().ends_with("};"));
    }

    proptest! {
        #[test]
        fn prop_key_embedded_verbatim(key in "[^\r\n]{1,80}") {
            let credential = Credential::new("gemini", key.clone()).unwrap();
            let rendered = GeneratedConfig::new(&credential).render();
            let expected_line = format!("  apiKey: '{key}',");
            prop_assert!(rendered.lines().any(|line| line == expected_line));
            prop_assert_eq!(rendered.matches("validated: true").count(), 1);
        }

        #[test]
        fn prop_render_is_deterministic(key in "[A-Za-z0-9_-]{1,64}") {
            let credential = Credential::new("gemini", key).unwrap();
            let config = GeneratedConfig::new(&credential);
            prop_assert_eq!(config.render(), config.render());
        }
    }
}
