use std::fs;
use std::path::Path;

use crate::env_file::ApiKey;
use crate::error::{InjectError, Result};

pub const PLACEHOLDER: &str = "{{GOOGLE_MAPS_API_KEY}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub contents: String,
    pub placeholder_replaced: bool,
}

pub fn render(template: &str, key: &ApiKey) -> Rendered {
    let placeholder_replaced = template.contains(PLACEHOLDER);
    Rendered {
        contents: template.replacen(PLACEHOLDER, key.as_str(), 1),
        placeholder_replaced,
    }
}

pub fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| InjectError::read(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> ApiKey {
        ApiKey::from(value.to_string())
    }

    #[test]
    fn replaces_single_placeholder() {
        let rendered = render("<script>key={{GOOGLE_MAPS_API_KEY}}</script>", &key("AIza123"));
        assert_eq!(rendered.contents, "<script>key=AIza123</script>");
        assert!(rendered.placeholder_replaced);
    }

    #[test]
    fn only_first_placeholder_is_replaced() {
        let rendered = render(
            "a={{GOOGLE_MAPS_API_KEY}};b={{GOOGLE_MAPS_API_KEY}}",
            &key("k"),
        );
        assert_eq!(rendered.contents, "a=k;b={{GOOGLE_MAPS_API_KEY}}");
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        let template = "<html>\n  <body>no key here</body>\n</html>\n";
        let rendered = render(template, &key("AIza123"));
        assert_eq!(rendered.contents, template);
        assert!(!rendered.placeholder_replaced);
    }

    #[test]
    fn key_is_inserted_literally() {
        let rendered = render("k={{GOOGLE_MAPS_API_KEY}}", &key("$&$1{{x}}"));
        assert_eq!(rendered.contents, "k=$&$1{{x}}");
    }

    #[test]
    fn empty_key_removes_placeholder() {
        let rendered = render("[{{GOOGLE_MAPS_API_KEY}}]", &key(""));
        assert_eq!(rendered.contents, "[]");
        assert!(rendered.placeholder_replaced);
    }
}
