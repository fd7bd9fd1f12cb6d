use url::Url;

/// How the generated module obtains its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    /// A literal absolute URL, emitted as a string literal.
    Absolute(String),
    /// A dotted reference into ambient configuration, emitted as member
    /// access (`process.env.API_BASE`).
    ConfigPath(Vec<String>),
}

impl BaseUrl {
    /// Classify a raw `--base-url` value: a string that parses as an
    /// absolute URL is emitted verbatim; anything else is treated as a
    /// dotted property-access path. A malformed absolute URL therefore
    /// falls through to the property-path interpretation.
    pub fn classify(raw: &str) -> BaseUrl {
        match Url::parse(raw) {
            Ok(_) => BaseUrl::Absolute(raw.to_string()),
            Err(err) => {
                log::debug!("`{raw}` is not an absolute URL ({err}); treating it as a config reference");
                BaseUrl::ConfigPath(raw.split('.').map(str::to_string).collect())
            }
        }
    }

    /// The expression passed as the second argument of `new URL`. An absent
    /// base becomes an explicit `undefined`.
    pub fn to_expr(base: Option<&BaseUrl>) -> String {
        match base {
            None => "undefined".to_string(),
            Some(BaseUrl::Absolute(url)) => format!("\"{url}\""),
            Some(BaseUrl::ConfigPath(segments)) => segments.join("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_stays_literal() {
        let base = BaseUrl::classify("https://api.example.com/v2");
        assert_eq!(base, BaseUrl::Absolute("https://api.example.com/v2".to_string()));
        assert_eq!(
            BaseUrl::to_expr(Some(&base)),
            "\"https://api.example.com/v2\""
        );
    }

    #[test]
    fn dotted_reference_becomes_member_access() {
        let base = BaseUrl::classify("process.env.API_BASE");
        assert_eq!(
            base,
            BaseUrl::ConfigPath(vec![
                "process".to_string(),
                "env".to_string(),
                "API_BASE".to_string(),
            ])
        );
        assert_eq!(BaseUrl::to_expr(Some(&base)), "process.env.API_BASE");
    }

    #[test]
    fn single_segment_reference() {
        let base = BaseUrl::classify("baseUrl");
        assert_eq!(BaseUrl::to_expr(Some(&base)), "baseUrl");
    }

    #[test]
    fn missing_base_is_undefined() {
        assert_eq!(BaseUrl::to_expr(None), "undefined");
    }
}
