/*
 * Responsibility
 * - classify tokens in already-serialized JSON text and wrap them in spans
 * - structural characters and whitespace pass through untouched
 * - content is trusted (decoded token we produced); no HTML escaping here
 */
use std::sync::LazyLock;

use regex::{Captures, Regex};

// One pattern, alternation order is the classification priority:
// quoted string (optionally followed by `\s*:` -> key), then the bare words
// true/false/null, then a number literal.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(?:\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(?:\s*:)?|\b(?:true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+-]?\d+)?"#,
    )
    .expect("token pattern is valid")
});

pub fn highlight(json: &str) -> String {
    TOKEN_RE
        .replace_all(json, |caps: &Captures| {
            let token = &caps[0];
            format!(r#"<span class="{}">{}</span>"#, classify(token), token)
        })
        .into_owned()
}

fn classify(token: &str) -> &'static str {
    if token.starts_with('"') {
        // a quoted string followed by a colon is always a key, never a string
        if token.ends_with(':') {
            "json-key"
        } else {
            "json-string"
        }
    } else if token == "true" || token == "false" {
        "json-boolean"
    } else if token == "null" {
        "json-null"
    } else {
        "json-number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_keys_strings_numbers_and_booleans() {
        let out = highlight(r#"{"alg": "HS256", "sub": 123, "admin": true}"#);

        assert!(out.contains(r#"<span class="json-key">"alg":</span>"#));
        assert!(out.contains(r#"<span class="json-key">"sub":</span>"#));
        assert!(out.contains(r#"<span class="json-key">"admin":</span>"#));
        assert!(out.contains(r#"<span class="json-string">"HS256"</span>"#));
        assert!(out.contains(r#"<span class="json-number">123</span>"#));
        assert!(out.contains(r#"<span class="json-boolean">true</span>"#));
    }

    #[test]
    fn classifies_null_and_false() {
        let out = highlight(r#"{"a": null, "b": false}"#);
        assert!(out.contains(r#"<span class="json-null">null</span>"#));
        assert!(out.contains(r#"<span class="json-boolean">false</span>"#));
    }

    #[test]
    fn handles_number_shapes() {
        let out = highlight("[-1, 2.5, 1e10, -3.0E-2]");
        assert!(out.contains(r#"<span class="json-number">-1</span>"#));
        assert!(out.contains(r#"<span class="json-number">2.5</span>"#));
        assert!(out.contains(r#"<span class="json-number">1e10</span>"#));
        assert!(out.contains(r#"<span class="json-number">-3.0E-2</span>"#));
    }

    #[test]
    fn whitespace_before_colon_stays_inside_the_key_span() {
        let out = highlight(r#""iss" : "me""#);
        assert!(out.contains("<span class=\"json-key\">\"iss\" :</span>"));
        assert!(out.contains(r#"<span class="json-string">"me"</span>"#));
    }

    #[test]
    fn escaped_characters_stay_inside_one_string_token() {
        let out = highlight(r#"{"msg": "say \"hi\" é"}"#);
        assert!(out.contains(r#"<span class="json-string">"say \"hi\" é"</span>"#));
    }

    #[test]
    fn structure_and_indentation_pass_through() {
        let out = highlight("{\n  \"n\": 1\n}");
        assert!(out.starts_with("{\n  "));
        assert!(out.ends_with("\n}"));
    }

    #[test]
    fn true_inside_a_string_is_not_a_boolean() {
        let out = highlight(r#""true""#);
        assert_eq!(out, r#"<span class="json-string">"true"</span>"#);
    }
}
