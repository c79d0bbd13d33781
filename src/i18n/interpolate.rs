//! Placeholder interpolation for resolved message templates.

/// Substitute `{name}` placeholders in `template` with values from `args`.
///
/// Placeholder names are ASCII word characters (`[A-Za-z0-9_]`). A
/// placeholder with no matching argument is left verbatim in the output,
/// visibly signaling the missing parameter. Braces that do not form a
/// well-formed placeholder pass through unchanged.
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_identifier(&after[..end]) => {
                let name = &after[..end];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                // Not a placeholder; emit the brace and keep scanning.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_substitutes_named_placeholder() {
        let result = interpolate("Hello {name}", &args(&[("name", "Sam")]));
        assert_eq!(result, "Hello Sam");
    }

    #[test]
    fn test_missing_argument_leaves_token() {
        assert_eq!(interpolate("Hello {name}", &[]), "Hello {name}");
    }

    #[test]
    fn test_multiple_placeholders() {
        let result = interpolate(
            "{clubName} has served {village} for {years} years",
            &args(&[("clubName", "White Army"), ("village", "Thumpoly"), ("years", "17")]),
        );
        assert_eq!(result, "White Army has served Thumpoly for 17 years");
    }

    #[test]
    fn test_repeated_placeholder() {
        let result = interpolate("{x} and {x}", &args(&[("x", "again")]));
        assert_eq!(result, "again and again");
    }

    #[test]
    fn test_numeric_value_via_to_string() {
        let result = interpolate("Since {year}", &[("year", 2014.to_string())]);
        assert_eq!(result, "Since 2014");
    }

    #[test]
    fn test_empty_braces_pass_through() {
        assert_eq!(interpolate("a {} b", &[]), "a {} b");
    }

    #[test]
    fn test_unterminated_brace_passes_through() {
        assert_eq!(interpolate("a {name b", &args(&[("name", "x")])), "a {name b");
    }

    #[test]
    fn test_non_identifier_braces_pass_through() {
        assert_eq!(interpolate("{not valid}", &args(&[("not", "x")])), "{not valid}");
    }

    #[test]
    fn test_doubled_braces_match_inner_placeholder() {
        // Mirrors the global-regex behavior: the inner {name} is the match.
        let result = interpolate("{{name}}", &args(&[("name", "Sam")]));
        assert_eq!(result, "{Sam}");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(interpolate("plain text", &args(&[("name", "x")])), "plain text");
    }
}
