#[cfg(test)]
mod tests {
    use crate::models::Rewrite;
    use crate::services::{build_proxy_table, PROXY_PATH_PREFIXES};

    #[test]
    fn test_table_covers_every_prefix() {
        let table = build_proxy_table("http://127.0.0.1:4000");

        assert_eq!(table.rules.len(), PROXY_PATH_PREFIXES.len());
        for prefix in PROXY_PATH_PREFIXES {
            let rule = table
                .rules
                .iter()
                .find(|rule| rule.path_prefix == prefix)
                .unwrap_or_else(|| panic!("missing rule for {}", prefix));
            assert_eq!(rule.target, "http://127.0.0.1:4000");
            assert!(rule.change_origin);
        }
    }

    #[test]
    fn test_only_target_varies_with_input() {
        let a = build_proxy_table("http://127.0.0.1:4000");
        let b = build_proxy_table("http://backend.internal:9000");

        let a_prefixes: Vec<_> = a.prefixes().collect();
        let b_prefixes: Vec<_> = b.prefixes().collect();
        assert_eq!(a_prefixes, b_prefixes);

        assert!(b.rules.iter().all(|r| r.target == "http://backend.internal:9000"));
    }

    #[test]
    fn test_only_readme_rule_carries_a_rewrite() {
        let table = build_proxy_table("http://127.0.0.1:4000");

        for rule in &table.rules {
            if rule.path_prefix == "/api/readme" {
                assert_eq!(rule.rewrite, Some(Rewrite::Identity));
            } else {
                assert_eq!(rule.rewrite, None);
            }
        }
    }

    #[test]
    fn test_history_rule_matches_expected_shape() {
        let table = build_proxy_table("http://127.0.0.1:4000");
        let rule = table.match_rule("/history").unwrap();

        assert_eq!(rule.path_prefix, "/history");
        assert_eq!(rule.target, "http://127.0.0.1:4000");
        assert!(rule.change_origin);
        assert_eq!(rule.rewrite, None);
    }

    #[test]
    fn test_readme_beats_generic_api_prefix() {
        let table = build_proxy_table("http://127.0.0.1:4000");

        let rule = table.match_rule("/api/readme").unwrap();
        assert_eq!(rule.path_prefix, "/api/readme");
        assert_eq!(rule.rewrite, Some(Rewrite::Identity));

        let rule = table.match_rule("/api/history_summary").unwrap();
        assert_eq!(rule.path_prefix, "/api");
        assert_eq!(rule.rewrite, None);
    }

    #[test]
    fn test_malformed_origin_is_accepted_verbatim() {
        // No validation happens at build time.
        let table = build_proxy_table("not a url");
        assert!(table.rules.iter().all(|r| r.target == "not a url"));
    }
}
