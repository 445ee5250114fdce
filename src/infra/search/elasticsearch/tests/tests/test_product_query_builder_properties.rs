// Copyright Searchly contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use proptest::prelude::*;
use searchly_search_elasticsearch::ProductQueryBuilder;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

proptest! {
    #[test]
    fn search_query_embeds_text_verbatim(text in ".*") {
        let query = ProductQueryBuilder::build_search_query(&text);

        let should = query["query"]["bool"]["should"].as_array().unwrap();
        prop_assert_eq!(should.len(), 2);
        prop_assert_eq!(&should[0]["match"]["product_name"], &serde_json::json!(text));
        prop_assert_eq!(&should[1]["match"]["category"], &serde_json::json!(text));

        let suggest = query["suggest"].as_object().unwrap();
        prop_assert_eq!(suggest.len(), 2);
        for suggester in suggest.values() {
            prop_assert_eq!(&suggester["text"], &serde_json::json!(text));
        }
    }

    #[test]
    fn search_query_is_deterministic(text in "\\PC{0,40}") {
        let a = ProductQueryBuilder::build_search_query(&text);
        let b = ProductQueryBuilder::build_search_query(&text);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn search_suggesters_carry_term_and_phrase(text in "\\PC{1,40}") {
        let query = ProductQueryBuilder::build_search_query(&text);

        let suggest = query["suggest"].as_object().unwrap();
        let mut names: Vec<&str> = suggest.keys().map(String::as_str).collect();
        names.sort_unstable();
        prop_assert_eq!(names, vec!["category_suggestion", "product_name_suggestion"]);

        for suggester in suggest.values() {
            prop_assert!(suggester["term"].is_object());

            let phrase = &suggester["phrase"];
            prop_assert!(phrase.is_object());
            prop_assert_eq!(&phrase["size"], &serde_json::json!(5));
            prop_assert_eq!(&phrase["gram_size"], &serde_json::json!(1));
            prop_assert_eq!(
                &phrase["direct_generator"][0]["suggest_mode"],
                &serde_json::json!("always")
            );
        }
    }

    #[test]
    fn live_suggest_query_is_deterministic(prefix in "\\PC{0,40}") {
        let a = ProductQueryBuilder::build_live_suggest_query(&prefix);
        let b = ProductQueryBuilder::build_live_suggest_query(&prefix);
        prop_assert_eq!(&a, &b);

        let suggest = a["suggest"].as_object().unwrap();
        prop_assert_eq!(suggest.len(), 2);
        for suggester in suggest.values() {
            prop_assert_eq!(&suggester["prefix"], &serde_json::json!(prefix));
            prop_assert_eq!(&suggester["completion"]["size"], &serde_json::json!(5));
            prop_assert_eq!(
                &suggester["completion"]["fuzzy"]["fuzziness"],
                &serde_json::json!("AUTO")
            );
        }
    }

    #[test]
    fn compiled_queries_survive_serialization(text in any::<String>()) {
        let query = ProductQueryBuilder::build_search_query(&text);
        let encoded = serde_json::to_string(&query).unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, query);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
